pub mod history;
pub mod tool;
pub mod ui;
pub mod viewport;

pub use history::ExtentHistory;
pub use tool::{Tool, ToolState};
pub use ui::UiState;
pub use viewport::MapViewport;
