pub mod canvas;
pub mod history;
pub mod toolbar;
