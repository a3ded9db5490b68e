// UI state - presentation settings and transient messages
use crate::layout;
use crate::style::Theme;
use std::time::Instant;

pub struct UiState {
    pub theme: Theme,
    pub show_history_panel: bool,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UiState {
    pub fn new(theme: Theme, show_history_panel: bool) -> Self {
        Self {
            theme,
            show_history_panel,
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
        self.info_message = None;
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
        self.error_message = None;
    }

    pub fn clear_expired_messages(&mut self) {
        let timeout = layout::MESSAGE_TIMEOUT_SECS;
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout {
                self.info_message = None;
            }
        }
    }
}
