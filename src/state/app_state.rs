//! Application state definitions

use super::forms::SignupForm;
use std::collections::VecDeque;

/// Top-level state shared by key handling and rendering
#[derive(Debug, Clone)]
pub struct AppState {
    /// The signup form and its current errors
    pub form: SignupForm,
    /// Render password fields as bullets
    pub mask_passwords: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Number of records the sink has accepted this session
    pub accepted_count: usize,
    /// Pending modal errors, oldest first
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SignupForm::new(),
            mask_passwords: true,
            status_message: None,
            accepted_count: 0,
            error_queue: VecDeque::new(),
        }
    }
}

impl AppState {
    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
