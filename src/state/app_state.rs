//! Application state definitions

use super::forms::FeedbackForm;
use super::tracking::{DeliveryEstimate, OrderProgress};
use crate::config::TrackerConfig;
use std::collections::VecDeque;

/// Everything the tracking page renders from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub progress: OrderProgress,
    pub delivery: DeliveryEstimate,
    pub form: FeedbackForm,
    /// Pending error messages, shown one at a time in a modal dialog
    error_queue: VecDeque<String>,
    /// One-line message for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the page state, taking stage and delivery date from config when set
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            progress: config.progress(),
            delivery: config.delivery(),
            ..Default::default()
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
