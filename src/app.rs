//! Application state and core logic

use crate::config::TrackerConfig;
use crate::feedback::{FeedbackSink, ImagePicker, RfdImagePicker, TracingSink};
use crate::state::{AppState, FeedbackField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shown in the status bar after feedback was handed to the sink
pub const SUBMITTED_MESSAGE: &str = "Feedback enviado. Obrigado!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated feedback goes
    sink: Box<dyn FeedbackSink>,
    /// File picker for the image field
    picker: Box<dyn ImagePicker>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app with the logging sink and the native file dialog
    pub fn new(config: &TrackerConfig) -> Self {
        Self::with_collaborators(config, Box::new(TracingSink), Box::new(RfdImagePicker))
    }

    pub fn with_collaborators(
        config: &TrackerConfig,
        sink: Box<dyn FeedbackSink>,
        picker: Box<dyn ImagePicker>,
    ) -> Self {
        Self {
            state: AppState::from_config(config),
            sink,
            picker,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let field = self.state.form.active_field;
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.handle_submit();
            }
            _ => match field {
                FeedbackField::Rating => self.handle_rating_key(key),
                FeedbackField::Comment => self.handle_comment_key(key),
                FeedbackField::Image => self.handle_image_key(key).await,
                FeedbackField::Submit => {
                    if key.code == KeyCode::Enter {
                        self.handle_submit();
                    }
                }
            },
        }
        Ok(())
    }

    /// A character key without Ctrl/Alt/Super chords (Shift is part of typing)
    fn is_plain_char(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char(_))
            && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
    }

    fn handle_rating_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char(_)) && !Self::is_plain_char(&key) {
            return;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(n) = c.to_digit(10) {
                    self.state.form.set_rating(n as u8);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => self.state.form.step_rating(true),
            KeyCode::Left | KeyCode::Char('h') => self.state.form.step_rating(false),
            _ => {}
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if Self::is_plain_char(&key) => self.state.form.comment_input_char(c),
            KeyCode::Backspace => self.state.form.comment_backspace(),
            KeyCode::Enter => self.state.form.comment_input_char('\n'),
            _ => {}
        }
    }

    async fn handle_image_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let picked = self.picker.pick_image().await;
                match &picked {
                    Some(file) => tracing::debug!("Image selected: {}", file.path().display()),
                    None => tracing::debug!("Image selection cleared"),
                }
                self.state.form.handle_image_upload(picked);
            }
            KeyCode::Delete | KeyCode::Backspace => self.state.form.handle_image_upload(None),
            _ => {}
        }
    }

    /// Validate the form and, when valid, hand the feedback to the sink.
    /// Never leaves the page; a successful submit resets the form.
    pub fn handle_submit(&mut self) {
        let Some(submission) = self.state.form.submit() else {
            let errors = self.state.form.errors();
            tracing::debug!(
                "Feedback rejected with {} validation error(s): {:?}",
                errors.len(),
                errors.entries()
            );
            return;
        };

        match self.sink.emit(&submission) {
            Ok(()) => {
                self.state.form.reset();
                self.state.status_message = Some(SUBMITTED_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!("Failed to send feedback: {err:#}");
                self.push_error(format!("Failed to send feedback: {err}"));
            }
        }
    }
}
