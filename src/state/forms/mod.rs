//! Form state types

mod field;
mod form_state;
mod validation;

pub use field::FeedbackField;
pub use form_state::{FeedbackForm, FeedbackSubmission, ImageFile, MAX_RATING};
