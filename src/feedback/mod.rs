//! Collaborators of the feedback form: where submissions go and where images come from

mod picker;
mod sink;
mod traits;

pub use picker::RfdImagePicker;
pub use sink::TracingSink;
pub use traits::{FeedbackSink, ImagePicker};

#[cfg(test)]
pub use traits::{MockFeedbackSink, MockImagePicker};
