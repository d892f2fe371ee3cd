//! Trait abstractions for the feedback collaborators to enable mocking in tests

use crate::state::{FeedbackSubmission, ImageFile};
use anyhow::Result;
use async_trait::async_trait;

/// Receives validated feedback
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackSink {
    /// Hand over one submission
    fn emit(&self, submission: &FeedbackSubmission) -> Result<()>;
}

/// The native "choose a file" affordance for the image field
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Ask the user for an image. `None` means the selection was cancelled or cleared.
    async fn pick_image(&self) -> Option<ImageFile>;
}
