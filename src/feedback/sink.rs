//! Feedback sink that writes submissions to the log

use super::traits::FeedbackSink;
use crate::state::FeedbackSubmission;
use anyhow::Result;

/// Logs each submission as a JSON payload on the `feedback` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn render(submission: &FeedbackSubmission) -> Result<String> {
        Ok(serde_json::to_string(submission)?)
    }
}

impl FeedbackSink for TracingSink {
    fn emit(&self, submission: &FeedbackSubmission) -> Result<()> {
        let payload = Self::render(submission)?;
        tracing::info!(target: "feedback", %payload, "Form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImageFile;

    #[test]
    fn test_render_with_image() {
        let submission = FeedbackSubmission {
            rating: 5,
            comment: "Fast".to_string(),
            image: Some(ImageFile::new("parcel.png")),
        };
        let payload = TracingSink::render(&submission).unwrap();
        assert_eq!(
            payload,
            r#"{"rating":5,"comment":"Fast","image":{"path":"parcel.png"}}"#
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_emit_accepts_non_utf8_image_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let submission = FeedbackSubmission {
            rating: 5,
            comment: "Fast".to_string(),
            image: Some(ImageFile::new(OsStr::from_bytes(b"/tmp/foto\xff.png"))),
        };
        assert!(TracingSink.emit(&submission).is_ok());
        let payload = TracingSink::render(&submission).unwrap();
        assert!(payload.contains("foto\u{FFFD}.png"));
    }

    #[test]
    fn test_emit_succeeds() {
        let submission = FeedbackSubmission {
            rating: 4,
            comment: "Great service!".to_string(),
            image: None,
        };
        assert!(TracingSink.emit(&submission).is_ok());
    }
}
