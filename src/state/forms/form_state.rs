//! Feedback form state

use super::field::FeedbackField;
use super::validation::{ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Highest selectable star rating
pub const MAX_RATING: u8 = 5;

/// Reference to a user-selected image file. Nothing is read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
}

/// Paths are not always UTF-8; invalid sequences become U+FFFD instead of failing
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name for display, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Payload handed to the feedback sink after a valid submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub rating: u8,
    pub comment: String,
    pub image: Option<ImageFile>,
}

/// Local state of the feedback form
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    /// 0 means unset, otherwise 1..=MAX_RATING
    rating: u8,
    comment: String,
    image: Option<ImageFile>,
    errors: ValidationErrors,
    pub active_field: FeedbackField,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Set the star rating. Values outside 1..=MAX_RATING are ignored.
    /// Existing errors are left alone until the next submit.
    pub fn set_rating(&mut self, rating: u8) -> bool {
        if (1..=MAX_RATING).contains(&rating) {
            self.rating = rating;
            true
        } else {
            tracing::debug!("Ignoring out of range rating {rating}");
            false
        }
    }

    /// Step the rating by one star, staying within 1..=MAX_RATING.
    /// Stepping down from unset leaves the rating unset.
    pub fn step_rating(&mut self, up: bool) {
        let next = if up {
            (self.rating + 1).min(MAX_RATING)
        } else if self.rating == 0 {
            return;
        } else {
            self.rating.saturating_sub(1).max(1)
        };
        self.set_rating(next);
    }

    /// Store the comment verbatim, whitespace included
    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.comment = text.into();
    }

    pub fn comment_input_char(&mut self, c: char) {
        self.comment.push(c);
    }

    pub fn comment_backspace(&mut self) {
        self.comment.pop();
    }

    /// Store the selected image, or clear it when the selection is empty
    pub fn handle_image_upload(&mut self, file: Option<ImageFile>) {
        self.image = file;
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Compute the error map for the current values
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.rating == 0 {
            errors.insert(ValidationError::MissingRating);
        }
        if self.comment.trim().is_empty() {
            errors.insert(ValidationError::EmptyComment);
        }
        errors
    }

    /// Replace the stored errors with a fresh validation result.
    /// Returns the payload to emit when there are no errors.
    pub fn submit(&mut self) -> Option<FeedbackSubmission> {
        self.errors = self.validate();
        if self.errors.is_empty() {
            Some(FeedbackSubmission {
                rating: self.rating,
                comment: self.comment.clone(),
                image: self.image.clone(),
            })
        } else {
            None
        }
    }

    /// Back to the initial empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_form_is_empty() {
        let form = FeedbackForm::new();
        assert_eq!(form.rating(), 0);
        assert_eq!(form.comment(), "");
        assert!(form.image().is_none());
        assert!(form.errors().is_empty());
        assert_eq!(form.active_field, FeedbackField::Rating);
    }

    #[test]
    fn test_set_rating_each_star() {
        let mut form = FeedbackForm::new();
        for n in 1..=5 {
            assert!(form.set_rating(n));
            assert_eq!(form.rating(), n);
        }
    }

    #[test]
    fn test_set_rating_out_of_range_ignored() {
        let mut form = FeedbackForm::new();
        form.set_rating(3);
        assert!(!form.set_rating(0));
        assert!(!form.set_rating(6));
        assert_eq!(form.rating(), 3);
    }

    #[test]
    fn test_step_rating_stays_in_bounds() {
        let mut form = FeedbackForm::new();
        form.step_rating(false);
        assert_eq!(form.rating(), 0);
        form.step_rating(true);
        assert_eq!(form.rating(), 1);
        form.step_rating(false);
        assert_eq!(form.rating(), 1);
        for _ in 0..10 {
            form.step_rating(true);
        }
        assert_eq!(form.rating(), 5);
    }

    #[test]
    fn test_set_rating_does_not_clear_errors() {
        let mut form = FeedbackForm::new();
        form.submit();
        form.set_rating(4);
        assert!(form.errors().get(FeedbackField::Rating).is_some());
    }

    #[test]
    fn test_comment_stored_verbatim() {
        let mut form = FeedbackForm::new();
        form.set_comment("  padded  ");
        assert_eq!(form.comment(), "  padded  ");
    }

    #[test]
    fn test_comment_editing() {
        let mut form = FeedbackForm::new();
        form.comment_input_char('o');
        form.comment_input_char('k');
        form.comment_backspace();
        assert_eq!(form.comment(), "o");
        form.comment_backspace();
        form.comment_backspace();
        assert_eq!(form.comment(), "");
    }

    #[test]
    fn test_image_upload_and_clear() {
        let mut form = FeedbackForm::new();
        form.handle_image_upload(Some(ImageFile::new("/tmp/box.png")));
        assert_eq!(form.image().map(|i| i.display_name()), Some("box.png".into()));
        form.handle_image_upload(None);
        assert!(form.image().is_none());
    }

    #[test]
    fn test_submit_empty_form_reports_both_errors() {
        let mut form = FeedbackForm::new();
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors().entries(),
            vec![
                ("rating", "Please select a rating".to_string()),
                ("comment", "Please provide a comment".to_string()),
            ]
        );
    }

    #[test]
    fn test_submit_whitespace_comment_is_error() {
        for comment in ["", "   ", "\t\n", " \n  "] {
            let mut form = FeedbackForm::new();
            form.set_rating(3);
            form.set_comment(comment);
            assert!(form.submit().is_none());
            assert_eq!(
                form.errors().get(FeedbackField::Comment),
                Some(ValidationError::EmptyComment)
            );
            assert!(form.errors().get(FeedbackField::Rating).is_none());
        }
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = FeedbackForm::new();
        form.set_rating(4);
        form.set_comment("Great service!");
        let submission = form.submit();
        assert!(form.errors().is_empty());
        assert_eq!(
            submission,
            Some(FeedbackSubmission {
                rating: 4,
                comment: "Great service!".to_string(),
                image: None,
            })
        );
    }

    #[test]
    fn test_submit_includes_selected_image() {
        let mut form = FeedbackForm::new();
        form.handle_image_upload(Some(ImageFile::new("/home/me/parcel.jpg")));
        form.set_rating(5);
        form.set_comment("Fast");
        let submission = form.submit().unwrap();
        assert_eq!(submission.image, Some(ImageFile::new("/home/me/parcel.jpg")));
    }

    #[test]
    fn test_resubmit_clears_only_fixed_field() {
        let mut form = FeedbackForm::new();
        form.submit();
        assert_eq!(form.errors().len(), 2);

        form.set_rating(2);
        assert!(form.submit().is_none());
        assert!(form.errors().get(FeedbackField::Rating).is_none());
        assert_eq!(
            form.errors().get(FeedbackField::Comment),
            Some(ValidationError::EmptyComment)
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = FeedbackForm::new();
        form.set_rating(5);
        form.set_comment("Fast");
        form.handle_image_upload(Some(ImageFile::new("a.png")));
        form.active_field = FeedbackField::Submit;
        form.submit();
        form.reset();
        assert_eq!(form.rating(), 0);
        assert_eq!(form.comment(), "");
        assert!(form.image().is_none());
        assert!(form.errors().is_empty());
        assert_eq!(form.active_field, FeedbackField::Rating);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_image_path_serializes_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let submission = FeedbackSubmission {
            rating: 5,
            comment: "Fast".to_string(),
            image: Some(ImageFile::new(OsStr::from_bytes(b"/tmp/foto\xff.png"))),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["image"]["path"], "/tmp/foto\u{FFFD}.png");
    }

    #[test]
    fn test_submission_serializes_missing_image_as_null() {
        let submission = FeedbackSubmission {
            rating: 4,
            comment: "Great service!".to_string(),
            image: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rating": 4, "comment": "Great service!", "image": null})
        );
    }
}
