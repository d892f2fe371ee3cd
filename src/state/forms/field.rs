//! Feedback form fields and focus order

/// Focusable rows of the feedback form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FeedbackField {
    #[default]
    Rating,
    Comment,
    Image,
    /// The "Enviar Feedback" button row
    Submit,
}

impl FeedbackField {
    pub const ALL: [FeedbackField; 4] = [
        FeedbackField::Rating,
        FeedbackField::Comment,
        FeedbackField::Image,
        FeedbackField::Submit,
    ];

    /// Field name used as the key of the error map
    pub fn name(self) -> &'static str {
        match self {
            FeedbackField::Rating => "rating",
            FeedbackField::Comment => "comment",
            FeedbackField::Image => "image",
            FeedbackField::Submit => "submit",
        }
    }

    /// Label shown above the field
    pub fn label(self) -> &'static str {
        match self {
            FeedbackField::Rating => "Avalie sua experiência:",
            FeedbackField::Comment => "Comentários:",
            FeedbackField::Image => "Carregar imagem (optional):",
            FeedbackField::Submit => "Enviar Feedback",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field in tab order (wraps around)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order (wraps around)
    pub fn prev(self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }
}
