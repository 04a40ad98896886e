use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient status message. The generation ties the message to its
/// dismissal timer, so a timer from a replaced message cannot clear a
/// newer one.
#[derive(Clone, Debug)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: Arc<str>,
    pub generation: u64,
}
