//! User feedback submission
//!
//! Feedback is a rating from 1 to 5 plus an optional message. Where it goes
//! is up to the [`FeedbackSink`]; the bundled [`LogFeedbackSink`] only
//! records it in the application log.

use thiserror::Error;
use tracing::info;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating
pub const MAX_RATING: u8 = 5;
/// Longest accepted message, in characters
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Errors raised while building or delivering feedback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Message is too long ({len} characters, maximum {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("Failed to send feedback: {0}")]
    Delivery(String),
}

/// A validated piece of feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    rating: u8,
    message: String,
}

impl Feedback {
    /// Validate and build feedback; surrounding whitespace is trimmed from the message
    pub fn new(rating: u8, message: impl Into<String>) -> Result<Self, FeedbackError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::InvalidRating(rating));
        }

        let message = message.into().trim().to_string();
        let len = message.chars().count();
        if len > MAX_MESSAGE_CHARS {
            return Err(FeedbackError::MessageTooLong {
                len,
                max: MAX_MESSAGE_CHARS,
            });
        }

        Ok(Self { rating, message })
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Destination for submitted feedback
pub trait FeedbackSink {
    /// Deliver feedback, reporting success or failure to the caller
    fn submit(&self, feedback: &Feedback) -> Result<(), FeedbackError>;
}

/// Sink that writes feedback to the log and nowhere else
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedbackSink;

impl FeedbackSink for LogFeedbackSink {
    fn submit(&self, feedback: &Feedback) -> Result<(), FeedbackError> {
        info!(
            rating = feedback.rating(),
            message = feedback.message(),
            "Feedback received"
        );
        Ok(())
    }
}
