//! Failure payload used by operations under test.

use thiserror::Error;

/// A failure carrying only a message, comparable by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct Boom {
    message: String,
}

impl Boom {
    /// Creates a failure with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::Boom;

    #[test]
    fn displays_its_message() {
        let boom = Boom::new("boom");
        assert_eq!(boom.to_string(), "boom");
        assert_eq!(boom.message(), "boom");
    }
}
