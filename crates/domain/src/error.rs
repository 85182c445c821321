//! The single error kind reported by face-service operations.

/// Error raised by any face-service operation.
///
/// Connection failures, timeout expiry, non-success HTTP statuses and
/// malformed response bodies all normalize into this one kind. Callers can
/// only tell the cases apart by the message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Create an error carrying the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_the_message_text() {
        let err = ServiceError::new("PersonGroupNotFound");
        assert_eq!(err.to_string(), "PersonGroupNotFound");
    }

    #[test]
    fn should_expose_the_message_for_inspection() {
        let err = ServiceError::new("timeout from face api");
        assert_eq!(err.message(), "timeout from face api");
    }

    #[test]
    fn should_compare_equal_when_messages_match() {
        assert_eq!(ServiceError::new("a"), ServiceError::new("a"));
        assert_ne!(ServiceError::new("a"), ServiceError::new("b"));
    }
}
