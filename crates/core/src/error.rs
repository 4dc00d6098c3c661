//! Domain error shared by the rules in this crate and the dashboard guards.

use crate::booking::IntervalError;
use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// Input rejected before any request is made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request clashes with existing state (an occupied slot, a
    /// final booking status).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No session.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Signed in, but the role may not see this.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    /// Text suitable for a field error or toast, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound { entity, .. } => format!("{entity} not found"),
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg) => msg.clone(),
        }
    }
}

impl From<IntervalError> for CoreError {
    fn from(err: IntervalError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_strips_prefix() {
        let err = CoreError::Validation("Slug must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: Slug must not be empty");
        assert_eq!(err.detail(), "Slug must not be empty");
    }

    #[test]
    fn not_found_names_entity() {
        let err = CoreError::NotFound {
            entity: "Course",
            id: "c1".into(),
        };
        assert_eq!(err.to_string(), "Course not found: c1");
        assert_eq!(err.detail(), "Course not found");
    }

    #[test]
    fn interval_errors_are_validation() {
        let err = CoreError::from(IntervalError::EndNotAfterStart);
        assert_eq!(err.detail(), "End time must be after start time");
    }
}
