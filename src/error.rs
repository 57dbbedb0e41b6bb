// Error types shared by the pattern demos.

use thiserror::Error;

/// Failures a pattern demo can report.
/// Each variant represents a distinct failure mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Instance initialization failed; the registry slot stays empty.
    #[error("failed to construct {resource}: {reason}")]
    ConstructionFailed { resource: String, reason: String },

    #[error("no element with id '{0}' on the page")]
    ElementNotFound(String),
}

impl PatternError {
    pub fn construction_failed(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        PatternError::ConstructionFailed {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_failed_message() {
        let err = PatternError::construction_failed("printer", "device offline");
        assert_eq!(err.to_string(), "failed to construct printer: device offline");
    }

    #[test]
    fn test_element_not_found_message() {
        let err = PatternError::ElementNotFound("missing".to_string());
        assert_eq!(err.to_string(), "no element with id 'missing' on the page");
    }
}
