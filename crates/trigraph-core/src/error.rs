//! Error types for trigraph operations.
//!
//! The algorithms themselves are total. Errors only arise at the
//! boundaries where raw records, files, or configuration are accepted.

use thiserror::Error;

/// Result type for trigraph operations.
pub type Result<T> = std::result::Result<T, TrigraphError>;

/// Errors that can occur at trigraph's input boundaries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrigraphError {
    /// A record could not be read as a (subject, predicate, object) triple.
    #[error("Malformed record{}: {kind}", .index.map(|i| format!(" #{i}")).unwrap_or_default())]
    MalformedRecord {
        /// Position of the record in its input list, when known.
        index: Option<usize>,
        kind: MalformedRecordKind,
    },

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors.
    #[error("Invalid value for {field}: {reason}")]
    Config { field: String, reason: String },
}

/// Why a record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecordKind {
    /// Not exactly three fields.
    #[error("expected 3 fields, found {found}")]
    WrongArity { found: usize },
    /// Subject or predicate is a collection of more than one element.
    #[error("field {position} must be a single identifier")]
    NonAtomicField { position: usize },
    /// A collection field with no elements in subject or predicate position.
    #[error("field {position} is empty")]
    EmptyField { position: usize },
}

impl From<std::io::Error> for TrigraphError {
    fn from(e: std::io::Error) -> Self {
        TrigraphError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for TrigraphError {
    fn from(e: serde_json::Error) -> Self {
        TrigraphError::Serialization(e.to_string())
    }
}

// Convenience constructors
impl TrigraphError {
    pub fn malformed(kind: MalformedRecordKind) -> Self {
        TrigraphError::MalformedRecord { index: None, kind }
    }

    pub fn wrong_arity(found: usize) -> Self {
        Self::malformed(MalformedRecordKind::WrongArity { found })
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TrigraphError::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Attach the record's position in its input list.
    pub fn at_index(self, i: usize) -> Self {
        match self {
            TrigraphError::MalformedRecord { kind, .. } => TrigraphError::MalformedRecord {
                index: Some(i),
                kind,
            },
            other => other,
        }
    }

    pub fn is_malformed_record(&self) -> bool {
        matches!(self, TrigraphError::MalformedRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_includes_index() {
        let err = TrigraphError::wrong_arity(2).at_index(7);
        assert_eq!(err.to_string(), "Malformed record #7: expected 3 fields, found 2");
    }

    #[test]
    fn malformed_message_without_index() {
        let err = TrigraphError::malformed(MalformedRecordKind::NonAtomicField { position: 0 });
        assert_eq!(
            err.to_string(),
            "Malformed record: field 0 must be a single identifier"
        );
    }

    #[test]
    fn at_index_leaves_other_errors_alone() {
        let err = TrigraphError::Io("gone".into()).at_index(3);
        assert_eq!(err, TrigraphError::Io("gone".into()));
    }
}
