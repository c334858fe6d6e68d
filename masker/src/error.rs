//! Failure outcomes of record masking.
//!
//! Leaf maskers never fail. Errors only come from walking a record whose shape
//! does not match its masking policy, or from a hand-written `Maskable`
//! implementation that refuses a value. Errors raised while walking a nested
//! record are returned unchanged to the top-level caller.

use thiserror::Error;

/// Error returned when a record cannot be masked as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MaskError {
    /// The outer value is not a record.
    #[error("expected a record, found {found}")]
    UnsupportedRecord {
        /// Shape of the value that was supplied.
        found: &'static str,
    },

    /// An annotated field does not hold the shape its category requires.
    #[error("field `{field}` is annotated for masking and must hold {expected}, found {found}")]
    UnsupportedField {
        /// Name of the offending field.
        field: String,
        /// Shape the category requires.
        expected: &'static str,
        /// Shape that was found.
        found: &'static str,
    },

    /// A category tag did not name any known category.
    #[error("unknown mask category `{0}`")]
    UnknownCategory(String),

    /// A record refused to be masked.
    #[error("{record} cannot be masked: {reason}")]
    Rejected {
        /// Name of the refusing record type.
        record: &'static str,
        /// Human-readable cause.
        reason: String,
    },
}

impl MaskError {
    /// Builds a [`MaskError::Rejected`] for use in hand-written walkers.
    pub fn rejected(record: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            record,
            reason: reason.into(),
        }
    }
}
