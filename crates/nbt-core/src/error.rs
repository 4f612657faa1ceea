//! NBT Error Types
//!
//! Defines the error conditions produced by the tag model.
//! Every error is raised synchronously by the call that would violate a
//! container invariant; nothing is deferred or retried.

use crate::tag::kind::TagKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NbtError {
    // Homogeneity errors
    #[error("type mismatch: expected {}, found {found}", expected_name(.expected))]
    TypeMismatch {
        expected: Option<TagKind>,
        found: TagKind,
    },

    // Index errors
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    // Limits
    #[error("list length limit of {limit} reached")]
    LengthLimit { limit: usize },
}

fn expected_name(expected: &Option<TagKind>) -> String {
    match expected {
        Some(kind) => kind.to_string(),
        None => "a non-null tag".to_string(),
    }
}

impl NbtError {
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, NbtError::TypeMismatch { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, NbtError::OutOfRange { .. })
    }
}

pub type NbtResult<T> = Result<T, NbtError>;
