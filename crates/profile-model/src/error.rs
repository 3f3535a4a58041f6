use thiserror::Error;

use crate::field::{FieldKey, FieldKind, FieldSet};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown field set: {0}")]
    UnknownFieldSet(String),
    #[error("field {field} is not tracked by the {field_set} field set")]
    UntrackedField { field: FieldKey, field_set: FieldSet },
    #[error("field {field} expects {expected}, got {found}")]
    KindMismatch {
        field: FieldKey,
        expected: FieldKind,
        found: FieldKind,
    },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
