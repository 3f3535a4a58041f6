//! Parsing of field edits given on the command line.

use std::str::FromStr;

use thiserror::Error;

use profile_model::{FieldKey, FieldKind, FieldValue, ProfileError};

#[derive(Debug, Error)]
pub enum EditError {
    #[error("expected KEY=VALUE, got {0:?}")]
    MissingSeparator(String),
    #[error(transparent)]
    Field(#[from] ProfileError),
    #[error("{key} expects a whole number, got {value:?}")]
    NotAnInteger { key: FieldKey, value: String },
}

/// A single edit: store `value` in `key`, or make it absent when `value` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub key: FieldKey,
    pub value: Option<FieldValue>,
}

impl Edit {
    /// Parse `KEY=VALUE`. The value is taken verbatim, so `firstname=` sets an
    /// empty name rather than clearing it.
    pub fn parse_set(input: &str) -> Result<Self, EditError> {
        let (key, raw) = input
            .split_once('=')
            .ok_or_else(|| EditError::MissingSeparator(input.to_string()))?;
        let key = FieldKey::from_str(key)?;
        let value = match key.kind() {
            FieldKind::Text => FieldValue::from(raw),
            FieldKind::Integer => {
                let number = raw.trim().parse().map_err(|_| EditError::NotAnInteger {
                    key,
                    value: raw.to_string(),
                })?;
                FieldValue::Integer(number)
            }
        };
        Ok(Self {
            key,
            value: Some(value),
        })
    }

    /// Parse a bare `KEY` that should become absent.
    pub fn parse_unset(input: &str) -> Result<Self, EditError> {
        Ok(Self {
            key: FieldKey::from_str(input)?,
            value: None,
        })
    }
}
