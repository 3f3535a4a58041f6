use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::{FieldKey, FieldSet};

/// Outcome of validating one field or a whole form.
///
/// Failures are expected user-input conditions, carried as values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum ValidationResult<E> {
    Success,
    Failure(E),
}

impl<E> ValidationResult<E> {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Failure(detail) => Some(detail),
        }
    }
}

/// Per-field messages of a whole-form validation failure.
///
/// Holds one slot per field of a [`FieldSet`]; only failing fields carry a
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMessages {
    slots: BTreeMap<FieldKey, Option<String>>,
}

impl ErrorMessages {
    /// Empty slots for every field of `field_set`.
    pub fn new(field_set: FieldSet) -> Self {
        Self {
            slots: field_set.fields().iter().map(|key| (*key, None)).collect(),
        }
    }

    /// Builder form of [`ErrorMessages::set`].
    #[must_use]
    pub fn with_message(mut self, key: FieldKey, message: impl Into<String>) -> Self {
        self.set(key, message);
        self
    }

    /// Record the message for `key`. Keys without a slot are ignored.
    pub fn set(&mut self, key: FieldKey, message: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(&key) {
            *slot = Some(message.into());
        }
    }

    pub fn message(&self, key: FieldKey) -> Option<&str> {
        self.slots.get(&key).and_then(|slot| slot.as_deref())
    }

    /// Every slot in display order, failing or not.
    pub fn slots(&self) -> impl Iterator<Item = (FieldKey, Option<&str>)> {
        self.slots.iter().map(|(key, slot)| (*key, slot.as_deref()))
    }

    /// Failing fields and their messages in display order.
    pub fn failures(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.slots
            .iter()
            .filter_map(|(key, slot)| slot.as_deref().map(|message| (*key, message)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}
