//! Edit tracking and validation for one profile editing session.
//!
//! An [`EditValidator`] mirrors the fields of a [`ProfileSnapshot`], records
//! which of them differ from the snapshot, and validates their current
//! values. Mutation never validates; validation never mutates.

use tracing::debug;

use profile_model::{
    ChangeSet, ErrorMessages, FieldKey, FieldSet, FieldValue, ProfileSnapshot, Result,
    ValidationResult,
};

use crate::descriptor::{FieldDescriptor, descriptor, descriptors};
use crate::submission::Submission;

#[derive(Debug, Clone)]
struct TrackedField {
    descriptor: &'static FieldDescriptor,
    current: Option<FieldValue>,
    changed: bool,
}

/// Validator for edits made against a snapshot.
#[derive(Debug, Clone)]
pub struct EditValidator<'a> {
    snapshot: &'a ProfileSnapshot,
    fields: Vec<TrackedField>,
}

impl<'a> EditValidator<'a> {
    /// Create a validator whose current values equal the snapshot's.
    pub fn new(snapshot: &'a ProfileSnapshot) -> Self {
        let fields = descriptors(snapshot.field_set())
            .iter()
            .copied()
            .map(|descriptor| TrackedField {
                descriptor,
                current: snapshot.get(descriptor.key).cloned(),
                changed: false,
            })
            .collect();
        Self { snapshot, fields }
    }

    pub fn snapshot(&self) -> &'a ProfileSnapshot {
        self.snapshot
    }

    pub fn field_set(&self) -> FieldSet {
        self.snapshot.field_set()
    }

    /// Set the current value of `key` and recompute its changed flag.
    ///
    /// Fails without touching any state when `key` is not tracked or `value`
    /// has the wrong kind.
    pub fn set(&mut self, key: FieldKey, value: Option<FieldValue>) -> Result<()> {
        self.field_set().check_value(key, value.as_ref())?;
        let snapshot = self.snapshot;
        let original = snapshot.get(key);
        let Some(field) = self.fields.iter_mut().find(|field| field.descriptor.key == key) else {
            return Ok(());
        };
        field.changed = value.as_ref() != original;
        field.current = value;
        debug!(field = %key, changed = field.changed, "field updated");
        Ok(())
    }

    pub fn set_text(&mut self, key: FieldKey, value: Option<&str>) -> Result<()> {
        self.set(key, value.map(FieldValue::from))
    }

    pub fn set_integer(&mut self, key: FieldKey, value: Option<i64>) -> Result<()> {
        self.set(key, value.map(FieldValue::Integer))
    }

    /// Make `key` absent.
    pub fn clear(&mut self, key: FieldKey) -> Result<()> {
        self.set(key, None)
    }

    pub fn set_first_name(&mut self, value: Option<&str>) -> Result<()> {
        self.set_text(FieldKey::FirstName, value)
    }

    pub fn set_last_name(&mut self, value: Option<&str>) -> Result<()> {
        self.set_text(FieldKey::LastName, value)
    }

    pub fn set_email(&mut self, value: Option<&str>) -> Result<()> {
        self.set_text(FieldKey::Email, value)
    }

    pub fn set_age(&mut self, value: Option<i64>) -> Result<()> {
        self.set_integer(FieldKey::Age, value)
    }

    pub fn set_username(&mut self, value: Option<&str>) -> Result<()> {
        self.set_text(FieldKey::Username, value)
    }

    /// Current value of `key`; `None` when absent or not tracked.
    pub fn current(&self, key: FieldKey) -> Option<&FieldValue> {
        self.field(key).and_then(|field| field.current.as_ref())
    }

    pub fn is_changed(&self, key: FieldKey) -> bool {
        self.field(key).is_some_and(|field| field.changed)
    }

    pub fn has_made_changes(&self) -> bool {
        self.fields.iter().any(|field| field.changed)
    }

    /// Changed fields and their current values.
    pub fn changes(&self) -> ChangeSet {
        self.fields
            .iter()
            .filter(|field| field.changed)
            .map(|field| (field.descriptor.key, field.current.clone()))
            .collect()
    }

    /// Validate the current value of `key`.
    ///
    /// A key outside this validator's field set has no value and fails as
    /// empty.
    pub fn validate_field(&self, key: FieldKey) -> ValidationResult<String> {
        descriptor(key).validate(self.current(key))
    }

    pub fn validate_first_name(&self) -> ValidationResult<String> {
        self.validate_field(FieldKey::FirstName)
    }

    pub fn validate_last_name(&self) -> ValidationResult<String> {
        self.validate_field(FieldKey::LastName)
    }

    pub fn validate_email(&self) -> ValidationResult<String> {
        self.validate_field(FieldKey::Email)
    }

    pub fn validate_age(&self) -> ValidationResult<String> {
        self.validate_field(FieldKey::Age)
    }

    pub fn validate_username(&self) -> ValidationResult<String> {
        self.validate_field(FieldKey::Username)
    }

    /// Validate every tracked field.
    ///
    /// All fields are checked; the failure carries a message for each failing
    /// one.
    pub fn validate_account_details(&self) -> ValidationResult<ErrorMessages> {
        let mut messages = ErrorMessages::new(self.field_set());
        for field in &self.fields {
            if let ValidationResult::Failure(message) =
                field.descriptor.validate(field.current.as_ref())
            {
                messages.set(field.descriptor.key, message);
            }
        }
        let failures = messages.failure_count();
        debug!(field_set = %self.field_set(), failures, "validated account details");
        if failures > 0 {
            ValidationResult::Failure(messages)
        } else {
            ValidationResult::Success
        }
    }

    /// Store `value` in `key` and validate that field alone.
    pub fn commit_field(
        &mut self,
        key: FieldKey,
        value: Option<FieldValue>,
    ) -> Result<ValidationResult<String>> {
        self.set(key, value)?;
        Ok(self.validate_field(key))
    }

    /// Decide whether the current edits can be submitted.
    pub fn prepare_submission(&self) -> Submission {
        if !self.has_made_changes() {
            return Submission::NoChanges;
        }
        match self.validate_account_details() {
            ValidationResult::Success => Submission::Ready(self.changes()),
            ValidationResult::Failure(messages) => Submission::Invalid(messages),
        }
    }

    fn field(&self, key: FieldKey) -> Option<&TrackedField> {
        self.fields.iter().find(|field| field.descriptor.key == key)
    }
}
