//! Declarative descriptors for tracked fields.
//!
//! Each field set is a static list of descriptors. Adding a field means adding
//! a [`FieldKey`] and a descriptor here; the validator iterates the list.

use profile_model::{FieldKey, FieldSet, FieldValue, ValidationResult};

use crate::rules::{FieldRule, MAXIMUM_AGE, MIN_EMAIL_LENGTH, MIN_NAME_LENGTH, MINIMUM_AGE};

/// A tracked field and the rule its current value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub rule: FieldRule,
}

impl FieldDescriptor {
    pub const fn new(key: FieldKey, rule: FieldRule) -> Self {
        Self { key, rule }
    }

    pub fn validate(&self, value: Option<&FieldValue>) -> ValidationResult<String> {
        self.rule.check(self.key, value)
    }
}

const NAME_RULE: FieldRule = FieldRule::MinLength {
    min: MIN_NAME_LENGTH,
};

static FIRST_NAME: FieldDescriptor = FieldDescriptor::new(FieldKey::FirstName, NAME_RULE);
static LAST_NAME: FieldDescriptor = FieldDescriptor::new(FieldKey::LastName, NAME_RULE);
static EMAIL: FieldDescriptor = FieldDescriptor::new(
    FieldKey::Email,
    FieldRule::MinLength {
        min: MIN_EMAIL_LENGTH,
    },
);
static AGE: FieldDescriptor = FieldDescriptor::new(
    FieldKey::Age,
    FieldRule::Range {
        min: MINIMUM_AGE,
        max: MAXIMUM_AGE,
    },
);
static USERNAME: FieldDescriptor = FieldDescriptor::new(FieldKey::Username, NAME_RULE);

static ACCOUNT_DETAILS_FIELDS: [&FieldDescriptor; 4] = [&FIRST_NAME, &LAST_NAME, &EMAIL, &AGE];
static USERNAME_FIELDS: [&FieldDescriptor; 1] = [&USERNAME];

/// Descriptors of `field_set` in display order.
pub fn descriptors(field_set: FieldSet) -> &'static [&'static FieldDescriptor] {
    match field_set {
        FieldSet::AccountDetails => &ACCOUNT_DETAILS_FIELDS,
        FieldSet::Username => &USERNAME_FIELDS,
    }
}

/// Descriptor of `key`, independent of any field set.
pub fn descriptor(key: FieldKey) -> &'static FieldDescriptor {
    match key {
        FieldKey::FirstName => &FIRST_NAME,
        FieldKey::LastName => &LAST_NAME,
        FieldKey::Email => &EMAIL,
        FieldKey::Age => &AGE,
        FieldKey::Username => &USERNAME,
    }
}
