//! Field validation rules.
//!
//! ## Presence
//!
//! - An absent value always fails with `"<Label> can not be empty"`.
//!
//! ## Value Rules
//!
//! - **Names / username**: at least 2 characters, else `"<Label> is too short"`
//! - **Email**: at least 5 characters, else `"Email is too short"`. There is no
//!   format check.
//! - **Age**: between 13 and 124 inclusive, else
//!   `"Must be older than 13 and younger than 124"`
//!
//! Lengths count UTF-16 code units, so an emoji outside the Basic
//! Multilingual Plane counts as two. An empty string is present but too short.

use profile_model::{FieldKey, FieldValue, ValidationResult};

/// Minimum length of first name, last name and username.
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum length of an email address.
pub const MIN_EMAIL_LENGTH: usize = 5;

pub const MINIMUM_AGE: i64 = 13;
pub const MAXIMUM_AGE: i64 = 124;

/// Rule applied to a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Text must have at least `min` UTF-16 code units.
    MinLength { min: usize },
    /// Integer must lie in `min..=max`.
    Range { min: i64, max: i64 },
}

impl FieldRule {
    /// Validate `value` as the current value of `key`.
    ///
    /// A value of the wrong kind never satisfies a rule.
    pub fn check(self, key: FieldKey, value: Option<&FieldValue>) -> ValidationResult<String> {
        let Some(value) = value else {
            return ValidationResult::Failure(empty_message(key));
        };
        match self {
            FieldRule::MinLength { min } => {
                let long_enough = value
                    .as_text()
                    .is_some_and(|text| text.encode_utf16().count() >= min);
                if long_enough {
                    ValidationResult::Success
                } else {
                    ValidationResult::Failure(format!("{} is too short", key.label()))
                }
            }
            FieldRule::Range { min, max } => {
                let in_range = value
                    .as_integer()
                    .is_some_and(|number| (min..=max).contains(&number));
                if in_range {
                    ValidationResult::Success
                } else {
                    ValidationResult::Failure(format!(
                        "Must be older than {min} and younger than {max}"
                    ))
                }
            }
        }
    }

    /// Short human-readable form, used when listing fields.
    pub fn describe(self) -> String {
        match self {
            FieldRule::MinLength { min } => format!("at least {min} characters"),
            FieldRule::Range { min, max } => format!("{min} to {max}"),
        }
    }
}

fn empty_message(key: FieldKey) -> String {
    format!("{} can not be empty", key.label())
}
