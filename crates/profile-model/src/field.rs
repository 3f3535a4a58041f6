//! Field keys, value kinds and the fixed field sets an editing session tracks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProfileError;
use crate::value::FieldValue;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile field that can be edited.
///
/// Declaration order is display order, so maps keyed by `FieldKey` iterate
/// the way a form lays its fields out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    Age,
    Username,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::Age,
        FieldKey::Username,
    ];

    /// Key used in change sets and snapshot files.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::FirstName => "firstname",
            FieldKey::LastName => "lastname",
            FieldKey::Email => "email",
            FieldKey::Age => "age",
            FieldKey::Username => "username",
        }
    }

    /// Label used at the start of user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::FirstName => "Firstname",
            FieldKey::LastName => "Lastname",
            FieldKey::Email => "Email",
            FieldKey::Age => "Age",
            FieldKey::Username => "Username",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::Age => FieldKind::Integer,
            FieldKey::FirstName | FieldKey::LastName | FieldKey::Email | FieldKey::Username => {
                FieldKind::Text
            }
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProfileError::UnknownField(s.to_string()))
    }
}

impl Serialize for FieldKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The set of fields an editing session tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSet {
    /// First name, last name, email and age.
    #[default]
    AccountDetails,
    /// A single username field.
    Username,
}

impl FieldSet {
    pub const ALL: [FieldSet; 2] = [FieldSet::AccountDetails, FieldSet::Username];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldSet::AccountDetails => "account_details",
            FieldSet::Username => "username",
        }
    }

    /// Fields of this set in display order.
    pub fn fields(self) -> &'static [FieldKey] {
        match self {
            FieldSet::AccountDetails => &[
                FieldKey::FirstName,
                FieldKey::LastName,
                FieldKey::Email,
                FieldKey::Age,
            ],
            FieldSet::Username => &[FieldKey::Username],
        }
    }

    pub fn contains(self, key: FieldKey) -> bool {
        self.fields().contains(&key)
    }

    /// Check that `value` may be stored in `key` under this field set.
    ///
    /// Absent values are always assignable to a tracked field.
    pub fn check_value(
        self,
        key: FieldKey,
        value: Option<&FieldValue>,
    ) -> Result<(), ProfileError> {
        if !self.contains(key) {
            return Err(ProfileError::UntrackedField {
                field: key,
                field_set: self,
            });
        }
        if let Some(value) = value
            && value.kind() != key.kind()
        {
            return Err(ProfileError::KindMismatch {
                field: key,
                expected: key.kind(),
                found: value.kind(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldSet {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FieldSet::ALL
            .into_iter()
            .find(|set| set.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProfileError::UnknownFieldSet(s.to_string()))
    }
}
