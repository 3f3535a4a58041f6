//! The original profile values an editing session starts from.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::field::{FieldKey, FieldSet};
use crate::value::FieldValue;

/// Immutable record of a user's original field values.
///
/// Every field of the snapshot's [`FieldSet`] may be absent, which models a
/// freshly created user as well as a loaded one. Values are kind-checked on
/// the way in and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotFile", into = "SnapshotFile")]
pub struct ProfileSnapshot {
    field_set: FieldSet,
    values: BTreeMap<FieldKey, FieldValue>,
}

impl ProfileSnapshot {
    /// Create a snapshot with every field absent.
    pub fn new(field_set: FieldSet) -> Self {
        Self {
            field_set,
            values: BTreeMap::new(),
        }
    }

    /// Snapshot for the first name / last name / email / age form.
    pub fn account_details(
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        age: Option<i64>,
    ) -> Self {
        let mut values = BTreeMap::new();
        let text_fields = [
            (FieldKey::FirstName, first_name),
            (FieldKey::LastName, last_name),
            (FieldKey::Email, email),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                values.insert(key, FieldValue::from(value));
            }
        }
        if let Some(age) = age {
            values.insert(FieldKey::Age, FieldValue::Integer(age));
        }
        Self {
            field_set: FieldSet::AccountDetails,
            values,
        }
    }

    /// Snapshot for the single username form.
    pub fn username(username: Option<&str>) -> Self {
        let mut snapshot = Self::new(FieldSet::Username);
        if let Some(username) = username {
            snapshot
                .values
                .insert(FieldKey::Username, FieldValue::from(username));
        }
        snapshot
    }

    /// Return a copy of this snapshot with `key` set to `value`.
    pub fn with_value(mut self, key: FieldKey, value: Option<FieldValue>) -> Result<Self> {
        self.field_set.check_value(key, value.as_ref())?;
        match value {
            Some(value) => self.values.insert(key, value),
            None => self.values.remove(&key),
        };
        Ok(self)
    }

    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn field_set(&self) -> FieldSet {
        self.field_set
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.values.get(&key)
    }

    /// Present values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

impl Default for ProfileSnapshot {
    fn default() -> Self {
        Self::new(FieldSet::default())
    }
}

/// On-disk form of a snapshot. Missing keys and `null` both mean absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    field_set: FieldSet,
    #[serde(default)]
    values: BTreeMap<FieldKey, Option<FieldValue>>,
}

impl TryFrom<SnapshotFile> for ProfileSnapshot {
    type Error = ProfileError;

    fn try_from(file: SnapshotFile) -> Result<Self> {
        let mut snapshot = ProfileSnapshot::new(file.field_set);
        for (key, value) in file.values {
            snapshot = snapshot.with_value(key, value)?;
        }
        Ok(snapshot)
    }
}

impl From<ProfileSnapshot> for SnapshotFile {
    fn from(snapshot: ProfileSnapshot) -> Self {
        let values = snapshot
            .field_set
            .fields()
            .iter()
            .map(|key| (*key, snapshot.values.get(key).cloned()))
            .collect();
        Self {
            field_set: snapshot.field_set,
            values,
        }
    }
}
