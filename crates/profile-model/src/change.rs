use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;
use crate::value::FieldValue;

/// Changed fields and their current values, ready for submission.
///
/// A field cleared during editing is present with a `None` value; unchanged
/// fields are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    entries: BTreeMap<FieldKey, Option<FieldValue>>,
}

impl ChangeSet {
    /// `None` when `key` is unchanged, `Some(None)` when it was cleared.
    pub fn get(&self, key: FieldKey) -> Option<Option<&FieldValue>> {
        self.entries.get(&key).map(Option::as_ref)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, Option<&FieldValue>)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(FieldKey, Option<FieldValue>)> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = (FieldKey, Option<FieldValue>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
