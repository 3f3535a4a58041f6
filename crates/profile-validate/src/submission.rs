use serde::Serialize;

use profile_model::{ChangeSet, ErrorMessages};

/// What pressing "update" on an edit form leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Submission {
    /// Nothing differs from the snapshot.
    NoChanges,
    /// At least one field fails validation.
    Invalid(ErrorMessages),
    /// Every field is valid; these are the values to submit.
    Ready(ChangeSet),
}

impl Submission {
    pub fn is_ready(&self) -> bool {
        matches!(self, Submission::Ready(_))
    }

    pub fn changes(&self) -> Option<&ChangeSet> {
        match self {
            Submission::Ready(changes) => Some(changes),
            Submission::NoChanges | Submission::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&ErrorMessages> {
        match self {
            Submission::Invalid(errors) => Some(errors),
            Submission::NoChanges | Submission::Ready(_) => None,
        }
    }
}
