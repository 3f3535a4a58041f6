//! One editing session driven from the command line.

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use profile_model::{FieldKey, FieldSet, FieldValue, ProfileSnapshot, Result, ValidationResult};
use profile_validate::{EditValidator, Submission};

use crate::edits::Edit;
use crate::logging::redact_value;

/// State of one tracked field after all edits were applied.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub key: FieldKey,
    pub original: Option<FieldValue>,
    pub current: Option<FieldValue>,
    pub changed: bool,
    pub validation: ValidationResult<String>,
}

/// Result of applying edits to a snapshot and validating them.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub field_set: FieldSet,
    pub fields: Vec<FieldReport>,
    pub submission: Submission,
}

impl CheckReport {
    /// Process exit code: non-zero only when the edits are invalid.
    pub fn exit_code(&self) -> i32 {
        match self.submission {
            Submission::Invalid(_) => 1,
            Submission::NoChanges | Submission::Ready(_) => 0,
        }
    }
}

/// Apply `edits` in order to a validator built from `snapshot`.
pub fn check(snapshot: &ProfileSnapshot, edits: &[Edit]) -> Result<CheckReport> {
    let span = info_span!("check", field_set = %snapshot.field_set());
    let _guard = span.enter();

    let mut validator = EditValidator::new(snapshot);
    for edit in edits {
        let shown = edit
            .value
            .as_ref()
            .map_or_else(|| "<absent>".to_string(), ToString::to_string);
        debug!(field = %edit.key, value = redact_value(&shown), "applying edit");
        if let Err(error) = validator.set(edit.key, edit.value.clone()) {
            warn!(field = %edit.key, %error, "rejected edit");
            return Err(error);
        }
    }

    let fields = snapshot
        .field_set()
        .fields()
        .iter()
        .map(|key| FieldReport {
            key: *key,
            original: snapshot.get(*key).cloned(),
            current: validator.current(*key).cloned(),
            changed: validator.is_changed(*key),
            validation: validator.validate_field(*key),
        })
        .collect();
    let submission = validator.prepare_submission();
    info!(
        edits = edits.len(),
        changed = validator.changes().len(),
        ready = submission.is_ready(),
        "checked profile edits"
    );

    Ok(CheckReport {
        field_set: snapshot.field_set(),
        fields,
        submission,
    })
}
