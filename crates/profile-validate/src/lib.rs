//! Change tracking and validation for profile edits.
//!
//! ```
//! use profile_model::{FieldKey, ProfileSnapshot, ValidationResult};
//! use profile_validate::EditValidator;
//!
//! let snapshot = ProfileSnapshot::username(Some("Samantha"));
//! let mut validator = EditValidator::new(&snapshot);
//! validator.set_username(Some("Emma")).unwrap();
//!
//! assert!(validator.has_made_changes());
//! assert!(validator.changes().contains(FieldKey::Username));
//! assert_eq!(validator.validate_username(), ValidationResult::Success);
//! ```

mod descriptor;
mod rules;
mod submission;
mod validator;

pub use descriptor::{FieldDescriptor, descriptor, descriptors};
pub use rules::{FieldRule, MAXIMUM_AGE, MIN_EMAIL_LENGTH, MIN_NAME_LENGTH, MINIMUM_AGE};
pub use submission::Submission;
pub use validator::EditValidator;
