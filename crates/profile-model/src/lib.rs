pub mod change;
pub mod error;
pub mod field;
pub mod outcome;
pub mod snapshot;
pub mod value;

pub use change::ChangeSet;
pub use error::{ProfileError, Result};
pub use field::{FieldKey, FieldKind, FieldSet};
pub use outcome::{ErrorMessages, ValidationResult};
pub use snapshot::ProfileSnapshot;
pub use value::FieldValue;
