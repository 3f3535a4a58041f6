//! Account details form: four tracked fields against a loaded user.

use profile_model::{
    ErrorMessages, FieldKey, FieldSet, FieldValue, ProfileSnapshot, ValidationResult,
};
use profile_validate::{EditValidator, Submission};

fn samantha() -> ProfileSnapshot {
    ProfileSnapshot::account_details(
        Some("Samantha"),
        Some("MacDonald"),
        Some("samantha.macdonald@test.com"),
        Some(30),
    )
}

fn failure(message: &str) -> ValidationResult<String> {
    ValidationResult::Failure(message.to_string())
}

fn messages() -> ErrorMessages {
    ErrorMessages::new(FieldSet::AccountDetails)
}

// --- per-field validation ---

#[test]
fn first_name_valid() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Tommy")).unwrap();
    assert_eq!(validator.validate_first_name(), ValidationResult::Success);
}

#[test]
fn first_name_empty_is_too_short() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("")).unwrap();
    assert_eq!(
        validator.validate_first_name(),
        failure("Firstname is too short")
    );
}

#[test]
fn first_name_absent_can_not_be_empty() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(None).unwrap();
    assert_eq!(
        validator.validate_first_name(),
        failure("Firstname can not be empty")
    );
}

#[test]
fn last_name_rules() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_last_name(Some("Irvine")).unwrap();
    assert_eq!(validator.validate_last_name(), ValidationResult::Success);
    validator.set_last_name(Some("")).unwrap();
    assert_eq!(validator.validate_last_name(), failure("Lastname is too short"));
    validator.set_last_name(None).unwrap();
    assert_eq!(
        validator.validate_last_name(),
        failure("Lastname can not be empty")
    );
}

#[test]
fn email_rules() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_email(Some("valid@test.com")).unwrap();
    assert_eq!(validator.validate_email(), ValidationResult::Success);
    validator.set_email(Some("")).unwrap();
    assert_eq!(validator.validate_email(), failure("Email is too short"));
    validator.set_email(Some("a@b.c")).unwrap();
    assert_eq!(validator.validate_email(), ValidationResult::Success);
    validator.set_email(Some("a@bc")).unwrap();
    assert_eq!(validator.validate_email(), failure("Email is too short"));
    validator.set_email(None).unwrap();
    assert_eq!(validator.validate_email(), failure("Email can not be empty"));
}

#[test]
fn age_out_of_range_on_both_sides() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_age(Some(45)).unwrap();
    assert_eq!(validator.validate_age(), ValidationResult::Success);
    validator.set_age(Some(7)).unwrap();
    assert_eq!(
        validator.validate_age(),
        failure("Must be older than 13 and younger than 124")
    );
    validator.set_age(Some(145)).unwrap();
    assert_eq!(
        validator.validate_age(),
        failure("Must be older than 13 and younger than 124")
    );
    validator.set_age(None).unwrap();
    assert_eq!(validator.validate_age(), failure("Age can not be empty"));
}

#[test]
fn age_bounds_are_inclusive() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    for (age, valid) in [(12, false), (13, true), (124, true), (125, false)] {
        validator.set_age(Some(age)).unwrap();
        assert_eq!(validator.validate_age().is_success(), valid, "age {age}");
    }
}

#[test]
fn text_length_boundary() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Al")).unwrap();
    assert_eq!(validator.validate_first_name(), ValidationResult::Success);
    validator.set_first_name(Some("A")).unwrap();
    assert_eq!(
        validator.validate_first_name(),
        failure("Firstname is too short")
    );
}

#[test]
fn validation_ignores_dirtiness() {
    let snapshot = ProfileSnapshot::account_details(
        Some("Samantha"),
        Some("MacDonald"),
        Some("samantha.macdonald@test.com"),
        Some(10),
    );
    let validator = EditValidator::new(&snapshot);
    assert!(!validator.has_made_changes());
    assert_eq!(
        validator.validate_age(),
        failure("Must be older than 13 and younger than 124")
    );
}

#[test]
fn fields_outside_the_set_fail_as_empty() {
    let snapshot = samantha();
    let validator = EditValidator::new(&snapshot);
    assert_eq!(
        validator.validate_username(),
        failure("Username can not be empty")
    );
}

// --- whole-form validation ---

#[test]
fn account_details_valid() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Graham")).unwrap();
    validator.set_last_name(Some("Jones")).unwrap();
    validator.set_email(Some("graham.jones@test.com")).unwrap();
    validator.set_age(Some(27)).unwrap();
    assert_eq!(validator.validate_account_details(), ValidationResult::Success);
}

#[test]
fn account_details_reports_single_failing_field() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(None).unwrap();
    assert_eq!(
        validator.validate_first_name(),
        failure("Firstname can not be empty")
    );
    assert_eq!(
        validator.validate_account_details(),
        ValidationResult::Failure(
            messages().with_message(FieldKey::FirstName, "Firstname can not be empty")
        )
    );
}

#[test]
fn account_details_reports_each_field_on_its_own() {
    let cases = [
        (FieldKey::LastName, "Lastname can not be empty"),
        (FieldKey::Email, "Email can not be empty"),
        (FieldKey::Age, "Age can not be empty"),
    ];
    for (key, message) in cases {
        let snapshot = samantha();
        let mut validator = EditValidator::new(&snapshot);
        validator.clear(key).unwrap();
        assert_eq!(
            validator.validate_account_details(),
            ValidationResult::Failure(messages().with_message(key, message)),
            "clearing {key}"
        );
    }
}

#[test]
fn account_details_does_not_short_circuit() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    for key in FieldSet::AccountDetails.fields() {
        validator.clear(*key).unwrap();
    }
    let expected = messages()
        .with_message(FieldKey::FirstName, "Firstname can not be empty")
        .with_message(FieldKey::LastName, "Lastname can not be empty")
        .with_message(FieldKey::Email, "Email can not be empty")
        .with_message(FieldKey::Age, "Age can not be empty");
    assert_eq!(
        validator.validate_account_details(),
        ValidationResult::Failure(expected)
    );
}

#[test]
fn account_details_is_recomputed_each_call() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_email(Some("x")).unwrap();
    assert!(validator.validate_account_details().is_failure());
    validator.set_email(Some("fixed@test.com")).unwrap();
    assert_eq!(validator.validate_account_details(), ValidationResult::Success);
}

// --- change tracking ---

#[test]
fn fresh_validator_has_no_changes() {
    let snapshot = samantha();
    let validator = EditValidator::new(&snapshot);
    assert!(!validator.has_made_changes());
    assert!(validator.changes().is_empty());
    for key in FieldSet::AccountDetails.fields() {
        assert_eq!(validator.current(*key), snapshot.get(*key));
    }
}

#[test]
fn each_field_marks_changes() {
    let edits = [
        (FieldKey::FirstName, FieldValue::from("Emma")),
        (FieldKey::LastName, FieldValue::from("Young")),
        (FieldKey::Email, FieldValue::from("emma.young@test.com")),
        (FieldKey::Age, FieldValue::Integer(78)),
    ];
    for (key, value) in edits {
        let snapshot = samantha();
        let mut validator = EditValidator::new(&snapshot);
        validator.set(key, Some(value.clone())).unwrap();
        assert!(validator.has_made_changes(), "editing {key}");
        let changes = validator.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get(key), Some(Some(&value)));
    }
}

#[test]
fn changes_contain_only_the_edited_field() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Emma")).unwrap();
    let changes = validator.changes();
    assert_eq!(changes.keys().collect::<Vec<_>>(), vec![FieldKey::FirstName]);
    insta::assert_json_snapshot!(changes, @r#"
    {
      "firstname": "Emma"
    }
    "#);
}

#[test]
fn changes_multiple() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Emma")).unwrap();
    validator.set_last_name(Some("Young")).unwrap();
    validator.set_email(Some("emma.young@test.com")).unwrap();
    validator.set_age(Some(56)).unwrap();
    insta::assert_json_snapshot!(validator.changes(), @r#"
    {
      "firstname": "Emma",
      "lastname": "Young",
      "email": "emma.young@test.com",
      "age": 56
    }
    "#);
}

#[test]
fn cleared_field_is_a_change_with_no_value() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_age(None).unwrap();
    assert!(validator.is_changed(FieldKey::Age));
    assert_eq!(validator.changes().get(FieldKey::Age), Some(None));
}

#[test]
fn restoring_the_original_value_removes_the_change() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Emma")).unwrap();
    validator.set_age(Some(31)).unwrap();
    validator.set_first_name(Some("Samantha")).unwrap();
    assert!(!validator.changes().contains(FieldKey::FirstName));
    assert!(validator.has_made_changes());
    validator.set_age(Some(30)).unwrap();
    assert!(!validator.has_made_changes());
    assert!(validator.changes().is_empty());
}

#[test]
fn setting_the_same_value_is_not_a_change() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_email(Some("samantha.macdonald@test.com")).unwrap();
    assert!(!validator.has_made_changes());
}

#[test]
fn absent_snapshot_field_changes_when_set_to_empty_text() {
    let snapshot = ProfileSnapshot::account_details(None, None, None, None);
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(None).unwrap();
    assert!(!validator.is_changed(FieldKey::FirstName));
    validator.set_first_name(Some("")).unwrap();
    assert!(validator.is_changed(FieldKey::FirstName));
    assert_eq!(
        validator.changes().get(FieldKey::FirstName),
        Some(Some(&FieldValue::from("")))
    );
}

#[test]
fn snapshot_is_never_modified() {
    let snapshot = samantha();
    let original = snapshot.clone();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Emma")).unwrap();
    validator.clear(FieldKey::Age).unwrap();
    assert_eq!(validator.snapshot(), &original);
}

// --- submission ---

#[test]
fn submission_without_changes() {
    let snapshot = samantha();
    let validator = EditValidator::new(&snapshot);
    assert_eq!(validator.prepare_submission(), Submission::NoChanges);
}

#[test]
fn submission_with_invalid_changes() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_age(Some(7)).unwrap();
    let submission = validator.prepare_submission();
    assert!(!submission.is_ready());
    assert_eq!(
        submission.errors().and_then(|errors| errors.message(FieldKey::Age)),
        Some("Must be older than 13 and younger than 124")
    );
}

#[test]
fn submission_ready_carries_change_set() {
    let snapshot = samantha();
    let mut validator = EditValidator::new(&snapshot);
    validator.set_first_name(Some("Emma")).unwrap();
    let submission = validator.prepare_submission();
    assert!(submission.is_ready());
    assert_eq!(submission.changes(), Some(&validator.changes()));
    insta::assert_json_snapshot!(submission, @r#"
    {
      "outcome": "ready",
      "detail": {
        "firstname": "Emma"
      }
    }
    "#);
}
