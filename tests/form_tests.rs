// Host-side tests for contact form validation.

use nodecraft_core::form::*;

#[test]
fn controls_classify_by_type_then_tag() {
    assert_eq!(FieldKind::classify("email", "INPUT"), FieldKind::Email);
    assert_eq!(FieldKind::classify("text", "INPUT"), FieldKind::Text);
    assert_eq!(FieldKind::classify("select-one", "SELECT"), FieldKind::Select);
    assert_eq!(FieldKind::classify("textarea", "TEXTAREA"), FieldKind::TextArea);
    assert_eq!(FieldKind::classify("", "textarea"), FieldKind::TextArea);
    assert_eq!(FieldKind::classify("checkbox", "INPUT"), FieldKind::Other);
}

#[test]
fn email_rules() {
    assert_eq!(validate_field(FieldKind::Email, "   "), Err(FieldError::EmailRequired));
    assert_eq!(validate_field(FieldKind::Email, "jo@site"), Err(FieldError::EmailInvalid));
    assert_eq!(validate_field(FieldKind::Email, "jo @a.io"), Err(FieldError::EmailInvalid));
    assert_eq!(validate_field(FieldKind::Email, " jo@studio.io "), Ok(()));
}

#[test]
fn name_needs_two_characters_after_trim() {
    assert_eq!(validate_field(FieldKind::Text, ""), Err(FieldError::Required));
    assert_eq!(validate_field(FieldKind::Text, " a "), Err(FieldError::TooShort(2)));
    assert_eq!(validate_field(FieldKind::Text, "Al"), Ok(()));
    // Characters, not bytes.
    assert_eq!(validate_field(FieldKind::Text, "Zoë"), Ok(()));
}

#[test]
fn select_and_message_rules() {
    assert_eq!(validate_field(FieldKind::Select, ""), Err(FieldError::NoSelection));
    assert_eq!(validate_field(FieldKind::Select, "film"), Ok(()));
    assert_eq!(validate_field(FieldKind::TextArea, "  "), Err(FieldError::MessageRequired));
    assert_eq!(
        validate_field(FieldKind::TextArea, "too short"),
        Err(FieldError::TooShort(10))
    );
    assert_eq!(validate_field(FieldKind::TextArea, "long enough!"), Ok(()));
    assert_eq!(validate_field(FieldKind::Other, ""), Ok(()));
}

#[test]
fn error_messages_read_as_shown() {
    assert_eq!(FieldError::TooShort(10).to_string(), "Please enter at least 10 characters");
    assert_eq!(
        FieldError::EmailInvalid.to_string(),
        "Please enter a valid email address"
    );
    assert_eq!(FieldError::NoSelection.to_string(), "Please select an option");
}

#[test]
fn validate_all_reports_every_failure_by_index() {
    let issues = validate_all([
        (FieldKind::Text, "Ada"),
        (FieldKind::Text, "L"),
        (FieldKind::Email, "nope"),
        (FieldKind::Select, ""),
        (FieldKind::TextArea, "We need a dragon for our feature."),
    ]);
    let got: Vec<_> = issues.into_iter().collect();
    assert_eq!(
        got,
        vec![
            (1, FieldError::TooShort(2)),
            (2, FieldError::EmailInvalid),
            (3, FieldError::NoSelection),
        ]
    );
}

#[test]
fn valid_form_has_no_issues() {
    let issues = validate_all([
        (FieldKind::Text, "Ada"),
        (FieldKind::Text, "Lovelace"),
        (FieldKind::Email, "ada@engine.io"),
        (FieldKind::Select, "commercial"),
        (FieldKind::TextArea, "A thirty second spot with fluid sims."),
    ]);
    assert!(issues.is_empty());
}

#[test]
fn thank_you_names_sender_and_project() {
    let sub = ContactSubmission {
        first_name: " Ada ".into(),
        project_type: "commercial".into(),
        ..Default::default()
    };
    let msg = sub.thank_you();
    assert!(msg.contains("Thank you, Ada!"));
    assert!(msg.contains("Your commercial project inquiry"));
}

#[test]
fn every_control_is_checked_after_a_failure() {
    // Submit maps every control to (kind, value), including ones it can't classify.
    let issues = validate_all([
        (FieldKind::Email, ""),
        (FieldKind::Other, ""),
        (FieldKind::Text, ""),
        (FieldKind::TextArea, "short"),
    ]);
    let indices: Vec<usize> = issues.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 2, 3]);
    assert_eq!(issues[0].1.to_string(), "Email is required");
    assert_eq!(issues[2].1, FieldError::TooShort(10));
}
