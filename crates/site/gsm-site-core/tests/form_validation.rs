use gsm_site_core::form::{
    validate, validate_all, FormSubmission, ValidationError, REQUIRED_FIELDS,
};

fn valid_form() -> FormSubmission {
    [
        ("name", "Jordan Reyes"),
        ("email", "jordan@example.edu"),
        ("phone", "(555) 123-4567"),
        ("major", "Mechanical Engineering"),
        ("safety", "on"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn fixtures_report_expected_first_failure() {
    let cases = gsm_test_fixtures::forms::all().expect("load form fixtures");
    assert!(!cases.is_empty());
    for (name, case) in cases {
        let form: FormSubmission = case.pairs().into_iter().collect();
        match (validate(&form), case.expected) {
            (Ok(()), None) => {}
            (Err(err), Some(expected)) => {
                assert_eq!(err.field(), expected.field, "fixture {name}");
                assert_eq!(err.to_string(), expected.message, "fixture {name}");
            }
            (got, want) => panic!("fixture {name}: got {got:?}, expected {want:?}"),
        }
    }
}

#[test]
fn each_blank_required_field_is_named() {
    for field in REQUIRED_FIELDS {
        for blank in ["", "   ", "\t\n"] {
            let mut form = valid_form();
            form.insert(field, blank);
            let err = validate(&form).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingField {
                    field: field.to_string()
                }
            );
        }
    }
}

#[test]
fn first_missing_field_wins_in_fixed_order() {
    let form: FormSubmission = [("major", ""), ("phone", ""), ("safety", "on")]
        .into_iter()
        .collect();
    assert_eq!(
        validate(&form).unwrap_err().to_string(),
        "Please fill in the name field."
    );

    let form: FormSubmission = [("name", "A"), ("email", "a@b.com"), ("major", "")]
        .into_iter()
        .collect();
    assert_eq!(validate(&form).unwrap_err().field(), "phone");
}

#[test]
fn email_then_phone_then_safety() {
    let mut form = valid_form();
    form.insert("email", "a@b");
    form.insert("phone", "123");
    form.insert("safety", "");
    assert_eq!(
        validate_all(&form),
        vec![
            ValidationError::InvalidEmail,
            ValidationError::InvalidPhone,
            ValidationError::SafetyNotAcknowledged,
        ]
    );
    assert_eq!(validate(&form), Err(ValidationError::InvalidEmail));
}

#[test]
fn email_and_phone_examples() {
    let mut form = valid_form();
    form.insert("email", "a@b.com");
    form.insert("phone", "(555) 123-4567");
    assert!(validate(&form).is_ok());
    assert!(validate_all(&form).is_empty());

    form.insert("phone", "123");
    assert_eq!(validate(&form), Err(ValidationError::InvalidPhone));
}

#[test]
fn email_is_not_trimmed_before_matching() {
    let mut form = valid_form();
    form.insert("email", " jordan@example.edu");
    assert_eq!(validate(&form), Err(ValidationError::InvalidEmail));
}

#[test]
fn missing_safety_checkbox_is_rejected() {
    let form: FormSubmission = valid_form()
        .iter()
        .filter(|(k, _)| *k != "safety")
        .collect();
    assert_eq!(form.get("safety"), None);
    assert_eq!(
        validate(&form).unwrap_err().to_string(),
        "You must agree to complete the safety orientation program."
    );
}

#[test]
fn later_values_replace_earlier_ones() {
    let form: FormSubmission = [("name", "first"), ("name", "second")]
        .into_iter()
        .collect();
    assert_eq!(form.len(), 1);
    assert_eq!(form.get("name"), Some("second"));
}

#[test]
fn errors_serialize_with_kind_tag() {
    let json = serde_json::to_value(ValidationError::MissingField {
        field: "email".into(),
    })
    .unwrap();
    assert_eq!(json["kind"], "missing_field");
    assert_eq!(json["field"], "email");
}
