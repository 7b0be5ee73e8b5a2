use epcqr::domain::text::{MAX_NAME_LEN, MAX_REFERENCE_LEN};
use epcqr::error::{AmountError, IbanError};
use epcqr::{Field, FieldError, ValidationOptions, Validator, encode, validate};

const IBAN: &str = "ES91 2100 0418 4502 0005 1332";

#[test]
fn test_end_to_end_scenario() {
    let request = validate("Juan Pérez", IBAN, "100.00", "Factura #12345").unwrap();
    assert_eq!(request.iban().as_str(), "ES9121000418450200051332");

    let payload = encode(&request);
    let lines: Vec<&str> = payload.lines().collect();
    assert!(lines.contains(&"EUR100.00"));
    assert!(lines.contains(&"ES9121000418450200051332"));
    assert!(lines.contains(&"Juan Pérez"));
    assert_eq!(lines.last(), Some(&"Factura #12345"));
}

#[test]
fn test_bad_iban_reports_only_iban() {
    let errors = validate("Juan Pérez", "1234", "100.00", "").unwrap_err();

    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Iban]);
    assert_eq!(
        errors.get(Field::Iban),
        Some(&FieldError::InvalidIban(IbanError::Malformed))
    );
}

#[test]
fn test_malformed_ibans_are_rejected() {
    for iban in [
        "",
        "ES",
        "ES91",
        "E591 2100",
        "es9x 2100",
        "ES91 2100 0418 4502 0005 1332 0000 0000 000",
        "ES91_2100",
        "ÉS91 2100",
    ] {
        let errors = validate("Juan", iban, "1", "").unwrap_err();
        assert!(
            matches!(errors.get(Field::Iban), Some(FieldError::InvalidIban(_))),
            "{iban:?}"
        );
    }
}

#[test]
fn test_amount_rejections() {
    let cases = [
        ("", FieldError::MissingAmount),
        ("-5", FieldError::InvalidAmount(AmountError::NotPositive)),
        ("0", FieldError::InvalidAmount(AmountError::NotPositive)),
        ("0.00", FieldError::InvalidAmount(AmountError::NotPositive)),
        ("abc", FieldError::InvalidAmount(AmountError::NotANumber)),
        ("NaN", FieldError::InvalidAmount(AmountError::NotANumber)),
        ("Infinity", FieldError::InvalidAmount(AmountError::NotANumber)),
        ("1.001", FieldError::InvalidAmount(AmountError::TooManyDecimals)),
        ("1000000000.00", FieldError::InvalidAmount(AmountError::TooLarge)),
    ];
    for (raw, expected) in cases {
        let errors = validate("Juan", IBAN, raw, "").unwrap_err();
        assert_eq!(errors.get(Field::Amount), Some(&expected), "{raw:?}");
        assert_eq!(errors.len(), 1, "{raw:?}");
    }
}

#[test]
fn test_excess_precision_is_rejected_not_rounded() {
    for raw in [
        "1.00000000000000000000000000001",
        "100.000000000000000000000000000000000001",
        "0.000000000000000000000000000001",
    ] {
        let errors = validate("Juan", IBAN, raw, "").unwrap_err();
        assert_eq!(
            errors.get(Field::Amount),
            Some(&FieldError::InvalidAmount(AmountError::TooManyDecimals)),
            "{raw:?}"
        );
    }

    let request = validate("Juan", IBAN, "100.100000000000000000000000000000", "").unwrap();
    assert!(encode(&request).ends_with("\nEUR100.10"));
}

#[test]
fn test_amount_boundaries() {
    let request = validate("Juan", IBAN, "0.01", "").unwrap();
    assert!(encode(&request).ends_with("\nEUR0.01"));

    let request = validate("Juan", IBAN, "999999999.99", "").unwrap();
    assert!(encode(&request).ends_with("\nEUR999999999.99"));
}

#[test]
fn test_amount_formatting_is_locale_independent() {
    let dot = validate("Juan", IBAN, "1234.5", "").unwrap();
    let comma = validate("Juan", IBAN, "1234,5", "").unwrap();

    assert_eq!(dot, comma);
    assert!(encode(&comma).contains("\nEUR1234.50"));
}

#[test]
fn test_name_length_boundary() {
    let name = "a".repeat(MAX_NAME_LEN);
    assert!(validate(&name, IBAN, "1", "").is_ok());

    let name = "a".repeat(MAX_NAME_LEN + 1);
    let errors = validate(&name, IBAN, "1", "").unwrap_err();
    assert!(matches!(errors.get(Field::Name), Some(FieldError::InvalidName(_))));
}

#[test]
fn test_reference_length_boundary() {
    let reference = "r".repeat(MAX_REFERENCE_LEN);
    assert!(validate("Juan", IBAN, "1", &reference).is_ok());

    let reference = "r".repeat(MAX_REFERENCE_LEN + 1);
    let errors = validate("Juan", IBAN, "1", &reference).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Reference]);
}

#[test]
fn test_all_fields_reported_together() {
    let errors = validate(" ", "", "", "line\nbreak").unwrap_err();

    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![Field::Name, Field::Iban, Field::Amount, Field::Reference]
    );
    assert_eq!(errors.get(Field::Name), Some(&FieldError::MissingName));
    assert_eq!(
        errors.get(Field::Iban),
        Some(&FieldError::InvalidIban(IbanError::Missing))
    );
    assert_eq!(errors.get(Field::Amount), Some(&FieldError::MissingAmount));
}

#[test]
fn test_strict_tier_is_opt_in() {
    let bad_check_digits = "ES00 2100 0418 4502 0005 1332";
    assert!(validate("Juan", bad_check_digits, "1", "").is_ok());

    let strict = Validator::new(ValidationOptions::strict());
    let errors = strict.validate("Juan", bad_check_digits, "1", "").unwrap_err();
    assert_eq!(
        errors.get(Field::Iban),
        Some(&FieldError::InvalidIban(IbanError::Checksum))
    );
    assert!(strict.validate("Juan", IBAN, "1", "").is_ok());
}
