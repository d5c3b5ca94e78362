use super::*;
use halite_api::Error as CoreError;

#[test]
fn test_validate_length() {
    assert!(validate::length("ctx", 32, 32).is_ok());
    let err = validate::length("ctx", 31, 32).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "ctx",
            expected: 32,
            actual: 31
        }
    );
}

#[test]
fn test_validate_min_max_length() {
    assert!(validate::min_length("ctx", 16, 16).is_ok());
    assert!(validate::min_length("ctx", 15, 16).is_err());
    assert!(validate::max_length("ctx", 16, 16).is_ok());
    assert!(validate::max_length("ctx", 17, 16).is_err());
}

#[test]
fn test_validate_authentication() {
    assert!(validate::authentication(true, "alg").is_ok());
    assert_eq!(
        validate::authentication(false, "alg").unwrap_err(),
        Error::Authentication { algorithm: "alg" }
    );
}

#[test]
fn test_param_helper() {
    let err = Error::param("nonce", "wrong size");
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "nonce");
            assert_eq!(reason, "wrong size");
        }
        other => panic!("unexpected variant: {:?}", other),
    }
}

#[test]
fn test_conversion_to_core_error() {
    let err = Error::Length {
        context: "tag",
        expected: 16,
        actual: 4,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "tag");
            assert_eq!(expected, 16);
            assert_eq!(actual, 4);
        }
        other => panic!("unexpected variant: {:?}", other),
    }

    let auth = Error::Authentication {
        algorithm: "XSalsa20Poly1305",
    };
    assert!(matches!(
        CoreError::from(auth),
        CoreError::AuthenticationFailed { .. }
    ));
}

#[test]
fn test_display_formatting() {
    let err = Error::Overflow {
        operation: "SHA-512 update",
    };
    assert_eq!(format!("{}", err), "Counter overflow in SHA-512 update");
}
