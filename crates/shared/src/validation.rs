//! Common validation utilities.

use validator::ValidationError;

/// Minimum digits a Korean phone contact may carry (local numbers).
const MIN_CONTACT_DIGITS: usize = 9;

/// Maximum digits a contact may carry (mobile with country prefix).
const MAX_CONTACT_DIGITS: usize = 12;

/// Validates a recipient contact number.
///
/// Accepts digits with optional dashes (e.g. `010-1234-5678`); the digit
/// count must fall within the national numbering plan bounds.
pub fn validate_contact(contact: &str) -> Result<(), ValidationError> {
    let digits = contact.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = contact.chars().all(|c| c.is_ascii_digit() || c == '-');

    if well_formed && (MIN_CONTACT_DIGITS..=MAX_CONTACT_DIGITS).contains(&digits) {
        Ok(())
    } else {
        let mut err = ValidationError::new("contact_format");
        err.message = Some("Contact must be a phone number with 9 to 12 digits".into());
        Err(err)
    }
}

/// Validates a template code.
///
/// Template codes are the human lookup keys registered with the gateway:
/// uppercase ASCII letters and digits, at most 20 characters.
pub fn validate_template_code(code: &str) -> Result<(), ValidationError> {
    let well_formed = !code.is_empty()
        && code.len() <= 20
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("template_code_format");
        err.message = Some("Template code must be 1-20 uppercase letters or digits".into());
        Err(err)
    }
}

/// Validates a company registration number (digits with optional dashes).
pub fn validate_registration_number(number: &str) -> Result<(), ValidationError> {
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = number.chars().all(|c| c.is_ascii_digit() || c == '-');

    if well_formed && digits == 10 {
        Ok(())
    } else {
        let mut err = ValidationError::new("registration_number_format");
        err.message = Some("Registration number must carry exactly 10 digits".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contact_accepts_dashed_mobile() {
        assert!(validate_contact("010-1234-5678").is_ok());
        assert!(validate_contact("01012345678").is_ok());
        assert!(validate_contact("02-123-4567").is_ok());
    }

    #[test]
    fn test_validate_contact_rejects_short_or_alpha() {
        assert!(validate_contact("1234").is_err());
        assert!(validate_contact("010-abcd-5678").is_err());
        assert!(validate_contact("").is_err());
    }

    #[test]
    fn test_validate_contact_rejects_overlong() {
        assert!(validate_contact("0101234567890123").is_err());
    }

    #[test]
    fn test_validate_template_code() {
        assert!(validate_template_code("WELCOME01").is_ok());
        assert!(validate_template_code("TA0001").is_ok());
        assert!(validate_template_code("welcome01").is_err());
        assert!(validate_template_code("").is_err());
        assert!(validate_template_code("TOO-LONG-TEMPLATE-CODE-123").is_err());
    }

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("123-45-67890").is_ok());
        assert!(validate_registration_number("1234567890").is_ok());
        assert!(validate_registration_number("12345").is_err());
        assert!(validate_registration_number("123-45-6789a").is_err());
    }
}
