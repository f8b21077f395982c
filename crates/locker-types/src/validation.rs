//! Pre-submit form checks. They save a round trip; the backend re-validates.

use thiserror::Error;

use crate::user::{LoginRequest, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MOBILE_LEN_RANGE: std::ops::RangeInclusive<usize> = 10..=15;
pub const AADHAAR_LEN: usize = 12;

/// Display text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Please fill in all fields")]
    IncompleteLogin,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Mobile number must be between 10 and 15 characters")]
    MobileLength,
    #[error("Aadhaar number must be exactly 12 characters")]
    AadhaarLength,
}

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub mobile_number: String,
    pub aadhaar_number: String,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

impl RegistrationForm {
    /// Checks run in a fixed order and the first failure is reported.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let required = [
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.full_name,
            &self.mobile_number,
        ];
        if required.iter().any(|v| blank(v)) {
            return Err(ValidationError::MissingRequired);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if char_len(&self.password) < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if char_len(&self.username) < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort);
        }
        if !MOBILE_LEN_RANGE.contains(&char_len(&self.mobile_number)) {
            return Err(ValidationError::MobileLength);
        }
        let aadhaar = (!self.aadhaar_number.is_empty()).then(|| self.aadhaar_number.clone());
        if aadhaar.as_deref().is_some_and(|a| char_len(a) != AADHAAR_LEN) {
            return Err(ValidationError::AadhaarLength);
        }

        Ok(SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            mobile_number: self.mobile_number.clone(),
            full_name: self.full_name.clone(),
            aadhaar_number: aadhaar,
        })
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::IncompleteLogin);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            username: "asha".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            full_name: "Asha Rao".into(),
            mobile_number: "9876543210".into(),
            aadhaar_number: String::new(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.username, "asha");
        assert_eq!(request.aadhaar_number, None);

        let mut form = valid_form();
        form.aadhaar_number = "123412341234".into();
        assert_eq!(
            form.validate().unwrap().aadhaar_number.as_deref(),
            Some("123412341234")
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let mut form = valid_form();
        form.full_name = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));

        let mut form = valid_form();
        form.confirm_password.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn rejects_mismatched_passwords() {
        let mut form = valid_form();
        form.confirm_password = "secret2".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn rejects_short_password() {
        let mut form = valid_form();
        form.password = "abc12".into();
        form.confirm_password = "abc12".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn rejects_short_username() {
        let mut form = valid_form();
        form.username = "as".into();
        assert_eq!(form.validate(), Err(ValidationError::UsernameTooShort));
    }

    #[test]
    fn mobile_length_bounds() {
        for (mobile, ok) in [
            ("987654321", false),
            ("9876543210", true),
            ("987654321012345", true),
            ("9876543210123456", false),
        ] {
            let mut form = valid_form();
            form.mobile_number = mobile.into();
            assert_eq!(form.validate().is_ok(), ok, "{mobile}");
            if !ok {
                assert_eq!(form.validate(), Err(ValidationError::MobileLength));
            }
        }
    }

    #[test]
    fn rejects_malformed_aadhaar() {
        for aadhaar in ["12341234123", "1234123412345"] {
            let mut form = valid_form();
            form.aadhaar_number = aadhaar.into();
            assert_eq!(form.validate(), Err(ValidationError::AadhaarLength));
        }
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut form = valid_form();
        form.username = "äö".into();
        assert_eq!(form.validate(), Err(ValidationError::UsernameTooShort));

        let mut form = valid_form();
        form.username = "äöü".into();
        form.aadhaar_number = "१२३४१२३४१२३४".into();
        assert_eq!(
            form.validate().unwrap().aadhaar_number.as_deref(),
            Some("१२३४१२३४१२३४")
        );
    }

    #[test]
    fn first_failure_wins() {
        let mut form = valid_form();
        form.password = "abc".into();
        form.confirm_password = "xyz".into();
        form.username = "a".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn error_text_is_user_facing() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let request = LoginRequest {
            username: "asha".into(),
            password: String::new(),
        };
        assert_eq!(request.validate(), Err(ValidationError::IncompleteLogin));
    }
}
