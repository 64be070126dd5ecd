use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::AccountAction;

/// Only addresses under this domain may authenticate.
pub const INSTITUTION_DOMAIN: &str = "@purdue.edu";
pub const MAX_EMAIL_LEN: usize = 100;
pub const MAX_PASSWORD_LEN: usize = 100;
pub const CODE_LEN: usize = 6;

/// Where the user currently is in the one-time-code flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStage {
    #[default]
    Anonymous,
    AwaitingLoginVerification,
    AwaitingForgotVerification,
    AwaitingPasswordUpdate,
    SignedIn,
}

impl AuthStage {
    pub fn status(self) -> SessionStatus {
        SessionStatus {
            signed_in: self == AuthStage::SignedIn,
            verifying_login: self == AuthStage::AwaitingLoginVerification,
            verifying_forgot: self == AuthStage::AwaitingForgotVerification,
            verifying_update: self == AuthStage::AwaitingPasswordUpdate,
        }
    }
}

/// Flag view of [`AuthStage`] for consumers that branch on booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStatus {
    pub signed_in: bool,
    pub verifying_login: bool,
    pub verifying_forgot: bool,
    pub verifying_update: bool,
}

/// Credentials posted to `/authenticate`. Built per request and moved into the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub action: AccountAction,
}

/// Body shared by `/forgot` (email) and `/verify` (code or new password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPayload {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email must end with {}", INSTITUTION_DOMAIN)]
    EmailDomain,
    #[error("email exceeds {} characters", MAX_EMAIL_LEN)]
    EmailTooLong,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("password exceeds {} characters", MAX_PASSWORD_LEN)]
    PasswordTooLong,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("code must be exactly {} digits", CODE_LEN)]
    MalformedCode,
    #[error("listing title must not be empty")]
    EmptyTitle,
    #[error("listing {field} exceeds {max} characters")]
    ListingFieldTooLong { field: &'static str, max: usize },
}

/// `.+@purdue\.edu$` where `.` excludes line terminators (`\n`, `\r`, U+2028, U+2029).
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\n\r\x{2028}\x{2029}]+@purdue\.edu$").expect("email pattern compiles")
});

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::EmailTooLong);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::EmailDomain);
    }
    Ok(())
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

pub fn validate_signup(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    validate_credentials(email, password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::MalformedCode)
    }
}

pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_end_with_institution_domain() {
        assert_eq!(validate_email("a@purdue.edu"), Ok(()));
        assert_eq!(validate_email("first.last@purdue.edu"), Ok(()));
        assert_eq!(
            validate_email("@purdue.edu"),
            Err(ValidationError::EmailDomain)
        );
        assert_eq!(
            validate_email("a@purdue.edu.evil.com"),
            Err(ValidationError::EmailDomain)
        );
        assert_eq!(
            validate_email("a@gmail.com"),
            Err(ValidationError::EmailDomain)
        );
        assert_eq!(
            validate_email("a@purdue-edu"),
            Err(ValidationError::EmailDomain)
        );
    }

    #[test]
    fn line_terminator_cannot_precede_domain() {
        for email in [
            "a\n@purdue.edu",
            "a\r@purdue.edu",
            "a\u{2028}@purdue.edu",
            "a\u{2029}@purdue.edu",
            "a@purdue.edu\n",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::EmailDomain),
                "{email:?}"
            );
        }
    }

    #[test]
    fn overlong_email_is_rejected() {
        let email = format!("{}@purdue.edu", "a".repeat(95));
        assert_eq!(validate_email(&email), Err(ValidationError::EmailTooLong));
    }

    #[test]
    fn domain_is_checked_before_password() {
        assert_eq!(
            validate_credentials("a@iu.edu", ""),
            Err(ValidationError::EmailDomain)
        );
        assert_eq!(
            validate_credentials("a@purdue.edu", ""),
            Err(ValidationError::EmptyPassword)
        );
    }

    #[test]
    fn signup_requires_matching_confirmation() {
        assert_eq!(
            validate_signup("a@purdue.edu", "pw1", "mismatch"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(validate_signup("a@purdue.edu", "pw1", "pw1"), Ok(()));
    }

    #[test]
    fn code_is_six_ascii_digits() {
        assert_eq!(validate_code("012345"), Ok(()));
        for bad in ["12345", "1234567", "12a456", "", "١٢٣٤٥٦", " 12345"] {
            assert_eq!(validate_code(bad), Err(ValidationError::MalformedCode), "{bad:?}");
        }
    }

    #[test]
    fn new_password_bounds() {
        assert_eq!(
            validate_new_password(""),
            Err(ValidationError::EmptyPassword)
        );
        assert_eq!(validate_new_password(&"x".repeat(100)), Ok(()));
        assert_eq!(
            validate_new_password(&"x".repeat(101)),
            Err(ValidationError::PasswordTooLong)
        );
    }

    #[test]
    fn status_sets_at_most_one_verifying_flag() {
        let stages = [
            AuthStage::Anonymous,
            AuthStage::AwaitingLoginVerification,
            AuthStage::AwaitingForgotVerification,
            AuthStage::AwaitingPasswordUpdate,
            AuthStage::SignedIn,
        ];
        for stage in stages {
            let status = stage.status();
            let verifying = [
                status.verifying_login,
                status.verifying_forgot,
                status.verifying_update,
            ]
            .into_iter()
            .filter(|flag| *flag)
            .count();
            assert!(verifying <= 1, "{stage:?}");
        }
        assert!(AuthStage::SignedIn.status().signed_in);
        assert_eq!(AuthStage::Anonymous.status(), SessionStatus::default());
    }
}
