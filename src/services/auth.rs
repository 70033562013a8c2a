use thiserror::Error;

use crate::models::{Destination, Notification, SignInField, SignInForm, SignUpField, SignUpForm};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email and password.")]
    MissingCredentials,

    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl ValidationError {
    /// Stable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials => "missing_credentials",
            ValidationError::MissingRequiredFields => "missing_required_fields",
            ValidationError::PasswordMismatch => "password_mismatch",
            ValidationError::UnknownField(_) => "unknown_field",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials | ValidationError::MissingRequiredFields => {
                "Missing Information"
            }
            ValidationError::PasswordMismatch => "Password Mismatch",
            ValidationError::UnknownField(_) => "Invalid Form",
        }
    }

    pub fn notification(&self) -> Notification {
        Notification::destructive(self.title(), self.to_string())
    }
}

/// What a successful submit asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub destination: Destination,
    pub notification: Notification,
}

pub trait FormSession {
    type Field: Copy;

    fn field_from_name(name: &str) -> Option<Self::Field>;

    fn set_field(&mut self, field: Self::Field, value: String);

    fn submit(&self) -> Result<FormOutcome, ValidationError>;

    fn reset(&mut self);

    fn set_named_field(&mut self, name: &str, value: String) -> Result<(), ValidationError> {
        let field = Self::field_from_name(name)
            .ok_or_else(|| ValidationError::UnknownField(name.to_string()))?;
        self.set_field(field, value);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SignInSession {
    form: SignInForm,
    password_visible: bool,
}

impl SignInSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
    }
}

impl FormSession for SignInSession {
    type Field = SignInField;

    fn field_from_name(name: &str) -> Option<SignInField> {
        SignInField::from_str(name)
    }

    fn set_field(&mut self, field: SignInField, value: String) {
        self.form.set(field, value);
    }

    fn submit(&self) -> Result<FormOutcome, ValidationError> {
        if self.form.email.is_empty() || self.form.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }

        tracing::info!("Sign-in accepted");
        Ok(FormOutcome {
            destination: Destination::Home,
            notification: Notification::info("Welcome back!", "Signed in successfully."),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct SignUpSession {
    form: SignUpForm,
    password_visible: bool,
}

impl SignUpSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
    }
}

impl FormSession for SignUpSession {
    type Field = SignUpField;

    fn field_from_name(name: &str) -> Option<SignUpField> {
        SignUpField::from_str(name)
    }

    fn set_field(&mut self, field: SignUpField, value: String) {
        self.form.set(field, value);
    }

    fn submit(&self) -> Result<FormOutcome, ValidationError> {
        let form = &self.form;
        // phone is optional
        let required = [
            &form.full_name,
            &form.email,
            &form.password,
            &form.confirm_password,
        ];
        if required.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }
        if form.password != form.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        tracing::info!("Sign-up accepted");
        Ok(FormOutcome {
            destination: Destination::Home,
            notification: Notification::info("Account Created!", "Welcome to LifeLink Pakistan."),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::navigation::Severity;

    fn filled_sign_up() -> SignUpSession {
        let mut session = SignUpSession::new();
        session.set_field(SignUpField::FullName, "Ayesha Khan".into());
        session.set_field(SignUpField::Email, "ayesha@example.com".into());
        session.set_field(SignUpField::Password, "abc".into());
        session.set_field(SignUpField::ConfirmPassword, "abc".into());
        session
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let mut session = SignInSession::new();
        assert_eq!(session.submit(), Err(ValidationError::MissingCredentials));

        session.set_field(SignInField::Email, "a@b.pk".into());
        let err = session.submit().unwrap_err();
        assert_eq!(err.code(), "missing_credentials");
        let note = err.notification();
        assert_eq!(note.title, "Missing Information");
        assert_eq!(note.description, "Please enter your email and password.");
        assert_eq!(note.severity, Severity::Destructive);
    }

    #[test]
    fn test_sign_in_accepts_any_non_empty_pair() {
        let mut session = SignInSession::new();
        session.set_field(SignInField::Email, "x".into());
        session.set_field(SignInField::Password, "y".into());

        let outcome = session.submit().unwrap();
        assert_eq!(outcome.destination, Destination::Home);
        assert_eq!(outcome.notification.title, "Welcome back!");
        assert_eq!(outcome.notification.severity, Severity::Info);
    }

    #[test]
    fn test_sign_in_whitespace_counts_as_filled() {
        let mut session = SignInSession::new();
        session.set_field(SignInField::Email, " ".into());
        session.set_field(SignInField::Password, " ".into());
        assert!(session.submit().is_ok());
    }

    #[test]
    fn test_sign_up_missing_required_fields() {
        for field in [
            SignUpField::FullName,
            SignUpField::Email,
            SignUpField::Password,
            SignUpField::ConfirmPassword,
        ] {
            let mut session = filled_sign_up();
            session.set_field(field, String::new());
            assert_eq!(
                session.submit(),
                Err(ValidationError::MissingRequiredFields),
                "clearing {} should fail",
                field.as_str()
            );
        }
    }

    #[test]
    fn test_sign_up_missing_fields_checked_before_mismatch() {
        let mut session = SignUpSession::new();
        session.set_field(SignUpField::Password, "abc".into());
        session.set_field(SignUpField::ConfirmPassword, "xyz".into());
        assert_eq!(session.submit(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let mut session = filled_sign_up();
        session.set_field(SignUpField::Phone, "+92 300 1234567".into());
        session.set_field(SignUpField::ConfirmPassword, "xyz".into());

        let err = session.submit().unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.code(), "password_mismatch");
        assert_eq!(err.notification().title, "Password Mismatch");
    }

    #[test]
    fn test_sign_up_success_without_phone() {
        let session = filled_sign_up();
        let outcome = session.submit().unwrap();
        assert_eq!(outcome.destination, Destination::Home);
        assert_eq!(outcome.notification.title, "Account Created!");
        assert_eq!(outcome.notification.description, "Welcome to LifeLink Pakistan.");
    }

    #[test]
    fn test_set_field_is_idempotent() {
        let mut session = filled_sign_up();
        let before = session.form.clone();
        for _ in 0..3 {
            session.set_field(SignUpField::Email, "ayesha@example.com".into());
        }
        assert_eq!(session.form, before);
        assert!(session.submit().is_ok());
    }

    #[test]
    fn test_named_fields() {
        let mut session = SignUpSession::new();
        session
            .set_named_field("confirmPassword", "pw".into())
            .unwrap();
        assert_eq!(session.form.confirm_password, "pw");

        let err = session.set_named_field("nickname", "x".into()).unwrap_err();
        assert_eq!(err, ValidationError::UnknownField("nickname".into()));
        assert_eq!(err.code(), "unknown_field");

        let mut sign_in = SignInSession::new();
        assert!(sign_in.set_named_field("fullName", "x".into()).is_err());
        sign_in.set_named_field("email", "a@b.pk".into()).unwrap();
        assert_eq!(sign_in.form.email, "a@b.pk");
    }

    #[test]
    fn test_named_fields_accept_every_input_name() {
        let mut session = SignUpSession::new();
        for field in [
            SignUpField::FullName,
            SignUpField::Email,
            SignUpField::Phone,
            SignUpField::Password,
            SignUpField::ConfirmPassword,
        ] {
            session.set_named_field(field.as_str(), "abc".into()).unwrap();
        }
        assert!(session.submit().is_ok());

        let mut sign_in = SignInSession::new();
        for field in [SignInField::Email, SignInField::Password] {
            sign_in.set_named_field(field.as_str(), "x".into()).unwrap();
        }
        assert!(sign_in.submit().is_ok());
    }

    #[test]
    fn test_unknown_field_notification() {
        let note = ValidationError::UnknownField("nickname".into()).notification();
        assert_eq!(note.title, "Invalid Form");
        assert_eq!(note.description, "Unknown form field: nickname");
        assert_eq!(note.severity, Severity::Destructive);
    }

    #[test]
    fn test_reset_discards_state() {
        let mut session = filled_sign_up();
        session.toggle_password_visible();
        session.reset();
        assert_eq!(session.form, SignUpForm::default());
        assert!(!session.password_visible());
    }
}
