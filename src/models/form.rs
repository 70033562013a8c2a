use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignInField {
    Email,
    Password,
}

impl SignInField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignInField::Email => "email",
            SignInField::Password => "password",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "email" => Some(SignInField::Email),
            "password" => Some(SignInField::Password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignUpField::FullName => "fullName",
            SignUpField::Email => "email",
            SignUpField::Phone => "phone",
            SignUpField::Password => "password",
            SignUpField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fullName" => Some(SignUpField::FullName),
            "email" => Some(SignUpField::Email),
            "phone" => Some(SignUpField::Phone),
            "password" => Some(SignUpField::Password),
            "confirmPassword" => Some(SignUpField::ConfirmPassword),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl SignInForm {
    pub fn set(&mut self, field: SignInField, value: String) {
        match field {
            SignInField::Email => self.email = value,
            SignInField::Password => self.password = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn set(&mut self, field: SignUpField, value: String) {
        let slot = match field {
            SignUpField::FullName => &mut self.full_name,
            SignUpField::Email => &mut self.email,
            SignUpField::Phone => &mut self.phone,
            SignUpField::Password => &mut self.password,
            SignUpField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_inputs() {
        for field in [
            SignUpField::FullName,
            SignUpField::Email,
            SignUpField::Phone,
            SignUpField::Password,
            SignUpField::ConfirmPassword,
        ] {
            assert_eq!(SignUpField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(SignInField::from_str("password"), Some(SignInField::Password));
        assert_eq!(SignInField::from_str("fullName"), None);
    }

    #[test]
    fn test_serialized_form_omits_passwords() {
        let mut form = SignUpForm::default();
        form.set(SignUpField::FullName, "Ayesha Khan".into());
        form.set(SignUpField::Password, "secret".into());
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("fullName"));
        assert!(!json.contains("secret"));
    }
}
