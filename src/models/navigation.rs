use serde::{Deserialize, Serialize};

/// Screen the application should show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Home,
    SignIn,
    SignUp,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::SignIn => "signin",
            Destination::SignUp => "signup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Destructive,
}

/// A message for the toast layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_tokens() {
        assert_eq!(Destination::Home.as_str(), "home");
        assert_eq!(Destination::SignIn.as_str(), "signin");
        assert_eq!(Destination::SignUp.as_str(), "signup");
    }
}
