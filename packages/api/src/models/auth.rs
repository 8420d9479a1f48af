use serde::{Deserialize, Serialize};

use super::user::User;

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterCredentials {
    /// Local pre-flight validation. Forms call this before the session is
    /// touched, so a mismatched confirmation never produces a network call.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("Please enter a valid email".to_string());
        }
        if self.password.len() < 8 {
            return Err("Password must be at least 8 characters".to_string());
        }
        if self.password != self.password_confirmation {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

/// Payload of `{data: {user, token}}` returned by login and register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// Payload of `{data: {user}}` returned by `GET /auth/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> RegisterCredentials {
        RegisterCredentials {
            name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
        }
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert!(credentials().validate().is_ok());
    }

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        let mut creds = credentials();
        creds.password_confirmation = "secret124".to_string();
        assert_eq!(creds.validate(), Err("Passwords do not match".to_string()));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let mut creds = credentials();
        creds.password = "short".to_string();
        creds.password_confirmation = "short".to_string();
        assert!(creds.validate().is_err());
    }

    #[test]
    fn test_blank_name_and_bad_email_are_rejected() {
        let mut creds = credentials();
        creds.name = "  ".to_string();
        assert!(creds.validate().is_err());

        let mut creds = credentials();
        creds.email = "not-an-email".to_string();
        assert!(creds.validate().is_err());
    }
}
