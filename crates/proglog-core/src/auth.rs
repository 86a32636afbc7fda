//! Mocked sign-in and sign-up.
//!
//! There is no credential check: any non-empty email/password pair signs in.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// A required field is empty; the form silently ignores the submit
    MissingFields,
    /// Sign-up password and confirmation differ
    PasswordMismatch,
}

impl AuthError {
    /// Message shown to the user, if any
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AuthError::MissingFields => None,
            AuthError::PasswordMismatch => Some("Passwords do not match"),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "Required fields are empty"),
            AuthError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Session {
    /// First two characters of the email's local part, uppercased
    pub fn initials(&self) -> String {
        let local = self.email.split('@').next().unwrap_or_default();
        local.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn submit(&self) -> Result<Session, AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        log::info!("signed in as {}", self.email);
        Ok(Session {
            email: self.email.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Password mismatch is checked before required fields
    pub fn submit(&self) -> Result<Session, AuthError> {
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        log::info!("created account for {}", self.email);
        Ok(Session {
            email: self.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_accepts_any_pair() {
        let form = SignInForm {
            email: "me@example.com".into(),
            password: "x".into(),
        };
        assert_eq!(form.submit().unwrap().email, "me@example.com");
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let form = SignInForm {
            email: "me@example.com".into(),
            password: String::new(),
        };
        assert_eq!(form.submit(), Err(AuthError::MissingFields));
        assert_eq!(AuthError::MissingFields.user_message(), None);
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let form = SignUpForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            confirm_password: "secrex".into(),
        };
        let err = form.submit().unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
        assert_eq!(err.user_message(), Some("Passwords do not match"));
    }

    #[test]
    fn test_sign_up_mismatch_wins_over_missing() {
        let form = SignUpForm {
            password: "a".into(),
            ..Default::default()
        };
        assert_eq!(form.submit(), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn test_sign_up_requires_name() {
        let form = SignUpForm {
            name: String::new(),
            email: "ada@example.com".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        };
        assert_eq!(form.submit(), Err(AuthError::MissingFields));
    }

    #[test]
    fn test_initials() {
        let s = Session { email: "jdoe@example.com".into() };
        assert_eq!(s.initials(), "JD");
        let s = Session { email: "q".into() };
        assert_eq!(s.initials(), "Q");
    }
}
