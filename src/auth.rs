// Login and registration form shells
//
// There is no credential exchange. A valid submission waits for the
// configured delay and then redirects.

use crate::routes::Route;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Pause standing in for a server round trip
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Reasons a form cannot be submitted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("You must agree to the Terms and Conditions")]
    TermsNotAccepted,
}

/// Registration form fields
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Full name", &self.name)?;
        require("Email", &self.email)?;
        require("Phone", &self.phone)?;
        require("Password", &self.password)?;
        require("Confirm password", &self.confirm_password)?;

        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.agree_to_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(())
    }

    /// Validate, wait, then send the user to the login page
    pub fn submit(&self, delay: Duration) -> Result<Route, FormError> {
        self.validate()?;
        simulate(delay);
        info!(email = %self.email, "Registration accepted");
        Ok(Route::Login)
    }
}

/// Login form fields
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Email", &self.email)?;
        require("Password", &self.password)
    }

    /// Validate, wait, then send the user to the catalog
    pub fn submit(&self, delay: Duration) -> Result<Route, FormError> {
        self.validate()?;
        simulate(delay);
        info!(email = %self.email, "Login accepted");
        Ok(Route::Catalog)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn simulate(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
