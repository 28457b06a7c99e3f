use crate::error::{LoanError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern"));

// German numbers only: +49 or 0 prefix, then digit groups separated by
// spaces, hyphens, or parentheses.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+49|0)(\s?\d+|\(\d+\))[\s\-]?\d+[\s\-]?\d+$").expect("phone pattern")
});

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("postal code pattern"));

static PHONE_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()\s\-]").expect("phone junk pattern"));

/// A loan customer with a German address and phone number.
///
/// `id` is assigned by the store on insert; a zero id marks an unsaved
/// customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub phone_number: String,
    pub email: String,
}

impl Customer {
    /// Checks the required fields and the German phone/postal patterns.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.is_empty() {
            return Err(LoanError::ValidationError(
                "First name is required.".to_string(),
            ));
        }
        if self.last_name.is_empty() {
            return Err(LoanError::ValidationError(
                "Last name is required.".to_string(),
            ));
        }
        if !EMAIL.is_match(&self.email) {
            return Err(LoanError::ValidationError(
                "A valid email address is required.".to_string(),
            ));
        }
        if !PHONE.is_match(&self.phone_number) {
            return Err(LoanError::ValidationError(
                "A valid German phone number is required.".to_string(),
            ));
        }
        if !POSTAL_CODE.is_match(&self.postal_code) {
            return Err(LoanError::ValidationError(
                "A valid postal code is required.".to_string(),
            ));
        }
        Ok(())
    }

    /// Rewrites the phone number to the canonical `+49…` form.
    pub fn normalize_phone_number(&mut self) {
        if self.phone_number.is_empty() {
            return;
        }
        let stripped = PHONE_JUNK.replace_all(&self.phone_number, "").into_owned();
        self.phone_number = if stripped.starts_with("+49") {
            stripped
        } else {
            format!("+49{}", stripped.trim_start_matches('0'))
        };
    }
}
