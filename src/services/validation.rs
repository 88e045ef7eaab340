use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::error::ValidationErrors;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Collects field errors for one save operation.
pub struct Checker {
    errors: ValidationErrors,
}

impl Checker {
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    pub fn required(&mut self, field: &'static str, value: &str, max_len: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.add(field, "This field is required.");
        } else {
            self.max_len(field, value, max_len);
        }
        self
    }

    pub fn max_len(&mut self, field: &'static str, value: &str, max_len: usize) -> &mut Self {
        let len = value.chars().count();
        if len > max_len {
            self.errors.add(
                field,
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    max_len, len
                ),
            );
        }
        self
    }

    /// Blank is allowed; anything else must look like an email address.
    pub fn optional_email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() && !is_valid_email(value) {
            self.errors.add(field, "Enter a valid email address.");
        }
        self
    }

    pub fn url(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.add(field, "This field is required.");
        } else if !is_valid_url(value) {
            self.errors.add(field, "Enter a valid URL.");
        }
        self
    }

    pub fn optional_url(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() && !is_valid_url(value) {
            self.errors.add(field, "Enter a valid URL.");
        }
        self
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.add(field, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Absolute http(s) URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
