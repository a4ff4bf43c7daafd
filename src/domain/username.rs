//! Validated username accepted by the stat card endpoint.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,100}$").unwrap());

/// A username that is safe to place in the upstream request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validates a raw `username` query value.
    ///
    /// The value is returned unchanged on success: no trimming and no case
    /// folding.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingUsername`] when the value is absent or
    /// whitespace-only, and [`AppError::InvalidUsername`] when it contains
    /// characters outside `[A-Za-z0-9_-]` or is longer than 100 characters.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Err(AppError::MissingUsername),
        };

        if !USERNAME_REGEX.is_match(raw) {
            return Err(AppError::InvalidUsername);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
