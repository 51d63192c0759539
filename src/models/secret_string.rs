//! SecretString - a container for sensitive configuration values
//!
//! Holds database passwords, connection URLs and the service secret key. The content is
//! zeroized when the value is dropped and never shows up in `Debug` output, so whole
//! configuration structs can be logged safely.
use std::fmt;

use zeroize::Zeroizing;

#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
    /// Creates a new SecretString from a regular string.
    pub fn new(s: &str) -> Self {
        Self(Zeroizing::new(s.to_string()))
    }

    /// Access the secret string content with a provided function.
    ///
    /// This method allows temporary access to the string content
    /// without creating a copy of the string.
    pub fn as_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        f(self.0.as_str())
    }

    /// Create a temporary copy of the string content.
    ///
    /// Returns a zeroizing string that will be securely erased when dropped.
    pub fn to_str(&self) -> Zeroizing<String> {
        self.0.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes() == other.0.as_bytes()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SecretString(REDACTED)")
    }
}
