//! Email address validation for outbox.
//!
//! Addresses are validated once at construction and immutable
//! afterwards. Display forms (normalized, masked) are derived on
//! demand and never stored.

use thiserror::Error;

/// Domain tokens accepted by address validation.
///
/// Matched as substrings anywhere in the lower-cased address, not
/// anchored to the end. `"name@domain.xyz.com.evil"` therefore passes.
/// Downstream behavior depends on this loose check; tighten it only
/// together with the tests that encode it.
pub const ALLOWED_DOMAIN_TOKENS: &[&str] = &[".com", ".ru", ".net"];

/// Address validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// No "@" separator in the input.
    #[error("address must contain '@'")]
    MissingSeparator,

    /// No recognized domain token in the input.
    #[error("address must use one of the allowed domains")]
    DomainNotAllowed,
}

/// A validated email address.
///
/// Keeps the raw input as given; callers compare addresses by
/// `normalized()` value.
///
/// # Examples
///
/// ```
/// use outbox::Address;
///
/// let addr = Address::parse("  USER@GMAIL.COM  ").unwrap();
/// assert_eq!(addr.normalized(), "user@gmail.com");
/// assert_eq!(addr.masked(), "us***@gmail.com");
///
/// assert!(Address::parse("not-an-email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Address {
    raw: String,
}

impl Address {
    /// Validate and construct an address from raw input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has no "@", or if none of the
    /// allowed domain tokens occurs in the lower-cased input.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AddressError> {
        let raw = raw.into();

        if !raw.contains('@') {
            return Err(AddressError::MissingSeparator);
        }

        let lower = raw.to_lowercase();
        if !ALLOWED_DOMAIN_TOKENS
            .iter()
            .any(|token| lower.contains(token))
        {
            return Err(AddressError::DomainNotAllowed);
        }

        Ok(Self { raw })
    }

    /// Trimmed, lower-cased form of the address.
    ///
    /// Recomputed on each call; not cached.
    pub fn normalized(&self) -> String {
        self.raw.trim().to_lowercase()
    }

    /// Masked display form: the first two characters of the login
    /// (fewer if the login is shorter), then `***@` and the domain.
    pub fn masked(&self) -> String {
        let normalized = self.normalized();
        match normalized.split_once('@') {
            Some((login, domain)) => {
                let prefix: String = login.chars().take(2).collect();
                format!("{prefix}***@{domain}")
            }
            // Unreachable after validation; fall through rather than panic.
            None => normalized,
        }
    }
}
