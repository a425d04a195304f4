//! Test helpers for E2E tests.
//!
//! Provides address and message builders shared by the integration
//! tests.

use outbox::{Address, Message};

/// Parse an address, panicking on invalid test input.
pub fn addr(raw: &str) -> Address {
    Address::parse(raw).unwrap_or_else(|e| panic!("invalid test address {raw:?}: {e}"))
}

/// Compose a draft message to the given recipients.
pub fn draft(subject: &str, body: &str, recipients: &[&str]) -> Message {
    let recipients: Vec<Address> = recipients.iter().map(|raw| addr(raw)).collect();
    Message::new(subject, body, addr("sender@mail.com"), recipients)
}
