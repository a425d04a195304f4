//! Mail module for outbox.
//!
//! This module provides the in-memory mail model:
//! - Address validation and display masking
//! - Message composition, preparation and rendering
//! - Per-recipient dispatch with sent/failed verdicts
//! - Optional journaling of dispatch results to a file

mod address;
mod dispatch;
mod journal;
mod message;
mod status;

pub use address::{Address, AddressError, ALLOWED_DOMAIN_TOKENS};
pub use dispatch::{Dispatch, Dispatcher};
pub use journal::{JournaledDispatcher, JOURNAL_SEPARATOR};
pub use message::{Message, Recipients, SHORT_BODY_LENGTH};
pub use status::Status;
