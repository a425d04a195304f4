//! outbox - in-memory email composition and dispatch.
//!
//! Models composing an email message: validating addresses, normalizing
//! the subject and body, deriving a lifecycle status, and fanning the
//! message out into per-recipient delivery records marked sent or
//! failed. There is no network transport; dispatch is a pure in-memory
//! transformation with an optional flat-file journal of the results.
//!
//! ## Quick Start
//!
//! ```rust
//! use outbox::{Address, Dispatch, Dispatcher, Message, Status};
//!
//! let sender = Address::parse("alice@example.com").unwrap();
//! let to = vec![
//!     Address::parse("bob@example.net").unwrap(),
//!     Address::parse("carol@example.com").unwrap(),
//! ];
//!
//! let mut message = Message::new("Greetings", "Hello from outbox", sender, to);
//! message.prepare();
//! assert_eq!(message.status, Status::Ready);
//!
//! let copies = Dispatcher::new().dispatch(&message).unwrap();
//! assert_eq!(copies.len(), 2);
//! assert!(copies.iter().all(|copy| copy.status == Status::Sent));
//! ```

pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod mail;

pub use config::Config;
pub use error::{OutboxError, Result};
pub use mail::{
    Address, AddressError, Dispatch, Dispatcher, JournaledDispatcher, Message, Recipients, Status,
    ALLOWED_DOMAIN_TOKENS, JOURNAL_SEPARATOR, SHORT_BODY_LENGTH,
};
