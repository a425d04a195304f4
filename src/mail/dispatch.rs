//! Message dispatch for outbox.
//!
//! Dispatch is a pure in-memory fan-out: one terminal copy per
//! recipient, stamped with a delivery timestamp and a sent/failed
//! verdict derived from the input message's readiness. Wrappers that
//! add side effects (such as the journal file) compose over the
//! `Dispatch` trait.

use chrono::Utc;
use tracing::debug;

use crate::error::Result;

use super::message::{Message, SHORT_BODY_LENGTH};
use super::status::Status;

/// Dispatch behavior, shared by the in-memory dispatcher and any
/// wrapper around it.
pub trait Dispatch {
    /// Produce one terminal message copy per recipient of `message`.
    fn dispatch(&self, message: &Message) -> Result<Vec<Message>>;
}

/// The in-memory dispatcher.
///
/// Produces independent copies and never mutates the input message:
/// its send timestamp stays unset and its status and recipient list
/// are untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, message: &Message) -> Result<Vec<Message>> {
        // One verdict for the whole fan-out, taken from the input.
        let verdict = if message.status == Status::Ready {
            Status::Sent
        } else {
            Status::Failed
        };

        debug!(
            "dispatching to {} recipient(s) as {}",
            message.recipients.len(),
            verdict
        );

        let mut copies = Vec::with_capacity(message.recipients.len());
        for recipient in &message.recipients {
            copies.push(Message {
                subject: message.subject.clone(),
                body: message.body.clone(),
                sender: message.sender.clone(),
                recipients: vec![recipient.clone()],
                short_body: message
                    .short_body
                    .clone()
                    .or_else(|| message.preview(SHORT_BODY_LENGTH)),
                sent_at: Some(Utc::now()),
                status: verdict,
            });
        }

        Ok(copies)
    }
}
