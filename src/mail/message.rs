//! The composed email message entity.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::datetime::format_sent_at;

use super::address::Address;
use super::status::Status;

/// Default truncation length for the short body.
pub const SHORT_BODY_LENGTH: usize = 10;

/// Recipient field accepted by the message constructor.
///
/// A single address or an ordered list; canonicalized to a `Vec` once,
/// at the construction boundary.
#[derive(Debug, Clone)]
pub enum Recipients {
    /// One recipient.
    One(Address),
    /// An ordered list of recipients. May be empty.
    Many(Vec<Address>),
}

impl From<Address> for Recipients {
    fn from(address: Address) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<Address>> for Recipients {
    fn from(addresses: Vec<Address>) -> Self {
        Recipients::Many(addresses)
    }
}

impl Recipients {
    fn into_vec(self) -> Vec<Address> {
        match self {
            Recipients::One(address) => vec![address],
            Recipients::Many(addresses) => addresses,
        }
    }
}

/// A composed email message.
///
/// Created in `Draft` status. `prepare()` normalizes the text fields,
/// derives the status and recomputes the short body. The dispatcher
/// reads a prepared message and produces new per-recipient copies; it
/// never mutates the original.
#[derive(Debug, Clone)]
pub struct Message {
    /// Subject line.
    pub subject: String,
    /// Full body text.
    pub body: String,
    /// Sender address.
    pub sender: Address,
    /// Recipient addresses, in order. May be empty.
    pub recipients: Vec<Address>,
    /// Shortened body, set by `prepare()` or `shorten_body()`.
    pub short_body: Option<String>,
    /// Delivery timestamp, stamped on dispatched copies only.
    pub sent_at: Option<DateTime<Utc>>,
    /// Lifecycle state.
    pub status: Status,
}

/// Collapse runs of space/newline/tab into a single space and trim.
fn normalize_text(text: &str) -> String {
    text.trim()
        .split([' ', '\n', '\t'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Message {
    /// Compose a new message in `Draft` status.
    ///
    /// Recipients may be passed as a single `Address` or a
    /// `Vec<Address>`; either form is stored as a list.
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        sender: Address,
        recipients: impl Into<Recipients>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            sender,
            recipients: recipients.into().into_vec(),
            short_body: None,
            sent_at: None,
            status: Status::default(),
        }
    }

    /// Stamp an explicit status at construction time.
    ///
    /// Lets callers exercise dispatch behavior without `prepare()`.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Prepare the message for dispatch.
    ///
    /// Normalizes subject and body, derives the status from the
    /// normalized fields (`Ready` when subject, body and recipients are
    /// all non-empty, `Invalid` otherwise) and recomputes the short
    /// body with the default length. Returns `&mut Self` for chaining.
    pub fn prepare(&mut self) -> &mut Self {
        self.subject = normalize_text(&self.subject);
        self.body = normalize_text(&self.body);

        let complete =
            !self.subject.is_empty() && !self.body.is_empty() && !self.recipients.is_empty();
        self.status = if complete {
            Status::Ready
        } else {
            Status::Invalid
        };

        self.shorten_body(SHORT_BODY_LENGTH);
        self
    }

    /// Compute the shortened body without storing it.
    ///
    /// `None` for an empty body. Otherwise the first `max_len`
    /// characters, with a `...` suffix only when the body is strictly
    /// longer than `max_len`.
    pub fn preview(&self, max_len: usize) -> Option<String> {
        if self.body.is_empty() {
            return None;
        }

        if self.body.chars().count() > max_len {
            let truncated: String = self.body.chars().take(max_len).collect();
            Some(format!("{truncated}..."))
        } else {
            Some(self.body.clone())
        }
    }

    /// Recompute and store the shortened body.
    pub fn shorten_body(&mut self, max_len: usize) {
        self.short_body = self.preview(max_len);
    }

    /// Comma-joined masked recipient addresses.
    pub fn recipients_masked(&self) -> String {
        self.recipients
            .iter()
            .map(Address::masked)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Message {
    /// Render the fixed five-line display block: status, recipients,
    /// sender, subject with the send date, then the short body if
    /// present, the full body otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "To: {}", self.recipients_masked())?;
        writeln!(f, "From: {}", self.sender.masked())?;
        writeln!(
            f,
            "Subject: {}, date {}",
            self.subject,
            format_sent_at(self.sent_at.as_ref())
        )?;
        f.write_str(self.short_body.as_deref().unwrap_or(&self.body))
    }
}
