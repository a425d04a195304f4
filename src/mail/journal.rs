//! Journaling dispatch wrapper.
//!
//! Wraps any `Dispatch` implementation and records the rendered
//! results of each dispatch that yields output to a flat text file.
//! The file is overwritten on every write, so it always holds the
//! results of the most recent dispatch.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

use super::dispatch::Dispatch;
use super::message::Message;

/// Separator line between journal entries.
pub const JOURNAL_SEPARATOR: &str = "====================";

/// Dispatcher wrapper that journals results to a file.
pub struct JournaledDispatcher<D> {
    inner: D,
    path: PathBuf,
}

impl<D: Dispatch> JournaledDispatcher<D> {
    /// Wrap `inner`, journaling to the file at `path`.
    pub fn new(inner: D, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }

    /// Overwrite the journal file with the rendered copies.
    fn write_journal(&self, copies: &[Message]) -> Result<()> {
        let separator = format!("\n{JOURNAL_SEPARATOR}\n");
        let mut content = copies
            .iter()
            .map(Message::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        content.push('\n');

        fs::write(&self.path, content)?;
        debug!("journaled {} entries to {}", copies.len(), self.path.display());
        Ok(())
    }
}

impl<D: Dispatch> Dispatch for JournaledDispatcher<D> {
    /// Dispatch through the inner dispatcher, then journal the results
    /// when there are any.
    fn dispatch(&self, message: &Message) -> Result<Vec<Message>> {
        let copies = self.inner.dispatch(message)?;
        if !copies.is_empty() {
            self.write_journal(&copies)?;
        }
        Ok(copies)
    }
}
