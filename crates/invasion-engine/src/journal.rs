//! Streaming event journal.
//!
//! [`JournalWriter`] is a [`TurnCallback`] that appends every event of every
//! turn to a writer as one JSON object per line. A write failure stops the
//! journal but not the simulation; it is reported by
//! [`JournalWriter::finish`].

use std::io::{self, Write};

use invasion_core::{TurnCallback, TurnSummary, World};
use invasion_types::JournalEntry;

/// Writes the event journal as JSON lines while the simulation runs.
#[derive(Debug)]
pub struct JournalWriter<W: Write> {
    out: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> JournalWriter<W> {
    /// Wrap a writer.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    /// Flush the writer and return the number of entries written, or the
    /// first error hit along the way.
    pub fn finish(mut self) -> io::Result<usize> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.written)
    }

    fn write_entry(&mut self, entry: &JournalEntry) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, entry)?;
        self.out.write_all(b"\n")?;
        self.written = self.written.saturating_add(1);
        Ok(())
    }
}

impl<W: Write> TurnCallback for JournalWriter<W> {
    fn on_turn(&mut self, summary: &TurnSummary, _world: &World) {
        if self.error.is_some() {
            return;
        }
        for event in &summary.events {
            let entry = JournalEntry {
                turn: summary.turn,
                event: event.clone(),
            };
            if let Err(err) = self.write_entry(&entry) {
                self.error = Some(err);
                return;
            }
        }
    }
}
