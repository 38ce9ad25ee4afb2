//! JSONL journal of game events.
//!
//! One JSON object per line, written when `BLOCKFALL_LOG_PATH` is set:
//!
//! ```text
//! {"seq":1,"elapsed_ms":0,"event":"spawned","piece":1,"kind":"t"}
//! {"seq":2,"elapsed_ms":9016,"event":"locked","report":{...},"score":40}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::GameEvent;

pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

#[derive(Serialize)]
struct Record<'a> {
    seq: u64,
    elapsed_ms: u64,
    #[serde(flatten)]
    event: &'a GameEvent,
}

pub struct EventJournal<W: Write> {
    out: W,
    seq: u64,
    line: Vec<u8>,
}

impl EventJournal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Open the journal named by `BLOCKFALL_LOG_PATH`, if any.
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(LOG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::open(path.trim()).map(Some),
            _ => Ok(None),
        }
    }
}

impl<W: Write> EventJournal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            line: Vec::with_capacity(256),
        }
    }

    /// Number of records written so far.
    pub fn len(&self) -> u64 {
        self.seq
    }

    pub fn is_empty(&self) -> bool {
        self.seq == 0
    }

    pub fn record(&mut self, elapsed: Duration, event: &GameEvent) -> Result<()> {
        self.seq += 1;
        let record = Record {
            seq: self.seq,
            elapsed_ms: elapsed.as_millis() as u64,
            event,
        };
        self.line.clear();
        serde_json::to_writer(&mut self.line, &record)?;
        self.line.push(b'\n');
        self.out.write_all(&self.line)?;
        Ok(())
    }

    pub fn record_all(&mut self, elapsed: Duration, events: &[GameEvent]) -> Result<()> {
        for event in events {
            self.record(elapsed, event)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
