//! JSONL event log.
//!
//! The terminal front end owns the screen, so diagnostics go to an optional
//! append-only file instead: one JSON object per line for every applied event,
//! every lock and the game over.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::event::GameEvent;
use crate::types::ShapeKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        rows: u16,
        cols: u16,
        tick_ms: u32,
    },
    Event {
        seq: u64,
        event: GameEvent,
        changed: bool,
    },
    Lock {
        seq: u64,
        kind: ShapeKind,
        x: i32,
        y: i32,
        lines_cleared: u32,
        score: u32,
    },
    GameOver {
        seq: u64,
        score: u32,
        lines: u32,
        pieces: u32,
    },
}

pub struct EventLog {
    out: Box<dyn Write>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Log to any writer.
    pub fn new(out: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            buf: Vec::with_capacity(256),
        }
    }

    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    pub fn record(&mut self, record: &LogRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameCommand;

    #[test]
    fn records_are_one_json_object_per_line() {
        let path = std::env::temp_dir().join(format!("blockfall-log-unit-{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let mut log = EventLog::open(&path).unwrap();
            log.record(&LogRecord::Event {
                seq: 1,
                event: GameEvent::Command(GameCommand::Rotate),
                changed: true,
            })
            .unwrap();
            log.record(&LogRecord::GameOver {
                seq: 2,
                score: 300,
                lines: 3,
                pieces: 40,
            })
            .unwrap();
        }

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"type":"event","seq":1,"event":{"command":"rotate"},"changed":true}"#
        );
        let back: LogRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(
            back,
            LogRecord::GameOver {
                seq: 2,
                score: 300,
                lines: 3,
                pieces: 40
            }
        );

        let _ = std::fs::remove_file(&path);
    }
}
