//! Append-only NDJSON game log for post-mortems.
//!
//! Write-only observability: the log records claims and resets as they
//! happen and is never read back to restore a scorecard. Each event is one
//! JSON object followed by a newline.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

use crate::category::CategoryKind;

/// Game log schema version.
pub const GAME_LOG_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum GameLogError {
    #[error("game log io: {0}")]
    Io(#[from] std::io::Error),
    #[error("game log serialization: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// A category was claimed; `total` is the card total after the claim.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimEventV1 {
    pub event: &'static str,
    pub v: u32,
    pub ts_ms: u64,
    pub category: &'static str,
    pub score: u32,
    pub total: u32,
}

impl ClaimEventV1 {
    pub fn new(kind: CategoryKind, score: u32, total: u32) -> Self {
        Self {
            event: "claim",
            v: GAME_LOG_VERSION,
            ts_ms: now_ms(),
            category: kind.name(),
            score,
            total,
        }
    }
}

/// The card was reset for a new game.
#[derive(Debug, Clone, Serialize)]
pub struct ResetEventV1 {
    pub event: &'static str,
    pub v: u32,
    pub ts_ms: u64,
}

impl ResetEventV1 {
    pub fn new() -> Self {
        Self {
            event: "reset",
            v: GAME_LOG_VERSION,
            ts_ms: now_ms(),
        }
    }
}

impl Default for ResetEventV1 {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only NDJSON writer.
pub struct GameLogWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl GameLogWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, GameLogError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, GameLogError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), GameLogError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), GameLogError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorecard::ScoreCard;
    use serde_json::Value;
    use std::fs;

    fn read_ndjson(path: &Path) -> Vec<Value> {
        let s = fs::read_to_string(path).expect("read");
        s.lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("valid json line"))
            .collect()
    }

    #[test]
    fn logs_one_json_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ndjson");
        let mut w = GameLogWriter::open_append(&path).unwrap();

        let mut card = ScoreCard::new();
        for (kind, score) in [(CategoryKind::Ones, 3), (CategoryKind::Chance, 20)] {
            card.claim(kind, score);
            w.write_event(&ClaimEventV1::new(kind, score, card.total()))
                .unwrap();
        }
        card.reset();
        w.write_event(&ResetEventV1::new()).unwrap();
        w.flush().unwrap();

        let vals = read_ndjson(&path);
        assert_eq!(vals.len(), 3);
        assert_eq!(vals[0]["event"], "claim");
        assert_eq!(vals[0]["category"], "ones");
        assert_eq!(vals[0]["score"], 3);
        assert_eq!(vals[1]["category"], "chance");
        assert_eq!(vals[1]["total"], 23);
        assert_eq!(vals[2]["event"], "reset");
    }

    #[test]
    fn append_keeps_earlier_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ndjson");

        {
            let mut w = GameLogWriter::open_append(&path).unwrap();
            w.write_event(&ClaimEventV1::new(CategoryKind::Sixes, 24, 24))
                .unwrap();
            w.flush().unwrap();
        }
        {
            let mut w = GameLogWriter::open_append(&path).unwrap();
            w.write_event(&ResetEventV1::new()).unwrap();
            w.flush().unwrap();
        }

        let vals = read_ndjson(&path);
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[0]["category"], "sixes");
        assert_eq!(vals[1]["event"], "reset");
    }

    #[test]
    fn periodic_flush_writes_without_explicit_flush() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ndjson");
        let mut w = GameLogWriter::open_append_with_flush(&path, 2).unwrap();

        w.write_event(&ClaimEventV1::new(CategoryKind::Ones, 1, 1))
            .unwrap();
        w.write_event(&ClaimEventV1::new(CategoryKind::Twos, 4, 5))
            .unwrap();

        // Two lines hit the flush threshold; the file is readable now.
        let vals = read_ndjson(&path);
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[1]["total"], 5);
    }
}
