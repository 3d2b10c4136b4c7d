//! JSONL hand history: one record per finished hand.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::seat::{Action, SeatId};
use crate::state::{Payout, RevealedHand, Stage};

/// One accepted action, tagged with the seat that took it and the
/// betting street it landed on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: SeatId,
    /// Stage the table was in when the action was accepted
    pub stage: Stage,
    pub action: Action,
}

/// Complete record of one hand, serialized as a JSONL line for hand
/// history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Position of the hand within its table session, starting at 1
    pub hand_no: u64,
    /// RNG seed the session was created with, when reproducible
    pub seed: Option<u64>,
    /// Chronological list of accepted actions
    pub actions: Vec<ActionRecord>,
    /// Community cards dealt before the hand ended (up to 5)
    pub board: Vec<Card>,
    /// Chips paid out at settlement
    pub payouts: Vec<Payout>,
    /// Hands revealed at showdown; absent for uncontested wins
    #[serde(default)]
    pub showdown: Option<Vec<RevealedHand>>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file and hands out sequential
/// hand ids for the current UTC date.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that assigns ids from a fixed date and writes nothing.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
