use serde::{Deserialize, Serialize};

use crate::betting::{Action, Seat, NUM_SEATS};
use crate::cards::Rank;

/// Records a single action applied to the automaton, with its meaning
/// resolved against the betting context at the time it was taken.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted (0, 1, or 2)
    pub seat: Seat,
    /// The raw action (passive or aggressive)
    pub action: Action,
    /// Context-resolved name: "check", "bet", "call", or "fold"
    pub meaning: String,
}

impl ActionRecord {
    pub fn new(seat: Seat, action: Action, facing_bet: bool) -> Self {
        Self {
            seat,
            action,
            meaning: action.label(facing_bet).to_string(),
        }
    }
}

/// Complete record of one hand, serialized to JSONL for hand-history
/// storage and replay. Hand histories are logs, so all three ranks
/// appear here even when a seat never revealed at the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Deck seed, when the caller ran a seeded simulation
    pub seed: Option<u64>,
    /// Ranks dealt to seats 0, 1, 2
    pub ranks: [Rank; NUM_SEATS],
    /// Chronological list of all actions, forced ones included
    pub actions: Vec<ActionRecord>,
    /// Id of the terminal state the hand stopped at
    pub final_state: u8,
    /// Per-seat deltas; always sum to zero
    pub deltas: [i64; NUM_SEATS],
    /// Winning seat
    pub winner: Seat,
    /// Human-readable outcome summary
    pub result: Option<String>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Seat that forfeited a turn, if any
    #[serde(default)]
    pub forfeit: Option<Seat>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one [`HandRecord`] per line and assigns date-sequenced ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

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
