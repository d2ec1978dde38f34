use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::equity::Outcome;
use crate::hand::HandStrength;

/// Betting round of a dealt hand, named after how much of the board is out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn all() -> [Street; 4] {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River]
    }

    /// Number of community cards visible on this street.
    pub fn community_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "Pre-Flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

/// Equity estimate shown to the player on one street.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreetEquity {
    pub street: Street,
    /// Win-or-tie probability in [0, 1]
    pub equity: f64,
}

/// Complete record of one played hand, serialized as a JSON line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `YYYYMMDD-NNNNNN`, see [`format_hand_id`]
    pub hand_id: String,
    /// Generator seed the deck was shuffled with
    pub seed: Option<u64>,
    pub opponents: usize,
    pub hero: Vec<Card>,
    /// Opponent hole cards, revealed only when the hand reached showdown
    #[serde(default)]
    pub opponent_holes: Vec<Vec<Card>>,
    /// Board cards hero saw before the hand ended
    pub board: Vec<Card>,
    pub equities: Vec<StreetEquity>,
    /// Street on which hero folded, if any
    #[serde(default)]
    pub folded_on: Option<Street>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// RFC3339, filled in by [`HandLogger::append`] when absent
    #[serde(default)]
    pub ts: Option<String>,
}

/// Result of the final comparison when the hand reaches showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub outcome: Outcome,
    pub hero_strength: HandStrength,
    /// Opponents holding a strictly better hand
    pub beaten_by: usize,
    /// Opponents holding an identical hand
    pub tied_with: usize,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSONL file and hands out per-day ids.
pub struct HandLogger {
    sink: Option<BufWriter<File>>,
    day: String,
    last_seq: u32,
}

impl HandLogger {
    /// Opens `path` for appending, creating missing parent directories.
    /// Numbering continues after the ids already stored for today.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_dir_all(dir)?;
        }
        let day = Utc::now().format("%Y%m%d").to_string();
        let last_seq = ids_logged_on(path, &day)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Some(BufWriter::new(file)),
            day,
            last_seq,
        })
    }

    /// Logger that only numbers hands; `append` serializes and discards.
    pub fn detached(day: &str) -> Self {
        Self {
            sink: None,
            day: day.to_string(),
            last_seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.last_seq += 1;
        format_hand_id(&self.day, self.last_seq)
    }

    pub fn append(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let line = match record.ts {
            Some(_) => serde_json::to_string(record),
            None => {
                let stamped = HandRecord {
                    ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                    ..record.clone()
                };
                serde_json::to_string(&stamped)
            }
        }
        .map_err(std::io::Error::other)?;
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", line)?;
            sink.flush()?;
        }
        Ok(())
    }
}

/// Number of lines in `path` whose hand id carries the `day` prefix.
fn ids_logged_on(path: &Path, day: &str) -> std::io::Result<u32> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let needle = format!("\"hand_id\":\"{}-", day);
    let mut count = 0;
    for line in BufReader::new(file).lines() {
        if line?.contains(&needle) {
            count += 1;
        }
    }
    Ok(count)
}
