//! Planet chronicle

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

/// Number of most recent entries written into a snapshot
pub const HISTORY_SNAPSHOT_LIMIT: usize = 50;

/// One line of the planet's chronicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "year")]
    pub age: Tick,
    #[serde(rename = "event")]
    pub text: String,
}

impl HistoryEntry {
    pub fn new(age: Tick, text: impl Into<String>) -> Self {
        Self {
            age,
            text: text.into(),
        }
    }
}

/// The trailing `HISTORY_SNAPSHOT_LIMIT` entries of a history
pub fn recent(history: &[HistoryEntry]) -> &[HistoryEntry] {
    let start = history.len().saturating_sub(HISTORY_SNAPSHOT_LIMIT);
    &history[start..]
}
