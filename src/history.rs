/// Finished-session transcript history.
///
/// Keeps the transcripts of completed recording sessions so the enclosing
/// application can show prior messages and feed recent context to its
/// reply-suggestion prompts.
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::sync::Mutex;

/// One finished session's transcript.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub text: String,
    pub completed_at: DateTime<Utc>,
}

/// In-memory record of finished sessions, oldest first.
pub struct SessionHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Record a finished transcript. Empty transcripts are not recorded.
    pub fn record(&self, text: &str) {
        if text.is_empty() {
            debug!("Skipping history record: empty transcript");
            return;
        }

        let mut entries = self.entries.lock().unwrap();
        entries.push(HistoryEntry {
            text: text.to_string(),
            completed_at: Utc::now(),
        });
        debug!("Recorded session transcript ({} chars)", text.len());
    }

    /// Snapshot of all recorded entries, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Up to the last `max_words` words across recorded sessions, for use as
    /// prompt context.
    pub fn recent_context(&self, max_words: usize) -> String {
        let entries = self.entries.lock().unwrap();
        let combined = entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        trim_to_last_words(&combined, max_words)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
        debug!("Cleared session history");
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim text to the last N words
fn trim_to_last_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        words.join(" ")
    } else {
        words[words.len() - max_words..].join(" ")
    }
}
