//! Streaming transcript reconciliation for live dictation sessions.
//!
//! A recognition service reports hypotheses for the currently-spoken
//! utterance as they firm up: provisional interim fragments, then one final
//! fragment per utterance. This crate folds that out-of-order,
//! self-correcting stream into a single monotonically-growing transcript,
//! with correct whitespace, no duplicated or stale interim text, and no
//! lost finalized words, under concurrent access from the producer
//! (network callback) and consumer (session loop) threads.
//!
//! Audio capture, the recognition transport, and the UI are the embedding
//! application's concern; this crate consumes [`TranscriptFragment`]s via
//! [`SessionManager::push`] and hands back committed text through events
//! and accessors.

pub mod events;
pub mod fragment;
pub mod history;
pub mod queue;
pub mod session;
pub mod state;
pub mod text;

pub use events::{EventCallback, TranscriptEvent};
pub use fragment::TranscriptFragment;
pub use history::{HistoryEntry, SessionHistory};
pub use queue::CoalescingQueue;
pub use session::{ReconciliationEngine, SessionConfig, SessionManager, SessionRunner};
