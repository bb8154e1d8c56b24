//! Outbound notification surface.
//!
//! The engine reports transcript changes through a registered callback; the
//! enclosing application decides how to deliver them (widget update, window
//! event, message send). With no callback registered, events are dropped;
//! the pull accessors on the engine still work.

use serde::Serialize;

/// Events emitted as the committed transcript and live preview evolve.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum TranscriptEvent {
    /// A recording session began; transcript state was reset.
    Started,
    /// One or more finals were merged; carries the full committed transcript.
    Committed { text: String },
    /// A pending interim was observed; carries committed text plus the
    /// interim tail. Preview only; nothing was committed.
    Preview { text: String },
    /// The session ended; carries the finished transcript.
    Ended { final_text: String },
}

/// Callback invoked for each event, on whichever thread drives the engine.
/// Implementations should return quickly; the engine holds its lock while
/// notifying.
pub type EventCallback = Box<dyn Fn(&TranscriptEvent) + Send>;
