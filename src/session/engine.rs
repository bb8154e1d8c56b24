//! Reconciliation engine.
//!
//! Folds drained fragments into the committed transcript and derives the
//! live display string, notifying the collaborator as each changes.

use log::{debug, info};
use std::sync::Arc;

use crate::events::{EventCallback, TranscriptEvent};
use crate::queue::CoalescingQueue;
use crate::text::{join_with_space, push_with_space};

/// Configuration for a reconciliation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Consumer tick cadence in milliseconds.
    pub tick_interval_ms: u64,
    /// Suppress a preview whose trimmed text matches the last one shown.
    /// Off by default: every interim is worth previewing, and the committed
    /// transcript is unaffected either way.
    pub dedupe_previews: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            dedupe_previews: false,
        }
    }
}

/// Owns the committed transcript for the current recording session.
///
/// Final fragments are merged permanently, in arrival order, with correct
/// inter-fragment spacing; interim fragments only ever influence the derived
/// display string. The engine performs no I/O and has no failure modes of
/// its own; malformed input is filtered at the queue boundary.
pub struct ReconciliationEngine {
    queue: Arc<CoalescingQueue>,
    committed: String,
    /// Interim text behind the last emitted preview, for optional dedupe.
    last_preview: Option<String>,
    config: SessionConfig,
    callback: Option<EventCallback>,
}

impl ReconciliationEngine {
    pub fn new(queue: Arc<CoalescingQueue>, config: SessionConfig) -> Self {
        Self {
            queue,
            committed: String::new(),
            last_preview: None,
            config,
            callback: None,
        }
    }

    /// Register the outbound event callback, replacing any previous one.
    pub fn set_event_callback(&mut self, callback: EventCallback) {
        self.callback = Some(callback);
    }

    pub fn clear_event_callback(&mut self) {
        self.callback = None;
    }

    fn emit(&self, event: TranscriptEvent) {
        if let Some(callback) = &self.callback {
            callback(&event);
        }
    }

    /// Drain confirmed text into the committed transcript, then surface the
    /// pending interim as a preview, if one is buffered.
    pub fn tick(&mut self) {
        let finals = self.queue.drain_finals();
        if !finals.is_empty() {
            for text in &finals {
                push_with_space(&mut self.committed, text);
            }
            debug!(
                "Merged {} final fragment(s); transcript is now {} chars",
                finals.len(),
                self.committed.len()
            );
            // The committed prefix changed, so the next preview is fresh
            // even if its interim text repeats.
            self.last_preview = None;
            self.emit(TranscriptEvent::Committed {
                text: self.committed.clone(),
            });
        }

        if let Some(interim) = self.queue.peek_interim() {
            if self.config.dedupe_previews
                && self.last_preview.as_deref().map(str::trim) == Some(interim.trim())
            {
                return;
            }
            let preview = join_with_space(&self.committed, &interim);
            self.last_preview = Some(interim);
            self.emit(TranscriptEvent::Preview { text: preview });
        }
    }

    /// Reset transcript state for a new recording session.
    pub fn start_session(&mut self) {
        self.committed.clear();
        self.last_preview = None;
        self.queue.clear();
        info!("Transcription session started");
        self.emit(TranscriptEvent::Started);
    }

    /// Flush any still-pending finals, return the finished transcript, and
    /// leave the engine ready for reuse. A pending interim is provisional by
    /// definition and is discarded.
    pub fn end_session(&mut self) -> String {
        for text in self.queue.drain_finals() {
            push_with_space(&mut self.committed, &text);
        }
        self.queue.clear();
        self.last_preview = None;

        let final_text = std::mem::take(&mut self.committed);
        info!("Transcription session ended ({} chars)", final_text.len());
        self.emit(TranscriptEvent::Ended {
            final_text: final_text.clone(),
        });
        final_text
    }

    /// Reset transcript and queue without emitting anything.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.last_preview = None;
        self.queue.clear();
    }

    /// Ground truth of everything confirmed so far this session.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Committed text plus the pending interim, recomputed on demand.
    pub fn display_string(&self) -> String {
        match self.queue.peek_interim() {
            Some(interim) => join_with_space(&self.committed, &interim),
            None => self.committed.clone(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
