//! Session manager.
//!
//! The explicit session object: owns the fragment queue, the reconciliation
//! engine, and the per-session consumer runner, and exposes the narrow
//! surface the two collaborators need: `push` for the recognition-result
//! handler, start/stop for the recording toggle.

use anyhow::Result;
use log::{debug, info};
use std::sync::{Arc, Mutex};

use super::engine::{ReconciliationEngine, SessionConfig};
use super::runner::SessionRunner;
use crate::events::EventCallback;
use crate::fragment::TranscriptFragment;
use crate::history::SessionHistory;
use crate::queue::CoalescingQueue;
use crate::state::SessionState;

pub struct SessionManager {
    queue: Arc<CoalescingQueue>,
    engine: Arc<Mutex<ReconciliationEngine>>,
    runner: Mutex<Option<SessionRunner>>,
    state: SessionState,
    history: SessionHistory,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        let queue = Arc::new(CoalescingQueue::new());
        let engine = Arc::new(Mutex::new(ReconciliationEngine::new(
            Arc::clone(&queue),
            config,
        )));

        Self {
            queue,
            engine,
            runner: Mutex::new(None),
            state: SessionState::new(),
            history: SessionHistory::new(),
        }
    }

    /// Inbound interface for the recognition-result handler. Safe to call
    /// at any time from the producer context; fragments pushed while no
    /// session is active are cleared by the next `start_session`.
    pub fn push(&self, fragment: TranscriptFragment) {
        self.queue.push(fragment);
    }

    /// Register the outbound event callback, replacing any previous one.
    pub fn set_event_callback(&self, callback: EventCallback) {
        self.engine.lock().unwrap().set_event_callback(callback);
    }

    pub fn clear_event_callback(&self) {
        self.engine.lock().unwrap().clear_event_callback();
    }

    /// Begin a recording session. Returns `Ok(false)` if one is already
    /// active; `Err` only if the consumer thread cannot be spawned.
    pub fn start_session(&self) -> Result<bool> {
        if !self.state.try_start() {
            debug!("Session already active, not starting");
            return Ok(false);
        }

        self.engine.lock().unwrap().start_session();

        match SessionRunner::spawn(Arc::clone(&self.engine)) {
            Ok(runner) => {
                *self.runner.lock().unwrap() = Some(runner);
                info!("Recording session started");
                Ok(true)
            }
            Err(e) => {
                self.state.reset();
                Err(e)
            }
        }
    }

    /// End the active session and return the finished transcript, recording
    /// it into history. Returns `None` if no session was active.
    pub fn end_session(&self) -> Option<String> {
        if !self.state.try_stop() {
            debug!("No active session to end");
            return None;
        }

        let runner = self.runner.lock().unwrap().take();
        let final_text = runner.map(|runner| runner.finish());
        self.state.reset();

        final_text.map(|text| {
            self.history.record(&text);
            info!("Recording session ended ({} chars)", text.len());
            text
        })
    }

    /// Abort the active session, discarding its transcript.
    pub fn cancel_session(&self) {
        if !self.state.try_stop() {
            return;
        }

        if let Some(runner) = self.runner.lock().unwrap().take() {
            runner.cancel();
            info!("Recording session cancelled");
        }
        self.state.reset();
    }

    /// Reset transcript and queue without emitting anything. For
    /// collaborators that want a clean slate outside the session lifecycle;
    /// the start/end paths do their own clearing.
    pub fn clear(&self) {
        self.engine.lock().unwrap().clear();
    }

    pub fn is_session_active(&self) -> bool {
        self.state.is_recording()
    }

    /// Ground truth committed so far this session.
    pub fn current_transcript(&self) -> String {
        self.engine.lock().unwrap().committed().to_string()
    }

    /// Committed text plus the pending interim, recomputed on demand.
    pub fn display_string(&self) -> String {
        self.engine.lock().unwrap().display_string()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    fn fast_manager() -> SessionManager {
        SessionManager::new(SessionConfig {
            tick_interval_ms: 2,
            ..SessionConfig::default()
        })
    }

    #[test]
    fn test_session_lifecycle() {
        let manager = fast_manager();
        assert!(!manager.is_session_active());

        assert!(manager.start_session().unwrap());
        assert!(manager.is_session_active());

        // Re-entrant start is refused.
        assert!(!manager.start_session().unwrap());

        manager.push(TranscriptFragment::final_result("hello"));
        manager.push(TranscriptFragment::final_result("world"));

        let final_text = manager.end_session().unwrap();
        assert_eq!(final_text, "hello world");
        assert!(!manager.is_session_active());

        // Stop without a session yields nothing.
        assert_eq!(manager.end_session(), None);
    }

    #[test]
    fn test_finished_transcript_recorded_in_history() {
        let manager = fast_manager();
        manager.start_session().unwrap();
        manager.push(TranscriptFragment::final_result("for the record"));
        manager.end_session().unwrap();

        let entries = manager.history().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "for the record");
    }

    #[test]
    fn test_cancel_session_records_nothing() {
        let manager = fast_manager();
        manager.start_session().unwrap();
        manager.push(TranscriptFragment::final_result("discarded"));
        manager.cancel_session();

        assert!(!manager.is_session_active());
        assert!(manager.history().is_empty());
        assert_eq!(manager.current_transcript(), "");
    }

    #[test]
    fn test_push_while_idle_cleared_on_start() {
        let manager = fast_manager();
        manager.push(TranscriptFragment::final_result("leftover"));

        manager.start_session().unwrap();
        manager.push(TranscriptFragment::final_result("fresh"));

        assert_eq!(manager.end_session().unwrap(), "fresh");
    }

    #[test]
    fn test_fresh_session_after_end() {
        let manager = fast_manager();

        manager.start_session().unwrap();
        manager.push(TranscriptFragment::final_result("first"));
        manager.push(TranscriptFragment::interim("pending"));
        assert_eq!(manager.end_session().unwrap(), "first");

        manager.start_session().unwrap();
        assert_eq!(manager.current_transcript(), "");
        assert_eq!(manager.display_string(), "");
        assert_eq!(manager.end_session().unwrap(), "");
    }

    #[test]
    fn test_producer_consumer_stress() {
        let manager = Arc::new(fast_manager());
        let (events_tx, events_rx) = mpsc::channel();
        manager.set_event_callback(Box::new(move |event| {
            let _ = events_tx.send(event.clone());
        }));

        manager.start_session().unwrap();

        let producer_manager = Arc::clone(&manager);
        let producer = thread::spawn(move || {
            for utterance in 0..200 {
                producer_manager.push(TranscriptFragment::interim(format!(
                    "guess{}",
                    utterance
                )));
                producer_manager.push(TranscriptFragment::interim(format!(
                    "guess{} more",
                    utterance
                )));
                producer_manager.push(TranscriptFragment::final_result(format!(
                    "u{}",
                    utterance
                )));
                if utterance % 16 == 0 {
                    thread::yield_now();
                }
            }
        });

        producer.join().unwrap();
        let final_text = manager.end_session().unwrap();

        // Every final survives, in order, with no interim text committed.
        let expected = (0..200)
            .map(|u| format!("u{}", u))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(final_text, expected);

        for event in events_rx.try_iter() {
            if let crate::events::TranscriptEvent::Committed { text } = event {
                assert!(!text.contains("guess"), "interim text was committed: {}", text);
            }
        }
    }
}
