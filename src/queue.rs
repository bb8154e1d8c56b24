//! Producer/consumer buffer for recognition fragments.
//!
//! The recognition-result handler pushes fragments as they arrive; the
//! session consumer drains confirmed text on its own cadence. Coalescing on
//! push keeps stale hypotheses from accumulating: the queue never holds more
//! than one interim fragment, and it always sits at the tail behind any
//! not-yet-consumed finals.

use log::debug;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::fragment::TranscriptFragment;

/// Mutex-guarded fragment buffer shared between the recognition callback
/// and the session consumer. Every operation is one bounded critical
/// section, so neither side can observe a partially-updated tail.
pub struct CoalescingQueue {
    inner: Mutex<VecDeque<TranscriptFragment>>,
}

impl CoalescingQueue {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    /// Buffer one fragment, coalescing against the current tail.
    ///
    /// Empty hypotheses carry no information and are dropped. A fragment of
    /// either kind displaces an interim tail: only the newest interim guess
    /// is worth keeping, and a final supersedes the last interim guess for
    /// its utterance.
    pub fn push(&self, fragment: TranscriptFragment) {
        if fragment.text.is_empty() {
            return;
        }

        let mut queue = self.inner.lock().unwrap();
        if queue.back().map_or(false, |tail| !tail.is_final) {
            if let Some(superseded) = queue.pop_back() {
                debug!("Superseding interim hypothesis: '{}'", superseded.text);
            }
        }

        if fragment.is_final {
            debug!("Buffered final fragment: '{}'", fragment.text);
        } else {
            debug!("Buffered interim fragment: '{}'", fragment.text);
        }
        queue.push_back(fragment);
    }

    /// Remove and return every confirmed fragment at the head, in arrival
    /// order, stopping at the first interim (which stays put).
    pub fn drain_finals(&self) -> Vec<String> {
        let mut queue = self.inner.lock().unwrap();
        let mut finals = Vec::new();
        while queue.front().map_or(false, |front| front.is_final) {
            if let Some(front) = queue.pop_front() {
                finals.push(front.text);
            }
        }
        finals
    }

    /// The pending interim hypothesis, if one is buffered. Never mutates.
    pub fn peek_interim(&self) -> Option<String> {
        let queue = self.inner.lock().unwrap();
        queue
            .back()
            .filter(|tail| !tail.is_final)
            .map(|tail| tail.text.clone())
    }

    /// Empty the queue. Called at session boundaries.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

impl Default for CoalescingQueue {
    fn default() -> Self {
        Self::new()
    }
}
