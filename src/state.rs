use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle state for a recording session.
///
/// Both entry points (the recording toggle and programmatic stop) check this
/// before starting or stopping to prevent races where a new session begins
/// while the previous stop path is still flushing pending finals.
pub struct SessionState(AtomicU8);

impl SessionState {
    pub const IDLE: u8 = 0;
    pub const RECORDING: u8 = 1;
    pub const STOPPING: u8 = 2;

    pub fn new() -> Self {
        Self(AtomicU8::new(Self::IDLE))
    }

    /// Try to transition Idle → Recording. Returns false if not idle.
    pub fn try_start(&self) -> bool {
        self.0
            .compare_exchange(
                Self::IDLE,
                Self::RECORDING,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Try to transition Recording → Stopping. Returns false if not recording.
    pub fn try_stop(&self) -> bool {
        self.0
            .compare_exchange(
                Self::RECORDING,
                Self::STOPPING,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Reset to Idle from any state. Called once the stop path has flushed.
    pub fn reset(&self) {
        self.0.store(Self::IDLE, Ordering::SeqCst);
    }

    pub fn current(&self) -> u8 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_recording(&self) -> bool {
        self.current() == Self::RECORDING
    }
}
