//! Per-session consumer loop.
//!
//! One worker thread drains the queue through the engine at the configured
//! tick cadence. Stopping is signalled through a condvar rather than waiting
//! out the interval, so a session toggle takes effect immediately.

use anyhow::{Context, Result};
use log::debug;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use super::engine::ReconciliationEngine;

/// Wakes the worker out of its interval wait when the session is toggled
/// off.
struct StopSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            stopped: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    fn raise(&self) {
        let mut stopped = self.stopped.lock().unwrap();
        *stopped = true;
        self.condvar.notify_all();
    }
}

/// Consumer side of one recording session.
///
/// Ticks the engine until stopped; the stop path joins the worker before
/// flushing, so no tick can interleave with the final drain.
pub struct SessionRunner {
    engine: Arc<Mutex<ReconciliationEngine>>,
    signal: Arc<StopSignal>,
    worker: Option<JoinHandle<()>>,
}

impl SessionRunner {
    /// Spawn the consumer thread for an already-started engine session.
    pub fn spawn(engine: Arc<Mutex<ReconciliationEngine>>) -> Result<Self> {
        let interval = Duration::from_millis(engine.lock().unwrap().config().tick_interval_ms);
        let signal = Arc::new(StopSignal::new());

        let engine_worker = Arc::clone(&engine);
        let signal_worker = Arc::clone(&signal);
        let worker = std::thread::Builder::new()
            .name("transcript-consumer".to_string())
            .spawn(move || {
                loop {
                    engine_worker.lock().unwrap().tick();

                    let stopped = signal_worker.stopped.lock().unwrap();
                    if *stopped {
                        break;
                    }
                    let (stopped, _timeout) = signal_worker
                        .condvar
                        .wait_timeout(stopped, interval)
                        .unwrap();
                    if *stopped {
                        break;
                    }
                }
                debug!("Transcript consumer thread exiting");
            })
            .context("failed to spawn transcript consumer thread")?;

        Ok(Self {
            engine,
            signal,
            worker: Some(worker),
        })
    }

    /// Stop the worker and return the finished transcript.
    pub fn finish(mut self) -> String {
        self.join_worker();
        self.engine.lock().unwrap().end_session()
    }

    /// Stop the worker and discard the session without notifying.
    pub fn cancel(mut self) {
        self.join_worker();
        self.engine.lock().unwrap().clear();
    }

    fn join_worker(&mut self) {
        self.signal.raise();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for SessionRunner {
    fn drop(&mut self) {
        // Dropped without finish/cancel: still reap the worker thread.
        self.join_worker();
    }
}
