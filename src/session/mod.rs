//! Recording-session module: the consumer half of the pipeline.
//!
//! Fragments flow one way, producer to consumer:
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐     ┌──────────────────────┐
//! │ Fragment Source  │────▶│ CoalescingQueue │────▶│ ReconciliationEngine │
//! │ (recognition     │push │ (one interim,   │drain│ (committed transcript│
//! │  callback)       │     │  tail-coalesced)│     │  + live preview)     │
//! └──────────────────┘     └─────────────────┘     └──────────────────────┘
//!                                                             │
//!                                  ticked by SessionRunner    ▼
//!                                  owned by SessionManager   events
//! ```
//!
//! The [`SessionManager`] is the session object handed to both call sites:
//! the recognition handler pushes into it, the recording toggle starts and
//! stops it.

mod engine;
mod manager;
mod runner;

pub use engine::{ReconciliationEngine, SessionConfig};
pub use manager::SessionManager;
pub use runner::SessionRunner;
