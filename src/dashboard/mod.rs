//! Dashboard aggregation layer.
//!
//! Composes remote fetches into the derived views the UI renders: the
//! patient overview (calendar sets, today's status, streak, monthly rate),
//! the caretaker dashboard (per-patient adherence summaries) and the merged
//! history view. Every fan-out/fan-in group here is all-or-nothing: the
//! first error aborts the group, no partial result is surfaced, and retry is
//! the caller's responsibility. Between issuing a fan-out and its join no
//! shared state is touched — the computation modules are pure over their
//! inputs.

mod caretaker;
mod history;
mod patient;
mod types;

pub use caretaker::*;
pub use history::*;
pub use patient::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
