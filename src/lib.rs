//! Dosetrack — adherence aggregation & status engine.
//!
//! Turns raw per-medication intake logs into the derived facts a
//! medication-tracker UI displays: today's completion status, consecutive-day
//! streaks, monthly adherence percentage, per-patient average adherence
//! across medications, and chronologically merged history views.
//!
//! The crate talks to one external collaborator, the Medication Records
//! Service (`service::MedicationRecords`), and keeps everything else pure:
//! the calendar sets, status classifier and streak/rate calculators operate
//! only on their inputs and are independently testable. Aggregations are
//! recomputed from scratch on every call — nothing is cached across runs.

pub mod calendar;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod date_key;
pub mod models;
pub mod service;
pub mod stats;
pub mod status;
