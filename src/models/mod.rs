//! Wire-level data model shared with the Medication Records Service.

mod intake;
mod medication;
mod patient;

pub use intake::*;
pub use medication::*;
pub use patient::*;
