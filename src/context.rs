//! Explicit caller context for aggregation entry points.
//!
//! The engine never reads ambient session state (active role, stored user).
//! Whoever drives it passes the acting user and role into each call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role the acting user currently holds. A user can hold both roles in the
/// wider system; each call states which one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Caretaker,
}

/// Identity of the user driving an aggregation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineContext {
    pub user_id: Uuid,
    pub role: Role,
}

impl EngineContext {
    pub fn patient(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::Patient,
        }
    }

    pub fn caretaker(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::Caretaker,
        }
    }
}
