//! Widget record models.
//!
//! # Responsibility
//! - Define the four record shapes persisted by the dashboard widgets.
//! - Keep the serialized shape compatible with existing slot contents
//!   (camelCase field names, string ids).
//!
//! # Invariants
//! - Every record carries a stable string id assigned at creation.
//! - Records are owned by exactly one widget store; no cross references.

pub mod bookmark;
pub mod habit;
pub mod record;
pub mod todo;
pub mod world_clock;
