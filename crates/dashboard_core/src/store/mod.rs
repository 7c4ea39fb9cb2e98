//! Ordered record persistence shared by every widget.
//!
//! # Responsibility
//! - Load a typed record list from one persistent slot, failing soft.
//! - Write the full list back after every mutation.
//! - Provide pure list rules (adjacent reordering) reused by widget services.
//!
//! # Invariants
//! - In-memory state only changes after the write for that mutation succeeded.
//! - Malformed slot contents are treated as "no data", never as a fatal error.

pub mod record_store;
pub mod reorder;
