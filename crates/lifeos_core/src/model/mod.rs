//! Domain entities for the life-tracking core.
//!
//! # Responsibility
//! - Define the record types owned by the state container.
//! - Keep per-entity invariants next to the data they protect.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid`.
//! - Cross-references between collections use ids, never shared ownership.

pub mod achievement;
pub mod finance;
pub mod focus;
pub mod habit;
pub mod profile;
pub mod quote;
pub mod task;
pub mod wellness;
