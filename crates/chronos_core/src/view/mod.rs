//! Pure view projections.
//!
//! # Responsibility
//! - Derive per-widget render models from the current collections.
//!
//! # Invariants
//! - Projections never mutate collections and hold no state of their own;
//!   every call recomputes from scratch.

pub mod analytics;
pub mod calendar_feed;
pub mod grades;
pub mod kanban;
pub mod todo;
