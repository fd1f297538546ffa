//! Domain models for the dashboard's feature areas.
//!
//! # Responsibility
//! - Define the JSON wire shapes stored in durable slots.
//! - Keep every shape backward-readable: absent fields decode to their
//!   documented defaults instead of failing the load.
//!
//! # Invariants
//! - Entity ids are unique within their collection and never reused.
//! - Each record belongs to exactly one collection.

pub mod event;
pub mod grades;
pub mod hydration;
pub mod ids;
pub mod pomodoro;
pub mod project;
