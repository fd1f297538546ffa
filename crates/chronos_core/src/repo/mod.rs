//! Repository layer: durable slot access contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the key-value slot contract every service persists through.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Reads of absent or malformed slots recover to the payload default and
//!   never fail the caller.
//! - Write failures propagate to the mutating caller unmodified.

pub mod slot_repo;
