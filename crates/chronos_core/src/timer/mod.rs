//! Pomodoro timing: countdown state machine and focus statistics.
//!
//! # Responsibility
//! - Drive the focus/break countdown one second at a time.
//! - Roll focus seconds into calendar-period buckets.
//!
//! # Invariants
//! - At most one countdown is in flight; mode switches and pauses always
//!   cancel it before touching state the tick reads.
//! - Bucket resets happen before new seconds are added, never after.

pub mod engine;
pub mod stats;
