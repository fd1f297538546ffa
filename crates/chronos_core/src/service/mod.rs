//! Per-page use-case services.
//!
//! # Responsibility
//! - Own each page's collection for the page lifetime (loaded once at
//!   construction) and write every mutation through to its durable slot.
//! - Apply entry-point defaults so drafts coming from dialogs never land
//!   half-formed in storage.
//!
//! # Invariants
//! - Mutations persist synchronously before returning; a failed persist
//!   propagates while the in-memory mutation stays visible.
//! - Unknown ids and out-of-range indexes are no-ops, not errors.

pub mod calendar_service;
pub mod grades_service;
pub mod hydration_service;
pub mod pomodoro_service;
pub mod projects_service;
