//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `chronos_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from any dashboard frontend setup.
    println!("chronos_core ping={}", chronos_core::ping());
    println!("chronos_core version={}", chronos_core::core_version());
}
