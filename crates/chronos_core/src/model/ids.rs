//! Millisecond-derived numeric id generation.
//!
//! # Responsibility
//! - Generate unique numeric ids for subject/project records, which carry
//!   epoch-millisecond ids on the wire.
//!
//! # Invariants
//! - Returned ids are strictly increasing within a process, so two saves in
//!   the same millisecond can never collide.

use chrono::Utc;

/// Monotonic id source seeded from the wall clock.
#[derive(Debug, Default)]
pub struct MillisIdGenerator {
    last: i64,
}

impl MillisIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique id: the current epoch millis, bumped past any id handed
    /// out earlier in this process.
    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::MillisIdGenerator;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = MillisIdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }
}
