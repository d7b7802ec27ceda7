//! # Identifier Generation
//!
//! Identifiers are the creation time in epoch milliseconds, bumped past the
//! previously issued value so that rapid successive creates never collide.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use super::record::RecordId;

/// Monotonic, collision-free identifier generator
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier: `max(now_millis, last + 1)`.
    pub fn next_id(&self) -> RecordId {
        let now = Utc::now().timestamp_millis();
        let issued = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            // fetch_update only fails when the closure returns None
            .map(|last| now.max(last + 1))
            .unwrap_or(now);
        RecordId::from(issued)
    }
}
