use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tags for in-flight fetches: the last-issued request wins, a
/// response whose tag is no longer current is discarded on arrival.
///
/// Debounce only reduces request volume; this is the ordering mechanism.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new outgoing request, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `seq` is still the most recently issued tag.
    pub fn is_current(&self, seq: u64) -> bool {
        self.next.load(Ordering::SeqCst) == seq
    }
}
