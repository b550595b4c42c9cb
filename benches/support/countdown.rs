use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out exactly `total` tickets across any number of threads.
pub struct Countdown {
    left: AtomicU64,
    total: u64,
}

impl Countdown {
    pub fn new(total: u64) -> Self {
        Countdown {
            left: AtomicU64::new(total),
            total,
        }
    }

    /// Takes one ticket, returning `false` once all are gone.
    pub fn take(&self) -> bool {
        // exhausted callers wrap the counter past `total`
        let prev = self.left.fetch_sub(1, Ordering::AcqRel);
        prev != 0 && prev <= self.total
    }
}
