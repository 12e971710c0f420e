use std::time::{Duration, Instant};

/// Wall-clock budget for one search, polled cooperatively.
///
/// Nothing interrupts a running branch; the search checks `is_expired` when it
/// enters a node and after each root candidate.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    started_at: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn start(budget: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            budget,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.budget
    }
}
