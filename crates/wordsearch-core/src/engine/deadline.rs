use std::time::{Duration, Instant};

/// A wall-clock budget for one generation run, polled at safe checkpoints.
///
/// Nothing is preempted: callers check [`Deadline::expired`] between units of work, so the
/// real overrun is bounded by the cost of one such unit.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}
