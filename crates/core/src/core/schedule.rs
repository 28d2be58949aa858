//! Cancellable repeating task, driven by an external millisecond clock.
//!
//! The browser layer feeds it `performance.now()` from an interval callback;
//! tests feed it a manual clock.

/// Browser timers can fire a little before the nominal deadline.
const EARLY_SLACK_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Running,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct RepeatingTask {
    period_ms: f64,
    next_due_ms: f64,
    state: TaskState,
    fired: u64,
}

impl RepeatingTask {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1) as f64,
            next_due_ms: 0.0,
            state: TaskState::Idle,
            fired: 0,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TaskState::Running
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start (or restart) the schedule; the first run is one period after `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.next_due_ms = now_ms + self.period_ms;
        self.state = TaskState::Running;
    }

    /// Stop permanently until `start` is called again.
    pub fn cancel(&mut self) {
        self.state = TaskState::Cancelled;
    }

    /// Whether a run is due at `now_ms`. At most one run per call: periods
    /// missed during a stall are dropped and the schedule restarts from `now_ms`.
    /// A cancelled or idle task is never due.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.state != TaskState::Running || now_ms + EARLY_SLACK_MS < self.next_due_ms {
            return false;
        }
        let next = self.next_due_ms + self.period_ms;
        self.next_due_ms = if next <= now_ms {
            now_ms + self.period_ms
        } else {
            next
        };
        self.fired += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut t = RepeatingTask::new(10_000);
        t.start(0.0);
        assert!(!t.poll(9_900.0));
        assert!(t.poll(10_000.0));
        assert!(!t.poll(10_001.0));
        assert!(t.poll(20_000.0));
        assert_eq!(t.fired(), 2);
    }

    #[test]
    fn tolerates_slightly_early_timers() {
        let mut t = RepeatingTask::new(10_000);
        t.start(0.0);
        assert!(t.poll(9_995.0));
        // Schedule stays anchored to the nominal deadline.
        assert!(t.poll(19_990.0));
        assert!(!t.poll(29_000.0));
    }

    #[test]
    fn stall_drops_missed_periods() {
        let mut t = RepeatingTask::new(100);
        t.start(0.0);
        assert!(t.poll(350.0));
        assert_eq!(t.fired(), 1);
        assert!(!t.poll(380.0));
        assert!(!t.poll(400.0));
        assert!(t.poll(450.0));
        assert_eq!(t.fired(), 2);
    }

    #[test]
    fn huge_gap_with_tiny_period_is_one_run() {
        let mut t = RepeatingTask::new(1);
        t.start(0.0);
        assert!(t.poll(5.0e9));
        assert_eq!(t.fired(), 1);
        assert!(!t.poll(5.0e9 - 20.0));
        assert!(t.poll(5.0e9 + 1.0));
    }

    #[test]
    fn idle_and_cancelled_never_fire() {
        let mut t = RepeatingTask::new(100);
        assert!(!t.poll(1_000.0));

        t.start(0.0);
        t.cancel();
        assert_eq!(t.state(), TaskState::Cancelled);
        assert!(!t.poll(10_000.0));

        t.start(10_000.0);
        assert!(t.is_running());
        assert!(t.poll(10_100.0));
    }
}
