/// A host-clock interval timer that asks the engine to advance.
///
/// The scheduler owns no OS timer: the "handle" is the armed deadline, and the host's
/// `SliderEngine::tick(now_ms)` polls it. Releasing the handle (`stop`) is therefore
/// synchronous and infallible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayScheduler {
    interval_ms: u64,
    due_ms: Option<u64>,
    paused: bool,
    reset_pending: bool,
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer; the first tick fires a full interval after `now_ms`.
    pub fn start(&mut self, interval_ms: u64, now_ms: u64) {
        self.interval_ms = interval_ms.max(1);
        self.paused = false;
        self.reset_pending = false;
        self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Suspends firing (drag or transition in progress).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Ends a suspension and restarts the interval from `now_ms`.
    pub fn resume(&mut self, now_ms: u64) {
        if self.due_ms.is_none() {
            return;
        }
        self.paused = false;
        self.reset(now_ms);
    }

    /// Pushes the next tick a full interval away from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        if self.due_ms.is_some() {
            self.reset_pending = false;
            self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
        }
    }

    /// Like `reset`, for callers without a clock: the interval restarts at the next `poll`.
    pub fn defer_reset(&mut self) {
        if self.due_ms.is_some() {
            self.reset_pending = true;
        }
    }

    /// Releases the timer.
    pub fn stop(&mut self) {
        self.due_ms = None;
        self.paused = false;
        self.reset_pending = false;
    }

    pub fn is_running(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Returns `true` when a tick is due, re-arming the next one.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.due_ms else {
            return false;
        };
        if self.reset_pending {
            self.reset(now_ms);
            return false;
        }
        if self.paused || now_ms < due {
            return false;
        }
        self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
        true
    }
}
