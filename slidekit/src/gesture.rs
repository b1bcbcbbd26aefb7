/// A release that arrives this long after the last movement is treated as a hold, not a flick.
const STALE_RELEASE_MS: u64 = 100;

/// Bookkeeping for one pointer-down..pointer-up sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_position: f32,
    pub last_position: f32,
    pub last_sample_ms: u64,
    /// Last-sample velocity estimate in px/ms (negative = towards the next slide).
    pub velocity: f32,
    /// Translate offset of the strip when the drag began.
    pub origin_offset: f32,
}

impl DragSession {
    fn new(position: f32, time_ms: u64, origin_offset: f32) -> Self {
        Self {
            start_position: position,
            last_position: position,
            last_sample_ms: time_ms,
            velocity: 0.0,
            origin_offset,
        }
    }

    /// Net displacement since `begin`.
    pub fn delta(&self) -> f32 {
        self.last_position - self.start_position
    }

    fn sample(&mut self, position: f32, time_ms: u64) {
        let dt = time_ms.saturating_sub(self.last_sample_ms).max(1);
        self.velocity = (position - self.last_position) / dt as f32;
        self.last_position = position;
        self.last_sample_ms = time_ms;
    }
}

/// What a finished drag hands to the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub delta: f32,
    pub velocity: f32,
}

/// Turns raw pointer samples into drag deltas and a release velocity.
///
/// Velocity comes from the two most recent samples only, so the value at `end` reflects the
/// final flick rather than the average over the whole gesture. Samples must be fed in arrival
/// order.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    session: Option<DragSession>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Opens a session. Any previous session is discarded.
    pub fn begin(&mut self, position: f32, time_ms: u64, origin_offset: f32) {
        self.session = Some(DragSession::new(position, time_ms, origin_offset));
    }

    /// Records a sample and returns the net displacement since `begin`.
    ///
    /// Returns `None` when no session is open.
    pub fn move_to(&mut self, position: f32, time_ms: u64) -> Option<f32> {
        let session = self.session.as_mut()?;
        if !position.is_finite() {
            swarn!(position, "GestureTracker: ignoring non-finite sample");
            return Some(session.delta());
        }
        session.sample(position, time_ms);
        Some(session.delta())
    }

    /// Closes the session with a final sample.
    ///
    /// A final sample at the last position keeps the previous velocity estimate unless the
    /// pointer rested for longer than a flick allows.
    pub fn end(&mut self, position: f32, time_ms: u64) -> Option<Release> {
        let mut session = self.session.take()?;
        if position.is_finite() && position != session.last_position {
            session.sample(position, time_ms);
        } else if time_ms.saturating_sub(session.last_sample_ms) > STALE_RELEASE_MS {
            session.velocity = 0.0;
        }
        Some(Release {
            delta: session.delta(),
            velocity: session.velocity,
        })
    }

    /// Closes the session at its last recorded position.
    pub fn leave(&mut self, time_ms: u64) -> Option<Release> {
        let position = self.session.as_ref()?.last_position;
        self.end(position, time_ms)
    }

    /// Drops the session without producing a release.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
