use slidekit::{AnimationRequest, Animator};

use crate::Tween;

/// An [`Animator`] that keeps the painted offset in a [`Tween`].
///
/// The host samples it each frame with `advance(now_ms)` and calls
/// `SliderEngine::transition_end` on the frame it returns `true`; [`crate::Controller`] does both
/// for you.
#[derive(Clone, Debug, Default)]
pub struct TweenAnimator {
    tween: Option<Tween>,
    painted: f32,
}

impl TweenAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The offset the host should paint the strip at.
    pub fn painted_offset(&self) -> f32 {
        self.painted
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Samples the tween at `now_ms`. Returns `true` on the frame the tween finishes.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        self.painted = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
            return true;
        }
        false
    }
}

impl Animator for TweenAnimator {
    fn animate_to(&mut self, request: AnimationRequest) {
        match self.tween.as_mut() {
            // Continue from where the strip is actually painted, not from the old target.
            Some(tween) => {
                tween.retarget(request.start_ms, request.to, request.duration_ms);
                tween.easing = request.easing;
            }
            None => {
                self.tween = Some(Tween::from_request(AnimationRequest {
                    from: self.painted,
                    ..request
                }));
            }
        }
    }

    fn set_immediate(&mut self, offset: f32) {
        self.tween = None;
        self.painted = offset;
    }

    fn cancel(&mut self) {
        self.tween = None;
    }

    fn reports_completion(&self) -> bool {
        true
    }
}
