/// Easing curves for animated transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Cubic ease-out: fast start, gentle landing.
    #[default]
    EaseOut,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `0..=1` to eased progress.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// A request to move the visual strip from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

/// The rendering capability the engine drives.
///
/// The engine never touches UI objects. It tells the animator where the strip should be and
/// whether to ease there; the host reports completion back through
/// `SliderEngine::transition_end`. Animators without a completion signal leave
/// [`Animator::reports_completion`] at `false` and `SliderEngine::tick` settles the transition
/// once its duration has elapsed.
pub trait Animator {
    /// Starts an eased move. Replaces any animation in flight.
    fn animate_to(&mut self, request: AnimationRequest);

    /// Places the strip at `offset` with no transition (live drag, silent loop snap).
    fn set_immediate(&mut self, offset: f32);

    /// Drops an in-flight animation without reporting completion.
    fn cancel(&mut self) {}

    /// Whether the host calls `SliderEngine::transition_end` when an animation finishes.
    ///
    /// When `false`, `SliderEngine::tick` settles transitions once their duration has elapsed.
    fn reports_completion(&self) -> bool {
        false
    }
}

/// A no-op animator for hosts that read `SliderEngine::offset` every frame.
impl Animator for () {
    fn animate_to(&mut self, _request: AnimationRequest) {}

    fn set_immediate(&mut self, _offset: f32) {}
}
