use slidekit::{IndexChange, Phase, PointerEvent, SliderEngine, SliderOptions, VisibleSlide};

use crate::{SlideAnchor, SlideKey, TweenAnimator, apply_anchor, capture_current_anchor};

/// A framework-neutral controller that wraps a `slidekit::SliderEngine` with a tween animator.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer` / `on_viewport_width` / `measure` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (tween sampling, transition completion, autoplay)
///
/// `tick` returns the offset to paint the strip at; `for_each_visible_slide` lists the slides to
/// paint at that offset.
#[derive(Debug)]
pub struct Controller {
    engine: SliderEngine<TweenAnimator>,
}

impl Controller {
    pub fn new(options: SliderOptions) -> Self {
        Self {
            engine: SliderEngine::new(options, TweenAnimator::new()),
        }
    }

    pub fn from_engine(engine: SliderEngine<TweenAnimator>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SliderEngine<TweenAnimator> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SliderEngine<TweenAnimator> {
        &mut self.engine
    }

    pub fn into_engine(self) -> SliderEngine<TweenAnimator> {
        self.engine
    }

    pub fn index(&self) -> usize {
        self.engine.index()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.engine.animator().is_animating()
    }

    /// The offset the strip is currently painted at.
    pub fn painted_offset(&self) -> f32 {
        self.engine.animator().painted_offset()
    }

    pub fn set_on_index_change(
        &mut self,
        on_index_change: Option<impl Fn(IndexChange) + Send + Sync + 'static>,
    ) {
        self.engine.set_on_index_change(on_index_change);
    }

    /// Advances the controller and returns the offset to paint.
    ///
    /// - Samples the active tween.
    /// - Reports transition completion to the engine once the tween finishes (or was replaced by
    ///   an immediate placement, e.g. a resize mid-transition).
    /// - Runs the engine's timers (autoplay).
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let finished = self.engine.animator_mut().advance(now_ms);
        if self.engine.phase() == Phase::Transitioning
            && (finished || !self.engine.animator().is_animating())
        {
            atrace!(now_ms, "tween finished");
            self.engine.transition_end(now_ms);
        }
        self.engine.tick(now_ms);
        self.painted_offset()
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.engine.next(now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.engine.prev(now_ms)
    }

    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        self.engine.go_to(index, now_ms)
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.engine.jump_to(index)
    }

    /// Call this for every pointer/touch sample, in arrival order.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        self.engine.handle_pointer(event)
    }

    pub fn on_viewport_width(&mut self, viewport_width: f32) {
        self.engine.handle_resize(viewport_width);
    }

    pub fn measure(&mut self, index: usize, width: f32) {
        self.engine.measure(index, width);
    }

    /// Lists the slides to paint at the painted (not target) offset.
    pub fn for_each_visible_slide(&self, f: impl FnMut(VisibleSlide)) {
        self.engine.for_each_slide_at(self.painted_offset(), f);
    }

    pub fn capture_current_anchor<K: SlideKey>(
        &self,
        key_for: impl FnOnce(usize) -> K,
    ) -> Option<SlideAnchor<K>> {
        capture_current_anchor(&self.engine, key_for)
    }

    pub fn apply_anchor<K: SlideKey>(
        &mut self,
        anchor: &SlideAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> bool {
        apply_anchor(&mut self.engine, anchor, key_to_index)
    }

    /// Replaces the slide list, keeping the current slide selected if it is still present.
    ///
    /// `old_key` identifies slides of the outgoing list, `key_to_index` looks keys up in the new
    /// one. Returns `true` if the previous slide was found and is current.
    pub fn replace_slides<K: SlideKey>(
        &mut self,
        count: usize,
        old_key: impl FnOnce(usize) -> K,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> bool {
        let anchor = self.capture_current_anchor(old_key);
        self.engine.set_count(count);
        match anchor {
            Some(anchor) => self.apply_anchor(&anchor, key_to_index),
            None => false,
        }
    }
}
