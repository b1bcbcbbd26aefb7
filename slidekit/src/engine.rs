use alloc::sync::Arc;

use crate::autoplay::AutoplayScheduler;
use crate::gesture::{DragSession, GestureTracker, Release};
use crate::looping::LoopIndexManager;
use crate::math;
use crate::position::{Motion, PositionController};
use crate::{
    Animator, ChangeCause, Direction, IndexChange, Phase, PointerEvent, PointerKind,
    SliderOptions, SliderSnapshot, VisibleSlide,
};

/// Offsets closer than this are considered "already there".
const SETTLED_EPSILON: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    target_slot: usize,
    from_index: usize,
    cause: ChangeCause,
    deadline_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Dragging,
    Transitioning(Transition),
}

/// A headless drag/momentum slider.
///
/// The engine holds no UI objects:
/// - the host feeds pointer samples, viewport widths and (in auto mode) slide widths,
/// - the injected [`Animator`] moves the visual strip,
/// - the host reports transition completion via `transition_end` and calls `tick` from its
///   frame loop or timer so autoplay (and the completion fallback) can run.
///
/// The state machine is `Idle -> Dragging -> Transitioning -> Idle`. Programmatic navigation
/// goes straight from `Idle` to `Transitioning`; calls made while not idle are rejected, never
/// queued. In loop mode, settling on a boundary clone is followed by a silent snap to the real
/// slide within the same call.
#[derive(Debug)]
pub struct SliderEngine<A: Animator = ()> {
    options: SliderOptions,
    animator: A,
    tracker: GestureTracker,
    position: PositionController,
    loops: LoopIndexManager,
    autoplay: AutoplayScheduler,
    slot: usize,
    state: State,
}

impl SliderEngine<()> {
    /// An engine whose offset the host reads through [`SliderEngine::offset`].
    pub fn headless(options: SliderOptions) -> Self {
        Self::new(options, ())
    }
}

impl<A: Animator> SliderEngine<A> {
    pub fn new(options: SliderOptions, animator: A) -> Self {
        let loops = LoopIndexManager::new(options.count, options.looping);
        let position = PositionController::new(
            loops,
            options.items_per_view,
            options.gap,
            options.viewport_width,
            options.feel.rubber_band,
        );
        let index = options.initial_index.min(options.count.saturating_sub(1));
        sdebug!(
            count = options.count,
            looping = loops.is_active(),
            autoplay = options.autoplay,
            index,
            "SliderEngine::new"
        );
        let mut e = Self {
            slot: loops.to_slot(index),
            options,
            animator,
            tracker: GestureTracker::new(),
            position,
            loops,
            autoplay: AutoplayScheduler::new(),
            state: State::Idle,
        };
        e.clamp_resting_slot();
        e.sync_offset();
        e
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Reconfigures the engine (loop/autoplay toggles, layout options, slide count).
    ///
    /// Any drag or transition in flight is abandoned synchronously, the autoplay timer is
    /// released (the next `tick` re-arms it if autoplay is still enabled), and the logical index
    /// is kept when still in range. Width measurements are dropped if the slide count changed;
    /// use [`SliderEngine::set_count`] when the slides themselves were replaced.
    pub fn set_options(&mut self, options: SliderOptions) {
        self.apply_options(options, false);
    }

    fn apply_options(&mut self, options: SliderOptions, new_slides: bool) {
        let previous = self.index();
        self.interrupt();
        self.autoplay.stop();

        let index = self.index().min(options.count.saturating_sub(1));
        self.loops = LoopIndexManager::new(options.count, options.looping);
        self.position.reconfigure(
            self.loops,
            options.items_per_view,
            options.gap,
            options.feel.rubber_band,
        );
        if new_slides {
            self.position.clear_measurements();
        }
        self.options = options;
        self.slot = self.loops.to_slot(index);
        sdebug!(
            count = self.options.count,
            looping = self.loops.is_active(),
            new_slides,
            index,
            "SliderEngine::set_options"
        );

        self.clamp_resting_slot();
        self.sync_offset();
        self.emit_change(previous, ChangeCause::Replace);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SliderOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Replaces the slide list with one of `count` slides.
    ///
    /// Natural widths belong to the old slides and are dropped even if the count is unchanged;
    /// in auto mode the engine stays at the identity offset until the new slides are measured.
    pub fn set_count(&mut self, count: usize) {
        let mut next = self.options.clone();
        next.count = count;
        self.apply_options(next, true);
    }

    pub fn set_on_index_change(
        &mut self,
        on_index_change: Option<impl Fn(IndexChange) + Send + Sync + 'static>,
    ) {
        self.options.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn position(&self) -> &PositionController {
        &self.position
    }

    pub fn loops(&self) -> &LoopIndexManager {
        &self.loops
    }

    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.tracker.session()
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// The current logical index.
    pub fn index(&self) -> usize {
        self.loops.to_index(self.slot)
    }

    /// The current slot (extended index in loop mode).
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The current translate offset (the target of an in-flight transition).
    pub fn offset(&self) -> f32 {
        self.position.offset()
    }

    pub fn viewport_width(&self) -> f32 {
        self.position.viewport_width()
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Dragging => Phase::Dragging,
            State::Transitioning(_) => Phase::Transitioning,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    pub fn is_looping(&self) -> bool {
        self.loops.is_active()
    }

    /// Fewer than two slides turn the slider into a static display.
    pub fn is_interactive(&self) -> bool {
        self.options.count >= 2
    }

    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            index: self.index(),
            slot: self.slot,
            offset: self.offset(),
            viewport_width: self.viewport_width(),
            phase: self.phase(),
        }
    }

    // --- navigation -------------------------------------------------------------------------

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.step(Direction::Forward, ChangeCause::Navigation, now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.step(Direction::Backward, ChangeCause::Navigation, now_ms)
    }

    /// Animates to a logical index. Out-of-range indexes are ignored.
    ///
    /// In non-loop mode the target is clamped to the last reachable index (see
    /// [`PositionController::max_slot`]).
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        if index >= self.options.count {
            strace!(index, count = self.options.count, "go_to: out of range");
            return false;
        }
        let target = self.loops.to_slot(index);
        self.navigate(target, ChangeCause::Navigation, now_ms)
    }

    /// Moves to a logical index without animation.
    ///
    /// Counts as manual navigation: the autoplay interval restarts on the next `tick`.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.is_idle() || index >= self.options.count {
            return false;
        }
        let target = self.loops.to_slot(index).min(self.position.max_slot());
        if target == self.slot {
            return false;
        }
        let previous = self.index();
        self.slot = target;
        self.sync_offset();
        self.autoplay.defer_reset();
        self.emit_change(previous, ChangeCause::Jump);
        true
    }

    pub fn can_go_prev(&self) -> bool {
        self.is_interactive() && (self.loops.is_active() || self.slot > 0)
    }

    pub fn can_go_next(&self) -> bool {
        self.is_interactive() && (self.loops.is_active() || self.slot < self.position.max_slot())
    }

    pub fn controls_visible(&self) -> bool {
        self.options.show_controls && self.is_interactive()
    }

    pub fn dots_visible(&self) -> bool {
        self.options.show_dots && self.is_interactive()
    }

    /// Number of distinct resting positions (one dot each).
    pub fn dot_count(&self) -> usize {
        if !self.is_interactive() {
            0
        } else if self.loops.is_active() {
            self.options.count
        } else {
            self.position.max_slot() + 1
        }
    }

    fn step(&mut self, direction: Direction, cause: ChangeCause, now_ms: u64) -> bool {
        let target = match direction {
            Direction::Forward => {
                if !self.loops.is_active() && self.slot >= self.position.max_slot() {
                    return false;
                }
                self.slot + 1
            }
            Direction::Backward => {
                let Some(target) = self.slot.checked_sub(1) else {
                    return false;
                };
                target
            }
        };
        self.navigate(target, cause, now_ms)
    }

    fn navigate(&mut self, target_slot: usize, cause: ChangeCause, now_ms: u64) -> bool {
        if !self.is_idle() {
            strace!(?cause, "navigate: busy, ignored");
            return false;
        }
        if !self.is_interactive() {
            return false;
        }
        let target = target_slot.min(self.position.max_slot());
        if target == self.slot {
            return false;
        }
        self.start_transition(target, cause, now_ms);
        true
    }

    fn start_transition(&mut self, target_slot: usize, cause: ChangeCause, now_ms: u64) {
        let duration_ms = self.options.feel.transition_ms;
        let to = self.position.offset_for_slot(target_slot);
        self.autoplay.pause();
        self.state = State::Transitioning(Transition {
            target_slot,
            from_index: self.index(),
            cause,
            deadline_ms: now_ms.saturating_add(duration_ms),
        });

        if !self.position.is_ready()
            || duration_ms == 0
            || math::abs(to - self.position.offset()) < SETTLED_EPSILON
        {
            self.position
                .set_translate(&mut self.animator, to, Motion::Immediate);
            self.finish_transition(now_ms);
            return;
        }

        strace!(from = self.slot, to = target_slot, ?cause, "transition start");
        self.position.set_translate(
            &mut self.animator,
            to,
            Motion::Animated {
                start_ms: now_ms,
                duration_ms,
                easing: self.options.feel.easing,
            },
        );
    }

    /// Reports that the animated move finished. Ignored when no transition is in flight.
    pub fn transition_end(&mut self, now_ms: u64) -> bool {
        self.finish_transition(now_ms)
    }

    fn finish_transition(&mut self, now_ms: u64) -> bool {
        let State::Transitioning(t) = self.state else {
            return false;
        };
        self.state = State::Idle;
        self.slot = t.target_slot;
        if let Some(snap) = self.loops.snap_target(self.slot) {
            strace!(from = self.slot, to = snap, "loop snap");
            self.slot = snap;
            self.sync_offset();
        }
        self.autoplay.resume(now_ms);
        strace!(slot = self.slot, "transition settled");
        self.emit_change(t.from_index, t.cause);
        true
    }

    // --- gestures ---------------------------------------------------------------------------

    /// Dispatches a pointer sample. Returns `true` if the engine consumed it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerKind::Begin => self.begin_drag(event.position, event.time_ms),
            PointerKind::Move => self.drag_move(event.position, event.time_ms),
            PointerKind::End => self.end_drag(event.position, event.time_ms),
            PointerKind::Leave => self.leave_drag(event.time_ms),
        }
    }

    pub fn begin_drag(&mut self, position: f32, now_ms: u64) -> bool {
        if !self.is_idle()
            || !self.options.draggable
            || !self.is_interactive()
            || !self.position.is_ready()
            || !position.is_finite()
        {
            strace!(phase = ?self.phase(), "begin_drag: ignored");
            return false;
        }
        let origin = self.position.offset();
        self.tracker.begin(position, now_ms, origin);
        self.position
            .set_translate(&mut self.animator, origin, Motion::Immediate);
        self.autoplay.pause();
        self.state = State::Dragging;
        true
    }

    pub fn drag_move(&mut self, position: f32, now_ms: u64) -> bool {
        if self.state != State::Dragging {
            return false;
        }
        let Some(delta) = self.tracker.move_to(position, now_ms) else {
            return false;
        };
        let origin = self.tracker.session().map_or(0.0, |s| s.origin_offset);
        let next = self.position.rubber_band(origin + delta);
        self.position
            .set_translate(&mut self.animator, next, Motion::Immediate);
        true
    }

    pub fn end_drag(&mut self, position: f32, now_ms: u64) -> bool {
        if self.state != State::Dragging {
            return false;
        }
        let Some(release) = self.tracker.end(position, now_ms) else {
            return false;
        };
        self.release(release, now_ms);
        true
    }

    /// The pointer left the surface: ends the drag at its last sample.
    pub fn leave_drag(&mut self, now_ms: u64) -> bool {
        if self.state != State::Dragging {
            return false;
        }
        let Some(release) = self.tracker.leave(now_ms) else {
            return false;
        };
        self.release(release, now_ms);
        true
    }

    fn release(&mut self, release: Release, now_ms: u64) {
        self.state = State::Idle;
        let target = self.release_target(&release);
        strace!(
            delta = release.delta,
            velocity = release.velocity,
            target,
            "drag released"
        );
        self.start_transition(target, ChangeCause::Drag, now_ms);
    }

    fn release_target(&self, release: &Release) -> usize {
        let feel = &self.options.feel;
        let origin = self.slot;
        let max = self.position.max_slot();

        let target = if math::abs(release.velocity) > feel.momentum_threshold {
            let projected = self.position.offset() + release.velocity * feel.momentum_multiplier;
            let nearest = self.position.nearest_slot(projected);
            // A flick always moves at least one slide in its direction. In loop mode it must
            // not travel far enough to come back around to the slide it started on.
            let reach = if self.loops.is_active() {
                self.loops.count() - 1
            } else {
                usize::MAX
            };
            if release.velocity < 0.0 {
                nearest.clamp(origin + 1, origin.saturating_add(reach))
            } else {
                nearest
                    .min(origin.saturating_sub(1))
                    .max(origin.saturating_sub(reach))
            }
        } else {
            let forward_step = self.position.slot_step(origin);
            let backward_step = origin
                .checked_sub(1)
                .map_or(forward_step, |prev| self.position.slot_step(prev));
            if forward_step > 0.0 && release.delta <= -forward_step * feel.commit_fraction {
                origin + 1
            } else if backward_step > 0.0 && release.delta >= backward_step * feel.commit_fraction {
                origin.saturating_sub(1)
            } else {
                origin
            }
        };
        target.min(max)
    }

    // --- time -------------------------------------------------------------------------------

    /// Advances timers: arms/releases the autoplay timer and fires autoplay when idle.
    ///
    /// For animators that cannot report completion ([`Animator::reports_completion`] is
    /// `false`), a transition whose duration has elapsed is settled here. Otherwise the engine
    /// waits for `transition_end`, so a loop snap never cuts a lagging animation short.
    pub fn tick(&mut self, now_ms: u64) {
        if let State::Transitioning(t) = self.state {
            if now_ms >= t.deadline_ms && !self.animator.reports_completion() {
                strace!(now_ms, "transition settled by deadline");
                self.finish_transition(now_ms);
            }
        }
        self.sync_autoplay(now_ms);
        if self.is_idle() && self.autoplay.poll(now_ms) {
            self.autoplay_advance(now_ms);
        }
    }

    fn sync_autoplay(&mut self, now_ms: u64) {
        let wanted = self.options.autoplay && self.is_interactive();
        if wanted && !self.autoplay.is_running() {
            self.autoplay
                .start(self.options.autoplay_interval_ms, now_ms);
            if !self.is_idle() {
                self.autoplay.pause();
            }
        } else if !wanted && self.autoplay.is_running() {
            self.autoplay.stop();
        }
    }

    fn autoplay_advance(&mut self, now_ms: u64) {
        strace!(slot = self.slot, "autoplay tick");
        if !self.loops.is_active() && self.slot >= self.position.max_slot() {
            // Non-loop sliders rewind instead of stalling at the end.
            self.navigate(0, ChangeCause::Autoplay, now_ms);
        } else {
            self.step(Direction::Forward, ChangeCause::Autoplay, now_ms);
        }
    }

    // --- layout -----------------------------------------------------------------------------

    /// Applies a new viewport width.
    ///
    /// The logical index is kept unless it is no longer reachable, in which case it is clamped
    /// and reported with [`ChangeCause::Resize`].
    pub fn handle_resize(&mut self, viewport_width: f32) {
        if self.position.set_viewport_width(viewport_width) {
            self.relayout();
        }
    }

    /// Records the natural width of a slide (auto mode).
    pub fn measure(&mut self, index: usize, width: f32) {
        if self.position.measure(index, width) {
            self.relayout();
        }
    }

    /// Records the natural widths of all slides at once (auto mode).
    pub fn set_item_widths(&mut self, widths: &[f32]) {
        self.position.set_item_widths(widths);
        self.relayout();
    }

    fn relayout(&mut self) {
        match self.state {
            State::Idle => {
                let previous = self.index();
                self.clamp_resting_slot();
                self.sync_offset();
                self.emit_change(previous, ChangeCause::Resize);
            }
            State::Dragging => {
                let live = self.position.rubber_band(self.position.offset());
                self.position
                    .set_translate(&mut self.animator, live, Motion::Immediate);
            }
            State::Transitioning(mut t) => {
                t.target_slot = t.target_slot.min(self.position.max_slot());
                self.state = State::Transitioning(t);
                let to = self.position.offset_for_slot(t.target_slot);
                self.position
                    .set_translate(&mut self.animator, to, Motion::Immediate);
            }
        }
    }

    fn clamp_resting_slot(&mut self) {
        if !self.loops.is_active() {
            self.slot = self.slot.min(self.position.max_slot());
        }
    }

    fn sync_offset(&mut self) {
        let offset = self.position.offset_for_slot(self.slot);
        self.position
            .set_translate(&mut self.animator, offset, Motion::Immediate);
    }

    // --- painting ---------------------------------------------------------------------------

    /// Calls `f` for every slide intersecting the viewport at the current offset.
    pub fn for_each_visible_slide(&self, f: impl FnMut(VisibleSlide)) {
        self.for_each_slide_at(self.offset(), f);
    }

    /// Calls `f` for every slide intersecting the viewport with the strip at `offset`.
    ///
    /// Adapters that tween the strip pass the painted offset here.
    pub fn for_each_slide_at(&self, offset: f32, mut f: impl FnMut(VisibleSlide)) {
        let loops = self.loops;
        self.position.for_each_slot_at(offset, |slot, x, width| {
            f(VisibleSlide {
                slot,
                index: loops.to_index(slot),
                is_clone: loops.is_clone(slot),
                x,
                width,
            });
        });
    }

    // --- lifecycle --------------------------------------------------------------------------

    fn emit_change(&self, previous: usize, cause: ChangeCause) {
        let current = self.index();
        if previous == current {
            return;
        }
        sdebug!(previous, current, ?cause, "index change");
        if let Some(cb) = &self.options.on_index_change {
            cb(IndexChange {
                previous,
                current,
                cause,
            });
        }
    }

    /// Abandons a drag or transition in flight. A transition lands on its target.
    fn interrupt(&mut self) {
        match self.state {
            State::Idle => {}
            State::Dragging => self.tracker.cancel(),
            State::Transitioning(t) => {
                self.animator.cancel();
                self.slot = self.loops.snap_target(t.target_slot).unwrap_or(t.target_slot);
            }
        }
        self.state = State::Idle;
    }

    /// Releases the autoplay timer and cancels any drag or animation in flight.
    ///
    /// Called automatically on drop.
    pub fn destroy(&mut self) {
        self.interrupt();
        self.autoplay.stop();
    }
}

impl<A: Animator> Drop for SliderEngine<A> {
    fn drop(&mut self) {
        self.destroy();
    }
}
