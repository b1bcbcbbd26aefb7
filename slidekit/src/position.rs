use alloc::vec::Vec;

use crate::looping::LoopIndexManager;
use crate::math;
use crate::{AnimationRequest, Animator, Easing, ItemsPerView};

/// Sub-pixel tolerance for "this slot already sits at the clamped edge".
const EDGE_EPSILON: f32 = 0.5;

/// How a translate is applied to the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// No transition; used for live dragging and silent snaps.
    Immediate,
    Animated {
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    },
}

/// Owns the strip geometry and its translate offset.
///
/// Offsets are `<= 0` and measure how far the strip is shifted left. Slot `s` is aligned with
/// the viewport's left edge at offset `-start(s)`; in non-loop mode that offset is clamped to
/// `[min_offset, 0]` so the strip never uncovers empty space.
///
/// Until the viewport and every slide have a positive width the controller is "not ready" and
/// every offset degrades to `0.0`.
#[derive(Clone, Debug)]
pub struct PositionController {
    viewport_width: f32,
    gap: f32,
    items_per_view: ItemsPerView,
    rubber_band: f32,
    loops: LoopIndexManager,
    measured: Vec<Option<f32>>,

    slot_widths: Vec<f32>,
    starts: Vec<f32>,
    ready: bool,
    offset: f32,
}

impl PositionController {
    pub fn new(
        loops: LoopIndexManager,
        items_per_view: ItemsPerView,
        gap: f32,
        viewport_width: f32,
        rubber_band: f32,
    ) -> Self {
        let mut p = Self {
            viewport_width: sanitize_extent(viewport_width),
            gap: sanitize_extent(gap),
            items_per_view,
            rubber_band: rubber_band.clamp(0.0, 1.0),
            loops,
            measured: Vec::new(),
            slot_widths: Vec::new(),
            starts: Vec::new(),
            ready: false,
            offset: 0.0,
        };
        p.measured.resize(loops.count(), None);
        p.rebuild();
        p
    }

    /// Applies new layout parameters. Measurements survive unless the slide count changed.
    pub fn reconfigure(
        &mut self,
        loops: LoopIndexManager,
        items_per_view: ItemsPerView,
        gap: f32,
        rubber_band: f32,
    ) {
        if loops.count() != self.loops.count() {
            self.measured.clear();
            self.measured.resize(loops.count(), None);
        }
        self.loops = loops;
        self.items_per_view = items_per_view;
        self.gap = sanitize_extent(gap);
        self.rubber_band = rubber_band.clamp(0.0, 1.0);
        self.rebuild();
    }

    /// Returns `true` if the width actually changed.
    pub fn set_viewport_width(&mut self, viewport_width: f32) -> bool {
        let viewport_width = sanitize_extent(viewport_width);
        if viewport_width == self.viewport_width {
            return false;
        }
        self.viewport_width = viewport_width;
        self.rebuild();
        true
    }

    /// Records the natural width of one slide (auto mode).
    ///
    /// Returns `true` if the geometry changed.
    pub fn measure(&mut self, index: usize, width: f32) -> bool {
        if index >= self.measured.len() {
            swarn!(index, count = self.measured.len(), "measure: out-of-bounds index");
            return false;
        }
        if !math::is_valid_extent(width) {
            swarn!(index, width, "measure: invalid width");
            debug_assert!(math::is_valid_extent(width), "measure: invalid width {width}");
            return false;
        }
        if self.measured[index] == Some(width) {
            return false;
        }
        self.measured[index] = Some(width);
        self.rebuild();
        true
    }

    /// Replaces all natural widths at once (auto mode). Extra entries are ignored.
    pub fn set_item_widths(&mut self, widths: &[f32]) {
        for (slot, &w) in self.measured.iter_mut().zip(widths) {
            *slot = math::is_valid_extent(w).then_some(w);
        }
        self.rebuild();
    }

    /// Drops all natural widths (e.g. after the slide list was replaced).
    pub fn clear_measurements(&mut self) {
        self.measured.iter_mut().for_each(|m| *m = None);
        self.rebuild();
    }

    fn item_width(&self, index: usize) -> Option<f32> {
        match self.items_per_view {
            ItemsPerView::Fixed(n) => {
                let n = n.max(1);
                let gaps = self.gap * (n - 1) as f32;
                Some((self.viewport_width - gaps).max(0.0) / n as f32)
            }
            ItemsPerView::Auto => self.measured.get(index).copied().flatten(),
        }
    }

    fn rebuild(&mut self) {
        let len = self.loops.extended_len();
        self.slot_widths.clear();
        self.starts.clear();

        let mut ready = self.viewport_width > 0.0 && len > 0;
        let mut cursor = 0.0f32;
        for slot in 0..len {
            let width = self.item_width(self.loops.to_index(slot)).unwrap_or(0.0);
            if width <= 0.0 {
                ready = false;
            }
            self.starts.push(cursor);
            self.slot_widths.push(width);
            cursor += width + self.gap;
        }
        self.ready = ready;
        if !ready {
            self.offset = 0.0;
        }
        strace!(
            slots = len,
            viewport_width = self.viewport_width,
            ready,
            "PositionController::rebuild"
        );
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn slot_count(&self) -> usize {
        self.starts.len()
    }

    pub fn slot_start(&self, slot: usize) -> Option<f32> {
        self.starts.get(slot).copied()
    }

    pub fn slot_width(&self, slot: usize) -> Option<f32> {
        self.slot_widths.get(slot).copied()
    }

    /// Distance from `slot` to its right-hand neighbor (width + gap).
    pub fn slot_step(&self, slot: usize) -> f32 {
        self.slot_width(slot).map_or(0.0, |w| w + self.gap)
    }

    /// Width of the whole strip (clones included), without trailing gap.
    pub fn content_width(&self) -> f32 {
        match (self.starts.last(), self.slot_widths.last()) {
            (Some(start), Some(width)) => start + width,
            _ => 0.0,
        }
    }

    /// The most negative offset allowed in non-loop mode.
    pub fn min_offset(&self) -> f32 {
        -(self.content_width() - self.viewport_width).max(0.0)
    }

    pub fn offset_for_slot(&self, slot: usize) -> f32 {
        if !self.ready {
            return 0.0;
        }
        let Some(start) = self.slot_start(slot) else {
            return 0.0;
        };
        self.clamp(-start)
    }

    /// Highest slot navigation may target.
    ///
    /// In non-loop mode this is the first slot whose start reaches the end of the scrollable
    /// range: anything past it would render at the same clamped offset.
    pub fn max_slot(&self) -> usize {
        let last = self.slot_count().saturating_sub(1);
        if self.loops.is_active() || !self.ready {
            return last;
        }
        let max_scroll = -self.min_offset();
        self.starts
            .iter()
            .position(|&start| start >= max_scroll - EDGE_EPSILON)
            .unwrap_or(last)
    }

    /// Slot whose aligned position is nearest to `offset`, within `0..=max_slot()`.
    ///
    /// With uniform slides this is `round(-offset / step)`.
    pub fn nearest_slot(&self, offset: f32) -> usize {
        if !self.ready || self.starts.is_empty() {
            return 0;
        }
        let pos = -offset;
        let after = self.starts.partition_point(|&start| start <= pos);
        let nearest = if after == 0 {
            0
        } else if after >= self.starts.len() {
            self.starts.len() - 1
        } else {
            let below = after - 1;
            let to_below = pos - self.starts[below];
            let to_after = self.starts[after] - pos;
            if to_after <= to_below { after } else { below }
        };
        nearest.min(self.max_slot())
    }

    /// Hard clamp into the valid range (non-loop) or identity (loop).
    pub fn clamp(&self, offset: f32) -> f32 {
        if !self.ready {
            return 0.0;
        }
        if self.loops.is_active() {
            return offset;
        }
        offset.clamp(self.min_offset(), 0.0)
    }

    /// Clamp for live dragging: past an edge the excess is scaled by the rubber-band factor.
    pub fn rubber_band(&self, raw: f32) -> f32 {
        if !self.ready {
            return 0.0;
        }
        if self.loops.is_active() {
            return raw;
        }
        let max = 0.0;
        let min = self.min_offset();
        if raw > max {
            max + (raw - max) * self.rubber_band
        } else if raw < min {
            min + (raw - min) * self.rubber_band
        } else {
            raw
        }
    }

    /// Moves the strip. Offsets are not clamped here; callers pick `clamp` or `rubber_band`.
    pub fn set_translate<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        offset: f32,
        motion: Motion,
    ) {
        let offset = if self.ready && offset.is_finite() {
            offset
        } else {
            0.0
        };
        let from = self.offset;
        self.offset = offset;
        match motion {
            Motion::Immediate => animator.set_immediate(offset),
            Motion::Animated {
                start_ms,
                duration_ms,
                easing,
            } => animator.animate_to(AnimationRequest {
                from,
                to: offset,
                start_ms,
                duration_ms,
                easing,
            }),
        }
    }

    /// Calls `f` for every slot intersecting the viewport when the strip sits at `offset`.
    pub fn for_each_slot_at(&self, offset: f32, mut f: impl FnMut(usize, f32, f32)) {
        if !self.ready {
            return;
        }
        let first = self
            .starts
            .iter()
            .zip(&self.slot_widths)
            .position(|(start, width)| start + width + offset > 0.0);
        let Some(first) = first else {
            return;
        };
        for slot in first..self.starts.len() {
            let x = self.starts[slot] + offset;
            if x >= self.viewport_width {
                break;
            }
            f(slot, x, self.slot_widths[slot]);
        }
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if math::is_valid_extent(value) {
        value
    } else {
        swarn!(value, "PositionController: invalid extent, using 0");
        0.0
    }
}
