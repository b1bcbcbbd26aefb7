use alloc::sync::Arc;

use crate::{Easing, IndexChange, ItemsPerView};

/// A callback fired when the logical index changes.
pub type OnIndexChangeCallback = Arc<dyn Fn(IndexChange) + Send + Sync>;

/// Tunable UI-feel constants.
///
/// These are empirical defaults, not a physical model. Velocities are in px/ms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlideFeel {
    pub transition_ms: u64,
    pub easing: Easing,
    /// Release speed above which the flick is projected instead of using displacement rules.
    pub momentum_threshold: f32,
    /// How far (in ms of travel) a flick is projected past the release point.
    pub momentum_multiplier: f32,
    /// Fraction of a slide a slow drag must cover to commit to the neighbor.
    pub commit_fraction: f32,
    /// Rate at which the strip follows a drag past a hard edge.
    pub rubber_band: f32,
}

impl Default for SlideFeel {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            easing: Easing::EaseOut,
            momentum_threshold: 0.5,
            momentum_multiplier: 150.0,
            commit_fraction: 1.0 / 3.0,
            rubber_band: 0.5,
        }
    }
}

/// Configuration for [`crate::SliderEngine`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so hosts can tweak a field and call
/// `SliderEngine::set_options` freely.
pub struct SliderOptions {
    /// Number of slides. The slides themselves stay with the host.
    pub count: usize,
    /// Wrap around through boundary clones instead of stopping at the ends.
    pub looping: bool,
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    pub draggable: bool,
    pub items_per_view: ItemsPerView,
    /// Space between adjacent slides; part of the slide step.
    pub gap: f32,
    /// Viewport width known at construction, if any. `0.0` means "not laid out yet".
    pub viewport_width: f32,
    /// Logical index to start on. Out-of-range values are clamped.
    pub initial_index: usize,
    pub feel: SlideFeel,
    pub on_index_change: Option<OnIndexChangeCallback>,

    /// Presentation only; consulted by `controls_visible`.
    pub show_controls: bool,
    /// Presentation only; consulted by `dots_visible`.
    pub show_dots: bool,
}

impl SliderOptions {
    /// Options for a single-slide-per-view, non-looping slider of `count` slides.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            looping: false,
            autoplay: false,
            autoplay_interval_ms: 5_000,
            draggable: true,
            items_per_view: ItemsPerView::Fixed(1),
            gap: 0.0,
            viewport_width: 0.0,
            initial_index: 0,
            feel: SlideFeel::default(),
            on_index_change: None,
            show_controls: true,
            show_dots: true,
        }
    }

    /// The fixed-height image carousel: one slide per view, looping.
    pub fn carousel(count: usize) -> Self {
        Self::new(count).with_looping(true)
    }

    /// The variable-width element strip: natural widths, no looping.
    pub fn strip(count: usize) -> Self {
        Self::new(count)
            .with_items_per_view(ItemsPerView::Auto)
            .with_show_dots(false)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_items_per_view(mut self, items_per_view: ItemsPerView) -> Self {
        self.items_per_view = items_per_view;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: f32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_feel(mut self, feel: SlideFeel) -> Self {
        self.feel = feel;
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(IndexChange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_show_controls(mut self, show_controls: bool) -> Self {
        self.show_controls = show_controls;
        self
    }

    pub fn with_show_dots(mut self, show_dots: bool) -> Self {
        self.show_dots = show_dots;
        self
    }
}

impl Clone for SliderOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            looping: self.looping,
            autoplay: self.autoplay,
            autoplay_interval_ms: self.autoplay_interval_ms,
            draggable: self.draggable,
            items_per_view: self.items_per_view,
            gap: self.gap,
            viewport_width: self.viewport_width,
            initial_index: self.initial_index,
            feel: self.feel,
            on_index_change: self.on_index_change.clone(),
            show_controls: self.show_controls,
            show_dots: self.show_dots,
        }
    }
}

impl core::fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderOptions")
            .field("count", &self.count)
            .field("looping", &self.looping)
            .field("autoplay", &self.autoplay)
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field("draggable", &self.draggable)
            .field("items_per_view", &self.items_per_view)
            .field("gap", &self.gap)
            .field("viewport_width", &self.viewport_width)
            .field("initial_index", &self.initial_index)
            .field("feel", &self.feel)
            .field("show_controls", &self.show_controls)
            .field("show_dots", &self.show_dots)
            .finish_non_exhaustive()
    }
}
