//! A headless drag/momentum slider engine.
//!
//! For adapter-level utilities (tween animator, frame-driven controller, slide anchoring), see
//! the `slidekit-adapter` crate.
//!
//! One engine covers both common configurations:
//! - a one-slide-per-view carousel with an optional infinite loop built from boundary clones,
//! - a variable-width element strip that clamps at its edges with rubber-banding.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the slide count (the slides themselves stay with the host)
//! - viewport width and, for `ItemsPerView::Auto`, measured slide widths
//! - pointer samples and a clock (`now_ms`)
//! - an [`Animator`] that moves the visual strip
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod autoplay;
mod engine;
mod gesture;
mod looping;
mod math;
mod options;
mod position;
mod types;


pub use animator::{AnimationRequest, Animator, Easing};
pub use autoplay::AutoplayScheduler;
pub use engine::SliderEngine;
pub use gesture::{DragSession, GestureTracker, Release};
pub use looping::LoopIndexManager;
pub use options::{OnIndexChangeCallback, SlideFeel, SliderOptions};
pub use position::{Motion, PositionController};
pub use types::{
    ChangeCause, Direction, IndexChange, ItemsPerView, Phase, PointerEvent, PointerKind,
    SliderSnapshot, VisibleSlide,
};
