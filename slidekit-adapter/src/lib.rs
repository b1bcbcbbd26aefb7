//! Adapter utilities for the `slidekit` crate.
//!
//! The `slidekit` crate is UI-agnostic and focuses on the slider state machine and its math.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A tween-backed [`slidekit::Animator`] for hosts without a native transition system
//! - A frame-driven [`Controller`] that reports transition completion to the engine
//! - Slide anchoring (keep the same slide selected when the slide list is replaced)
//!
//! This crate is intentionally framework-agnostic (no egui/iced/web bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod animator;
mod controller;
mod key;
mod tween;


pub use anchor::{SlideAnchor, apply_anchor, capture_current_anchor};
pub use animator::TweenAnimator;
pub use controller::Controller;
pub use key::SlideKey;
pub use tween::Tween;
