use core::fmt;

use slidekit::{Animator, SliderEngine};

use crate::SlideKey;

/// Remembers which slide (by identity) the user was looking at.
///
/// Typical use: new data arrives for a product carousel and the slide list is replaced; the
/// anchor keeps the same product selected even if it moved to another index.
#[derive(Clone, PartialEq, Eq)]
pub struct SlideAnchor<K> {
    pub key: K,
}

impl<K: fmt::Debug> fmt::Debug for SlideAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideAnchor").field("key", &self.key).finish()
    }
}

/// Captures an anchor for the current slide.
///
/// Returns `None` if the slide list is empty.
pub fn capture_current_anchor<A: Animator, K: SlideKey>(
    engine: &SliderEngine<A>,
    key_for: impl FnOnce(usize) -> K,
) -> Option<SlideAnchor<K>> {
    if engine.count() == 0 {
        return None;
    }
    Some(SlideAnchor {
        key: key_for(engine.index()),
    })
}

/// Applies a previously captured anchor by jumping (without animation) to its slide.
///
/// The adapter must provide a `key_to_index` mapping for the *current* slide list.
///
/// Returns `true` when the anchored slide is current afterwards.
pub fn apply_anchor<A: Animator, K: SlideKey>(
    engine: &mut SliderEngine<A>,
    anchor: &SlideAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        atrace!("apply_anchor: key no longer present");
        return false;
    };
    if index != engine.index() {
        engine.jump_to(index);
    }
    engine.index() == index
}
