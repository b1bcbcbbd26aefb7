/// Maps between logical indexes and slots of the loop-padded strip.
///
/// When active, the strip is `[clone(last), item_0, .., item_{n-1}, clone(first)]`. Landing on
/// either clone is followed by a silent snap to the real slide it mirrors, so the user never
/// sees the seam. When inactive (looping disabled, or fewer than two slides) slots and logical
/// indexes coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopIndexManager {
    count: usize,
    active: bool,
}

impl LoopIndexManager {
    pub fn new(count: usize, looping: bool) -> Self {
        Self {
            count,
            active: looping && count >= 2,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Length of the strip, clones included.
    pub fn extended_len(&self) -> usize {
        if self.active {
            self.count + 2
        } else {
            self.count
        }
    }

    pub fn to_slot(&self, index: usize) -> usize {
        if self.active { index + 1 } else { index }
    }

    /// Logical index whose content is shown at `slot`.
    pub fn to_index(&self, slot: usize) -> usize {
        if !self.active {
            return slot;
        }
        if slot == 0 {
            self.count - 1
        } else if slot > self.count {
            0
        } else {
            slot - 1
        }
    }

    pub fn is_clone(&self, slot: usize) -> bool {
        self.active && (slot == 0 || slot == self.count + 1)
    }

    /// The slot to silently jump to after a transition settles on `slot`, if any.
    pub fn snap_target(&self, slot: usize) -> Option<usize> {
        if !self.active {
            return None;
        }
        if slot == 0 {
            Some(self.count)
        } else if slot == self.count + 1 {
            Some(1)
        } else {
            None
        }
    }

    /// Slot range a settled engine may rest on.
    pub fn resting_slots(&self) -> core::ops::RangeInclusive<usize> {
        if self.active {
            1..=self.count
        } else {
            0..=self.count.saturating_sub(1)
        }
    }
}
