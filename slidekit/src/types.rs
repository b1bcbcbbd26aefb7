/// How slide widths are derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemsPerView {
    /// `n` equally sized slides fill the viewport (gaps included).
    Fixed(usize),
    /// Every slide keeps its natural width, reported through `SliderEngine::measure`.
    Auto,
}

impl Default for ItemsPerView {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

/// The engine's interaction phase. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// What caused a logical index change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeCause {
    /// `next`, `prev` or `go_to`.
    Navigation,
    Drag,
    Autoplay,
    /// The viewport shrank or grew and the old index became unreachable.
    Resize,
    /// The slide list was replaced and the old index fell out of range.
    Replace,
    /// A silent, non-animated `jump_to`.
    Jump,
}

/// Payload of the index-change notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
    pub cause: ChangeCause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Begin,
    Move,
    End,
    /// The pointer left the slider surface; ends an active drag at its last sample.
    Leave,
}

/// A platform-neutral pointer/touch sample along the slide axis.
///
/// Hosts translate their mouse/touch events into these and feed them to
/// `SliderEngine::handle_pointer` in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: f32,
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn begin(position: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Begin,
            position,
            time_ms,
        }
    }

    pub fn moved(position: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Move,
            position,
            time_ms,
        }
    }

    pub fn end(position: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::End,
            position,
            time_ms,
        }
    }

    pub fn leave(position: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Leave,
            position,
            time_ms,
        }
    }
}

/// A slot of the strip that intersects the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleSlide {
    /// Position in the strip (the extended index in loop mode).
    pub slot: usize,
    /// Logical index of the slide whose content should be painted here.
    pub index: usize,
    /// `true` for the boundary clones of loop mode.
    pub is_clone: bool,
    /// Left edge relative to the viewport, translate offset applied.
    pub x: f32,
    pub width: f32,
}

impl VisibleSlide {
    pub fn end(&self) -> f32 {
        self.x + self.width
    }
}

/// A read-only snapshot of engine state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderSnapshot {
    pub index: usize,
    pub slot: usize,
    pub offset: f32,
    pub viewport_width: f32,
    pub phase: Phase,
}
