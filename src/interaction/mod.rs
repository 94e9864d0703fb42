//! Pointer gesture state machines.
//!
//! Each gesture is an explicit `Idle`/active enum whose active variant
//! carries the data captured at gesture start; releasing the pointer drops
//! it, which is the only cancellation point.

pub mod frame;
pub mod pan;
pub mod ranger_drag;

pub use frame::FrameCoalescer;
pub use pan::{PanOrigin, Press, WheelPan};
pub use ranger_drag::{DragHandle, DragOrigin, RangerDrag};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
    pub shift: bool,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button,
            shift: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Pointer style the host should show over the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Auto,
    Move,
}
