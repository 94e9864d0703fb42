use crate::data_types::{ViewKind, ViewWindow};

/// State captured when a middle-button pan starts on a zoomed view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanOrigin {
    pub view: ViewKind,
    pub pointer_x: f32,
    pub window: ViewWindow,
    /// Value-space units per pixel of the view at pan start.
    pub value_per_pixel: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WheelPan {
    #[default]
    Idle,
    Panning(PanOrigin),
}

impl WheelPan {
    pub fn begin(&mut self, origin: PanOrigin) {
        *self = WheelPan::Panning(origin);
    }

    /// Origin and pixel delta for the pointer at `pointer_x`.
    pub fn delta(&self, pointer_x: f32) -> Option<(PanOrigin, f32)> {
        match self {
            WheelPan::Idle => None,
            WheelPan::Panning(origin) => Some((*origin, pointer_x - origin.pointer_x)),
        }
    }

    pub fn end(&mut self) -> bool {
        std::mem::take(self).is_panning()
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, WheelPan::Panning(_))
    }
}

/// Press recorded on a zoomed view, used to tell clicks from drags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    pub x: f32,
    pub y: f32,
    pub shift: bool,
    /// Focused series (engine numbering) when the press happened.
    pub focused_series: Option<usize>,
}

impl Press {
    /// A release at exactly the press position is a click.
    pub fn is_click(&self, x: f32, y: f32) -> bool {
        self.x == x && self.y == y
    }
}
