use crate::plot_engine::SelectRect;

/// Grip of the overview's visible-window indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragHandle {
    Left,
    Right,
    Body,
}

/// Pointer and indicator geometry captured on drag start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOrigin {
    pub handle: DragHandle,
    pub pointer_x: f32,
    pub left: f32,
    pub width: f32,
}

impl DragOrigin {
    /// Indicator geometry for the pointer at `pointer_x`.
    pub fn candidate(&self, pointer_x: f32) -> SelectRect {
        let dx = pointer_x - self.pointer_x;
        match self.handle {
            DragHandle::Body => SelectRect::new(self.left + dx, self.width),
            DragHandle::Left => SelectRect::new(self.left + dx, self.width - dx),
            DragHandle::Right => SelectRect::new(self.left, self.width + dx),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RangerDrag {
    #[default]
    Idle,
    Dragging(DragOrigin),
}

impl RangerDrag {
    pub fn begin(&mut self, handle: DragHandle, pointer_x: f32, current: SelectRect) {
        *self = RangerDrag::Dragging(DragOrigin {
            handle,
            pointer_x,
            left: current.left,
            width: current.width,
        });
    }

    /// Candidate for `pointer_x`, or `None` when idle or when either edge
    /// would leave `[0, max_right]`.
    pub fn candidate(&self, pointer_x: f32, max_right: f32) -> Option<SelectRect> {
        let RangerDrag::Dragging(origin) = self else {
            return None;
        };
        let rect = origin.candidate(pointer_x);
        (rect.left >= 0.0 && rect.left + rect.width <= max_right).then_some(rect)
    }

    /// Returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        std::mem::take(self).is_dragging()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, RangerDrag::Dragging(_))
    }
}
