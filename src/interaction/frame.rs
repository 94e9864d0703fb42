/// Holds at most one pending update until the next animation frame.
///
/// A newer update replaces the pending one (last write wins); nothing queues.
#[derive(Clone, Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameCoalescer<T> {
    /// Stores `args` for the next frame. Returns `true` when no frame was
    /// pending, i.e. the host has to request one.
    pub fn schedule(&mut self, args: T) -> bool {
        self.pending.replace(args).is_none()
    }

    /// Called on the animation frame.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
