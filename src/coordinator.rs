//! Owner of the shared visible window.
//!
//! The coordinator only decides *what* the window is; the controller pushes
//! every accepted window to the three views before returning.

use crate::data_types::ViewWindow;
use crate::index_mapper::IndexMapper;
use crate::registry::DataframeRegistry;
use crate::selection::SelectionState;
use crate::view_controller::{SelectionLayout, ViewController};
use tracing::debug;

pub const DEFAULT_SPACER: usize = 5;

#[derive(Clone, Debug)]
pub struct ViewWindowCoordinator {
    window: ViewWindow,
    max_index: usize,
}

impl ViewWindowCoordinator {
    /// Starts on the first `view_size` indexes (or fewer if the shortest
    /// dataframe is shorter).
    pub fn new(max_index: usize, view_size: usize) -> Self {
        let end = view_size.min(max_index + 1).saturating_sub(1);
        Self {
            window: ViewWindow::new(0.0, end as f64),
            max_index,
        }
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Direct placement. Each edge is clamped to `[0, max_index]`.
    pub fn set_window(&mut self, min: f64, max: f64) -> ViewWindow {
        self.window = ViewController::clamp_window(min, max, self.max_index);
        self.window
    }

    /// Drag panning from a captured origin window.
    pub fn pan_from(&mut self, origin: ViewWindow, delta_pixels: f32, value_per_pixel: f64) -> ViewWindow {
        self.window = ViewController::pan_window(origin, delta_pixels, value_per_pixel, self.max_index);
        self.window
    }

    /// Frames the newest `size` selections. Entries that do not resolve are
    /// skipped; returns `None` (window untouched) when nothing resolves.
    pub fn pan_to_selection(
        &mut self,
        selection: &SelectionState,
        registry: &DataframeRegistry,
        spacer: usize,
        size: usize,
    ) -> Option<ViewWindow> {
        let resolved: Vec<usize> = selection
            .recent(size)
            .iter()
            .filter_map(|e| IndexMapper::resolve(registry, &e.protein, &e.position))
            .collect();
        let (window, layout) =
            ViewController::pan_to_selection(&resolved, spacer, size, self.max_index)?;
        if layout == SelectionLayout::Spread {
            debug!(min = window.min, max = window.max, "following newest selection");
        }
        self.window = window;
        Some(window)
    }
}
