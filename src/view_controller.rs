use crate::data_types::ViewWindow;
use crate::scales::IndexScale;

/// How a selection was framed by [`ViewController::pan_to_selection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionLayout {
    /// All recent selections fit in one view; frame them with padding.
    Grouped,
    /// Too far apart; follow the most recent selection.
    Spread,
}

/// ViewController holds the window arithmetic (clamping, panning, framing a
/// selection) independently of any view so it can be tested on its own.
pub struct ViewController;

impl ViewController {
    /// Clamps both edges to `[0, max_index]`.
    pub fn clamp_window(min: f64, max: f64, max_index: usize) -> ViewWindow {
        let mut w = ViewWindow::new(min, max);
        w.clamp_edges(0.0, max_index as f64);
        w
    }

    /// Value-space units covered by one pixel of `scale`.
    pub fn value_per_pixel(scale: &IndexScale) -> f64 {
        scale.invert(1.0) - scale.invert(0.0)
    }

    /// Drag-to-pan: moving the pointer right by `delta_pixels` pulls earlier
    /// indexes into view. The span is kept and the result stays inside
    /// `[0, max_index]`.
    pub fn pan_window(
        origin: ViewWindow,
        delta_pixels: f32,
        value_per_pixel: f64,
        max_index: usize,
    ) -> ViewWindow {
        let mut w = origin;
        w.pan(-(delta_pixels as f64) * value_per_pixel);
        w.clamp_preserving_span(0.0, max_index as f64);
        w
    }

    /// Frames the resolved indexes of the most recent selections (oldest
    /// first). Grouped selections get `spacer` padding on both sides clamped
    /// to `[0, max_index]`; spread selections anchor on the newest index as
    /// `[t - spacer, t + size]` with only the lower edge clamped.
    pub fn pan_to_selection(
        resolved: &[usize],
        spacer: usize,
        size: usize,
        max_index: usize,
    ) -> Option<(ViewWindow, SelectionLayout)> {
        let min_idx = *resolved.iter().min()? as i64;
        let max_idx = *resolved.iter().max()? as i64;
        let spacer = spacer as i64;
        let size = size as i64;

        if max_idx - min_idx < size {
            let hi = (max_idx + spacer).min(max_index as i64);
            let lo = (min_idx - spacer).max(0).min(hi);
            Some((ViewWindow::new(lo as f64, hi as f64), SelectionLayout::Grouped))
        } else {
            let t = *resolved.last()? as i64;
            let lo = (t - spacer).max(0);
            Some((ViewWindow::new(lo as f64, (t + size) as f64), SelectionLayout::Spread))
        }
    }
}
