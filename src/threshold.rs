use crate::data_types::ViewKind;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Shared scalar compared against metric values by every view.
///
/// No range validation: whatever the host passes is compared as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    value: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            value: DEFAULT_THRESHOLD,
        }
    }
}

impl Threshold {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    pub fn exceeded_by(&self, metric: f64) -> bool {
        metric > self.value
    }

    /// Views that must repaint after the threshold changed. The overview only
    /// shows the threshold when its guide line is enabled.
    pub fn redraw_targets(show_in_overview: bool) -> Vec<ViewKind> {
        let mut targets = vec![ViewKind::Profile, ViewKind::Sequence];
        if show_in_overview {
            targets.push(ViewKind::Overview);
        }
        targets
    }
}
