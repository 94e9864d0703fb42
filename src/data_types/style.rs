use serde::{Deserialize, Serialize};

/// The three linked views of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    /// Navigation strip ("ranger") showing the full index range.
    Overview,
    Profile,
    Sequence,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Overview, ViewKind::Profile, ViewKind::Sequence];

    /// Views that render the shared window zoomed in.
    pub fn is_zoomed(self) -> bool {
        !matches!(self, ViewKind::Overview)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointsStyle {
    pub show: Option<bool>,
    pub size: Option<f32>,
}

/// When a sequence row draws a glyph for an index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayRule {
    /// `metric > threshold`
    #[default]
    AboveThreshold,
    /// `metric == value`
    Equals(f64),
    /// Any non-missing value.
    Always,
}

impl DisplayRule {
    pub fn passes(&self, value: Option<f64>, threshold: f64) -> bool {
        let Some(v) = value else {
            return false;
        };
        match self {
            Self::AboveThreshold => v > threshold,
            Self::Equals(target) => v == *target,
            Self::Always => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Glyph {
    #[default]
    Star,
    Rect,
    Circle,
}

/// Per-view rendering intent of one metric channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesStyle {
    pub label: Option<String>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub fill_to: Option<f64>,
    pub span_gaps: Option<bool>,
    pub width: Option<f32>,
    pub dash: Option<Vec<f32>>,
    pub points: Option<PointsStyle>,
    /// Sequence view only.
    pub display: Option<DisplayRule>,
    /// Sequence view only.
    pub glyph: Option<Glyph>,
}

/// Which views a metric channel is rendered in, and how.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewIntents {
    /// Key `ranger` in the input format.
    #[serde(rename = "ranger")]
    pub overview: Option<SeriesStyle>,
    pub profile: Option<SeriesStyle>,
    pub sequence: Option<SeriesStyle>,
}

impl ViewIntents {
    pub fn for_view(&self, view: ViewKind) -> Option<&SeriesStyle> {
        match view {
            ViewKind::Overview => self.overview.as_ref(),
            ViewKind::Profile => self.profile.as_ref(),
            ViewKind::Sequence => self.sequence.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.overview.is_none() && self.profile.is_none() && self.sequence.is_none()
    }
}
