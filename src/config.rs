//! Chart configuration. Every field has a default, so a host can pass a
//! partial JSON object with camelCase keys.

use crate::selection::SelectedResidue;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridStyle {
    pub grid_color: String,
    pub width: f32,
    pub dash: Vec<f32>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            grid_color: "#dedede".to_string(),
            width: 1.0,
            dash: vec![],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStyle {
    pub width: f32,
    pub size: f32,
    pub dash: Vec<f32>,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            size: 10.0,
            dash: vec![],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisOptions {
    pub show: bool,
    pub label_gap: f32,
    pub label_size: f32,
    pub gap: f32,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            show: true,
            label_gap: 0.0,
            label_size: 30.0,
            gap: 5.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThresholdStyle {
    pub stroke: String,
    pub dash: Vec<f32>,
    pub span_gaps: bool,
}

impl Default for ThresholdStyle {
    fn default() -> Self {
        Self {
            stroke: "rgba(0,0,0,0.5)".to_string(),
            dash: vec![10.0, 10.0],
            span_gaps: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub threshold: ThresholdStyle,
    pub column_highlight_color_hover: String,
    pub column_highlight_color_selected: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            threshold: ThresholdStyle::default(),
            column_highlight_color_hover: "rgba(0,0,0,0.04)".to_string(),
            column_highlight_color_selected: "rgba(52,138,167,0.15)".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Adds a render-time overlay to every view.
    pub debug: bool,
    pub legend_as_tooltip: bool,
    /// Number of indexes shown by the zoomed views.
    pub view_size: usize,
    /// Width reserved for y axis labels.
    pub left_offset: f32,
    /// Minimum pixel spacing between x labels before they are hidden.
    pub label_break_point: f32,
    pub column_highlight: bool,
    pub display_threshold_line_in_ranger: bool,
    pub ranger_title: String,
    pub profile_plot_title: String,
    pub sequence_plot_title: String,
    pub grid: GridStyle,
    pub ticks: TickStyle,
    pub axis: AxesConfig,
    // legacy key spelling
    #[serde(alias = "pallette")]
    pub palette: Palette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            debug: false,
            legend_as_tooltip: false,
            view_size: 15,
            left_offset: 45.0,
            label_break_point: 8.0,
            column_highlight: true,
            display_threshold_line_in_ranger: true,
            ranger_title: "Ranger".to_string(),
            profile_plot_title: "Aggregation profile".to_string(),
            sequence_plot_title: "Sequence".to_string(),
            grid: GridStyle::default(),
            ticks: TickStyle::default(),
            axis: AxesConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

pub type AreaSelectedFn = Box<dyn FnMut(usize, usize)>;
pub type ResiduesSelectedFn = Box<dyn FnMut(&[SelectedResidue])>;

/// Host callbacks. Unset callbacks are no-ops.
#[derive(Default)]
pub struct ChartCallbacks {
    pub on_area_selected: Option<AreaSelectedFn>,
    pub on_residue_selected_from_profile: Option<ResiduesSelectedFn>,
}

impl ChartCallbacks {
    pub fn on_area_selected(mut self, f: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_area_selected = Some(Box::new(f));
        self
    }

    pub fn on_residue_selected_from_profile(
        mut self,
        f: impl FnMut(&[SelectedResidue]) + 'static,
    ) -> Self {
        self.on_residue_selected_from_profile = Some(Box::new(f));
        self
    }

    pub(crate) fn area_selected(&mut self, min: usize, max: usize) {
        if let Some(f) = self.on_area_selected.as_mut() {
            f(min, max);
        }
    }

    pub(crate) fn residues_selected(&mut self, residues: &[SelectedResidue]) {
        if let Some(f) = self.on_residue_selected_from_profile.as_mut() {
            f(residues);
        }
    }
}
