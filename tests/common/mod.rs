#![allow(dead_code)]

use residue_chart::data_types::{SeriesStyle, ViewIntents};
use residue_chart::plot_engine::{
    Axis, PlotEngine, PlotSize, PlotSpec, ScaleRange, SelectRect, SeriesToggle,
};
use residue_chart::{
    ChartCallbacks, ChartConfig, ChartController, ChartData, ChartHost, DataframeInput,
    MetricChannel, ResidueId, Result,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const WIDTH: f32 = 545.0;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    Init { series: usize, x_len: usize },
    SetScale(Axis, ScaleRange),
    SetSelect(SelectRect, bool),
    SetSeries(usize, bool),
    Redraw,
    SetSize(PlotSize),
}

/// Shared log of the calls one engine received.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<EngineCall>>>);

impl Recorder {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn redraws(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|c| matches!(c, EngineCall::Redraw))
            .count()
    }

    pub fn last_select(&self) -> Option<SelectRect> {
        self.0.borrow().iter().rev().find_map(|c| match c {
            EngineCall::SetSelect(r, _) => Some(*r),
            _ => None,
        })
    }

    pub fn last_scale(&self, axis: Axis) -> Option<ScaleRange> {
        self.0.borrow().iter().rev().find_map(|c| match c {
            EngineCall::SetScale(a, r) if *a == axis => Some(*r),
            _ => None,
        })
    }
}

pub struct RecordingEngine {
    log: Recorder,
}

impl PlotEngine for RecordingEngine {
    fn init(&mut self, spec: &PlotSpec) {
        self.log.0.borrow_mut().push(EngineCall::Init {
            series: spec.series.len(),
            x_len: spec.x.len(),
        });
    }

    fn set_scale(&mut self, axis: Axis, range: ScaleRange) {
        self.log.0.borrow_mut().push(EngineCall::SetScale(axis, range));
    }

    fn set_select(&mut self, rect: SelectRect, fire_events: bool) {
        self.log.0.borrow_mut().push(EngineCall::SetSelect(rect, fire_events));
    }

    fn set_series(&mut self, index: usize, toggle: SeriesToggle) {
        self.log.0.borrow_mut().push(EngineCall::SetSeries(index, toggle.show));
    }

    fn redraw(&mut self) {
        self.log.0.borrow_mut().push(EngineCall::Redraw);
    }

    fn set_size(&mut self, size: PlotSize) {
        self.log.0.borrow_mut().push(EngineCall::SetSize(size));
    }
}

pub struct Harness {
    pub chart: ChartController,
    pub overview: Recorder,
    pub profile: Recorder,
    pub sequence: Recorder,
}

impl Harness {
    pub fn clear_logs(&self) {
        self.overview.clear();
        self.profile.clear();
        self.sequence.clear();
    }
}

fn engine(log: &Recorder) -> Box<dyn PlotEngine> {
    Box::new(RecordingEngine { log: log.clone() })
}

pub fn all_views() -> ViewIntents {
    ViewIntents {
        overview: Some(SeriesStyle::default()),
        profile: Some(SeriesStyle::default()),
        sequence: Some(SeriesStyle::default()),
    }
}

/// `n` residues numbered from `first`, with an `agg` channel shown in every
/// view.
pub fn protein(id: &str, n: usize, first: i64) -> DataframeInput {
    let acids = ["M", "K", "L", "V", "A"];
    DataframeInput::new(id)
        .with_positions((0..n).map(|i| Some(ResidueId::Int(first + i as i64))).collect())
        .with_amino_acids((0..n).map(|i| Some(acids[i % acids.len()].to_string())).collect())
        .with_channel(
            MetricChannel::new("agg", (0..n).map(|i| Some((i % 10) as f64 / 10.0)).collect())
                .with_intents(all_views()),
        )
}

pub fn data(inputs: Vec<DataframeInput>) -> ChartData {
    ChartData { dataframes: inputs }
}

pub fn try_harness(data: ChartData, config: ChartConfig, callbacks: ChartCallbacks) -> Result<Harness> {
    let overview = Recorder::default();
    let profile = Recorder::default();
    let sequence = Recorder::default();
    let host = ChartHost {
        width: WIDTH,
        overview: engine(&overview),
        profile: engine(&profile),
        sequence: engine(&sequence),
    };
    let chart = ChartController::create(data, config, callbacks, host)?;
    Ok(Harness {
        chart,
        overview,
        profile,
        sequence,
    })
}

pub fn harness_with(data: ChartData, config: ChartConfig, callbacks: ChartCallbacks) -> Harness {
    try_harness(data, config, callbacks).unwrap()
}

pub fn harness(data: ChartData) -> Harness {
    harness_with(data, ChartConfig::default(), ChartCallbacks::default())
}

/// One protein `a` with 101 residues numbered 1..=101, so the overview
/// maps one index to 5 pixels.
pub fn single() -> Harness {
    harness(self::data(vec![protein("a", 101, 1)]))
}
