//! residue_chart crate for linked per-residue protein charts

pub mod config;
pub mod controller;
pub mod coordinator;
pub mod data_types;
pub mod error;
pub mod index_mapper;
pub mod interaction;
pub mod loader;
pub mod plot_engine;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod registry;
pub mod scales;
pub mod selection;
pub mod threshold;
pub mod view_controller;
pub mod views;

pub use config::{ChartCallbacks, ChartConfig};
pub use controller::{ChartController, ChartHost};
pub use data_types::{ChartData, Dataframe, DataframeInput, MetricChannel, ResidueId, ViewKind, ViewWindow};
pub use error::{ChartError, Result};
pub use plot_engine::{PlotEngine, PlotHook};
pub use selection::{SelectedResidue, SelectionEntry};
pub use views::Overlay;
