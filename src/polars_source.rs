#![cfg(feature = "polars")]

use crate::data_types::{Dataframe, MetricChannel, ResidueId, ViewIntents};
use crate::error::{ChartError, Result};
use polars::prelude::*;

/// Builds one protein's [`Dataframe`] from columns of a polars `DataFrame`.
pub struct PolarsDataframeSource {
    df: DataFrame,
    protein_id: String,
    position_col: String,
    amino_acid_col: String,
    metrics: Vec<(String, ViewIntents)>,
}

impl PolarsDataframeSource {
    pub fn new(mut df: DataFrame, protein_id: &str, position_col: &str, amino_acid_col: &str) -> Self {
        df.rechunk_mut();
        Self {
            df,
            protein_id: protein_id.to_string(),
            position_col: position_col.to_string(),
            amino_acid_col: amino_acid_col.to_string(),
            metrics: Vec::new(),
        }
    }

    /// Adds a metric column, rendered in the views `intents` names.
    pub fn with_metric(mut self, column: &str, intents: ViewIntents) -> Self {
        self.metrics.push((column.to_string(), intents));
        self
    }

    fn series(&self, name: &str) -> Result<&Series> {
        self.df
            .column(name)
            .ok()
            .and_then(|c| c.as_series())
            .ok_or_else(|| ChartError::Schema(format!("{}: missing column {name}", self.protein_id)))
    }

    fn positions(&self) -> Result<Vec<Option<ResidueId>>> {
        let s = self.series(&self.position_col)?;
        if s.dtype().is_integer() {
            let ints = s.cast(&DataType::Int64).map_err(schema)?;
            Ok(ints.i64().map_err(schema)?.into_iter().map(|v| v.map(ResidueId::Int)).collect())
        } else if s.dtype().is_float() {
            let floats = s.cast(&DataType::Float64).map_err(schema)?;
            Ok(floats.f64().map_err(schema)?.into_iter().map(|v| v.map(ResidueId::Float)).collect())
        } else {
            let text = s.cast(&DataType::String).map_err(schema)?;
            Ok(text
                .str()
                .map_err(schema)?
                .into_iter()
                .map(|v| v.map(|t| ResidueId::Text(t.to_string())))
                .collect())
        }
    }

    fn amino_acids(&self) -> Result<Vec<Option<String>>> {
        let s = self.series(&self.amino_acid_col)?.cast(&DataType::String).map_err(schema)?;
        Ok(s.str().map_err(schema)?.into_iter().map(|v| v.map(str::to_string)).collect())
    }

    fn metric(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let s = self.series(name)?.cast(&DataType::Float64).map_err(schema)?;
        Ok(s.f64().map_err(schema)?.into_iter().collect())
    }

    pub fn into_dataframe(self) -> Result<Dataframe> {
        let positions = self.positions()?;
        let amino_acids = self.amino_acids()?;
        let channels = self
            .metrics
            .iter()
            .map(|(name, intents)| {
                Ok(MetricChannel::new(name.as_str(), self.metric(name)?).with_intents(intents.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Dataframe::new(self.protein_id, positions, amino_acids, channels)
    }
}

fn schema(e: PolarsError) -> ChartError {
    ChartError::Schema(e.to_string())
}
