//! Dataframe registry: validated per-protein arrays and the per-view series
//! built from them.

use crate::data_types::{ChartData, Dataframe, SeriesStyle, ViewKind};
use crate::error::{ChartError, Result};
use std::collections::HashSet;

/// One rendered series, aligned to the shared x data.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesDescriptor {
    pub protein: String,
    pub channel: String,
    pub style: SeriesStyle,
    pub values: Vec<Option<f64>>,
}

impl SeriesDescriptor {
    pub fn label(&self) -> &str {
        self.style.label.as_deref().unwrap_or(&self.channel)
    }

    pub fn value_at(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied().flatten()
    }
}

#[derive(Clone, Debug)]
pub struct DataframeRegistry {
    dataframes: Vec<Dataframe>,
}

impl DataframeRegistry {
    /// Validates host input. Fails without building anything if any dataframe
    /// lacks `proteinID`, `positions` or `aminoAcid`.
    pub fn from_data(data: ChartData) -> Result<Self> {
        let mut dataframes = Vec::with_capacity(data.dataframes.len());
        for (i, input) in data.dataframes.into_iter().enumerate() {
            let protein_id = input
                .protein_id
                .ok_or_else(|| ChartError::Schema(format!("dataframe {i}: missing proteinID")))?;
            let positions = input.positions.ok_or_else(|| {
                ChartError::Schema(format!("dataframe {i} ({protein_id}): missing positions"))
            })?;
            let amino_acids = input.amino_acids.ok_or_else(|| {
                ChartError::Schema(format!("dataframe {i} ({protein_id}): missing aminoAcid"))
            })?;
            dataframes.push(Dataframe::new(protein_id, positions, amino_acids, input.channels)?);
        }
        Self::from_dataframes(dataframes)
    }

    pub fn from_dataframes(dataframes: Vec<Dataframe>) -> Result<Self> {
        if dataframes.is_empty() {
            return Err(ChartError::Schema("no dataframes".to_string()));
        }
        let mut seen = HashSet::new();
        for df in &dataframes {
            if !seen.insert(df.protein_id()) {
                return Err(ChartError::Schema(format!(
                    "duplicate proteinID {}",
                    df.protein_id()
                )));
            }
        }
        Ok(Self { dataframes })
    }

    pub fn dataframes(&self) -> &[Dataframe] {
        &self.dataframes
    }

    pub fn get(&self, protein: &str) -> Option<&Dataframe> {
        self.dataframes.iter().find(|d| d.protein_id() == protein)
    }

    /// The first dataframe seeds the x data and the default labels.
    pub fn first(&self) -> &Dataframe {
        &self.dataframes[0]
    }

    pub fn len(&self) -> usize {
        self.dataframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataframes.is_empty()
    }

    /// Length of the shared x data.
    pub fn x_len(&self) -> usize {
        self.first().len()
    }

    pub fn x_values(&self) -> Vec<f64> {
        self.first().indexes().iter().map(|&i| i as f64).collect()
    }

    /// Shortest dataframe; bounds the usable index range.
    pub fn min_len(&self) -> usize {
        self.dataframes.iter().map(Dataframe::len).min().unwrap_or(0)
    }

    pub fn max_index(&self) -> usize {
        self.min_len().saturating_sub(1)
    }

    /// Every channel that declares an intent for `view`, in dataframe order
    /// then channel order, padded or truncated to [`Self::x_len`].
    pub fn series_for(&self, view: ViewKind) -> Vec<SeriesDescriptor> {
        let x_len = self.x_len();
        self.dataframes
            .iter()
            .flat_map(|df| {
                df.channels().iter().filter_map(move |channel| {
                    let style = channel.intents.for_view(view)?;
                    let mut values = channel.values.clone();
                    values.resize(x_len, None);
                    Some(SeriesDescriptor {
                        protein: df.protein_id().to_string(),
                        channel: channel.name.clone(),
                        style: style.clone(),
                        values,
                    })
                })
            })
            .collect()
    }
}
