use super::residue::ResidueId;
use super::style::ViewIntents;
use crate::error::{ChartError, Result};

/// One named per-residue metric (aggregation, exposure, transmembrane, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct MetricChannel {
    pub name: String,
    pub values: Vec<Option<f64>>,
    pub intents: ViewIntents,
}

impl MetricChannel {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
            intents: ViewIntents::default(),
        }
    }

    pub fn with_intents(mut self, intents: ViewIntents) -> Self {
        self.intents = intents;
        self
    }
}

/// Complete set of per-residue arrays for one protein.
///
/// All sequences share one length; `indexes` is derived on construction and
/// never changes afterwards.
#[derive(Clone, Debug)]
pub struct Dataframe {
    protein_id: String,
    positions: Vec<Option<ResidueId>>,
    amino_acids: Vec<Option<String>>,
    channels: Vec<MetricChannel>,
    indexes: Vec<usize>,
}

impl Dataframe {
    pub fn new(
        protein_id: impl Into<String>,
        positions: Vec<Option<ResidueId>>,
        amino_acids: Vec<Option<String>>,
        channels: Vec<MetricChannel>,
    ) -> Result<Self> {
        let protein_id = protein_id.into();
        let len = positions.len();
        if amino_acids.len() != len {
            return Err(ChartError::Schema(format!(
                "protein {protein_id}: aminoAcid has {} entries, positions has {len}",
                amino_acids.len()
            )));
        }
        if let Some(c) = channels.iter().find(|c| c.values.len() != len) {
            return Err(ChartError::Schema(format!(
                "protein {protein_id}: channel {} has {} entries, positions has {len}",
                c.name,
                c.values.len()
            )));
        }
        Ok(Self {
            protein_id,
            positions,
            amino_acids,
            channels,
            indexes: (0..len).collect(),
        })
    }

    pub fn protein_id(&self) -> &str {
        &self.protein_id
    }

    pub fn positions(&self) -> &[Option<ResidueId>] {
        &self.positions
    }

    pub fn amino_acids(&self) -> &[Option<String>] {
        &self.amino_acids
    }

    pub fn channels(&self) -> &[MetricChannel] {
        &self.channels
    }

    pub fn channel(&self, name: &str) -> Option<&MetricChannel> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Residue at an array index, `None` for unresolved residues or indexes
    /// past the end.
    pub fn position_at(&self, idx: usize) -> Option<&ResidueId> {
        self.positions.get(idx).and_then(|p| p.as_ref())
    }

    pub fn amino_acid_at(&self, idx: usize) -> Option<&str> {
        self.amino_acids.get(idx).and_then(|a| a.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_are_derived() {
        let df = Dataframe::new(
            "p",
            vec![Some(ResidueId::Int(10)), None, Some(ResidueId::Int(12))],
            vec![Some("A".into()), None, Some("C".into())],
            vec![],
        )
        .unwrap();
        assert_eq!(df.indexes(), &[0, 1, 2]);
        assert_eq!(df.position_at(1), None);
        assert_eq!(df.amino_acid_at(2), Some("C"));
    }

    #[test]
    fn test_channel_length_mismatch_is_schema_error() {
        let err = Dataframe::new(
            "p",
            vec![Some(ResidueId::Int(1))],
            vec![Some("A".into())],
            vec![MetricChannel::new("agg", vec![Some(0.1), Some(0.2)])],
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::Schema(_)));
    }
}
