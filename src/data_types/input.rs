//! Loosely typed chart input, as handed over by the host.
//!
//! Every field is optional here so that missing columns surface as schema
//! errors from the registry instead of opaque deserialization failures.

use super::dataframe::MetricChannel;
use super::residue::ResidueId;
use super::style::ViewIntents;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Either `{ "data": T }` or a bare `T`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Column<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Column<T> {
    fn into_inner(self) -> T {
        match self {
            Column::Wrapped { data } => data,
            Column::Bare(data) => data,
        }
    }
}

#[derive(Deserialize)]
struct ChannelInput {
    data: Vec<Option<f64>>,
    #[serde(flatten)]
    intents: ViewIntents,
}

/// One protein's arrays before validation.
#[derive(Clone, Debug, Default)]
pub struct DataframeInput {
    pub protein_id: Option<String>,
    pub positions: Option<Vec<Option<ResidueId>>>,
    pub amino_acids: Option<Vec<Option<String>>>,
    pub channels: Vec<MetricChannel>,
}

impl DataframeInput {
    pub fn new(protein_id: impl Into<String>) -> Self {
        Self {
            protein_id: Some(protein_id.into()),
            ..Default::default()
        }
    }

    pub fn with_positions(mut self, positions: Vec<Option<ResidueId>>) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn with_amino_acids(mut self, amino_acids: Vec<Option<String>>) -> Self {
        self.amino_acids = Some(amino_acids);
        self
    }

    pub fn with_channel(mut self, channel: MetricChannel) -> Self {
        self.channels.push(channel);
        self
    }

    fn from_json_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut out = Self::default();
        // Map iteration follows document order (`preserve_order`), which
        // fixes the series order of every view.
        for (key, value) in map {
            match key.as_str() {
                "proteinID" => {
                    out.protein_id = Some(serde_json::from_value::<Column<String>>(value)?.into_inner());
                }
                "res" => {
                    out.positions = Some(
                        serde_json::from_value::<Column<Vec<Option<ResidueId>>>>(value)?.into_inner(),
                    );
                }
                "aa" => {
                    out.amino_acids = Some(
                        serde_json::from_value::<Column<Vec<Option<String>>>>(value)?.into_inner(),
                    );
                }
                "indexes" => {}
                _ => {
                    let channel: ChannelInput = serde_json::from_value(value)?;
                    out.channels
                        .push(MetricChannel::new(key, channel.data).with_intents(channel.intents));
                }
            }
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for DataframeInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_json_map(map).map_err(de::Error::custom)
    }
}

/// `{ "dataframes": [...] }`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartData {
    pub dataframes: Vec<DataframeInput>,
}

impl ChartData {
    pub fn from_json_str(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
