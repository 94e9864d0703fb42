//! Legacy loader for documents keyed by protein id, each holding parallel
//! `Res`, `Aa`, `AggreProt`, `ASA` and `TM` arrays.
//!
//! Metric channels come out without view intents; hosts attach styles
//! before handing the data to the controller.

use crate::data_types::{ChartData, DataframeInput, MetricChannel, ResidueId};
use crate::error::{ChartError, Result};
use eyre::WrapErr;
use serde_json::{Map, Value};
use std::path::Path;

/// Document keys and the channel names they load into.
const METRIC_KEYS: [(&str, &str); 3] = [("AggreProt", "agg"), ("ASA", "asa"), ("TM", "tm")];

/// Reads and parses the document at `path`.
pub fn fetch_data(path: impl AsRef<Path>) -> eyre::Result<ChartData> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Could not fetch {} file!", path.display()))?;
    Ok(parse_json(&text)?)
}

pub fn parse_json(text: &str) -> Result<ChartData> {
    let value: Value = serde_json::from_str(text).map_err(|e| ChartError::Format(e.to_string()))?;
    let Value::Object(proteins) = value else {
        return Err(ChartError::Format(
            "Provided json is invalid or has the wrong format!".to_string(),
        ));
    };

    let mut dataframes = Vec::with_capacity(proteins.len());
    for (protein, entry) in proteins {
        let Value::Object(fields) = entry else {
            return Err(ChartError::Schema(format!("{protein}: expected an object")));
        };
        let positions = column(&fields, &protein, "Res")?
            .iter()
            .map(residue)
            .collect();
        let amino_acids = column(&fields, &protein, "Aa")?
            .iter()
            .map(label)
            .collect();

        let mut input = DataframeInput::new(protein.as_str())
            .with_positions(positions)
            .with_amino_acids(amino_acids);
        for (key, name) in METRIC_KEYS {
            if let Some(Value::Array(values)) = fields.get(key) {
                input = input.with_channel(MetricChannel::new(
                    name,
                    values.iter().map(metric).collect(),
                ));
            }
        }
        dataframes.push(input);
    }
    Ok(ChartData { dataframes })
}

fn column<'a>(fields: &'a Map<String, Value>, protein: &str, key: &str) -> Result<&'a Vec<Value>> {
    match fields.get(key) {
        Some(Value::Array(values)) => Ok(values),
        _ => Err(ChartError::Schema(format!("{protein}: missing {key} array"))),
    }
}

fn is_missing(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => matches!(s.as_str(), "NA" | "null" | "undefined"),
        _ => false,
    }
}

fn residue(v: &Value) -> Option<ResidueId> {
    if is_missing(v) {
        return None;
    }
    match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(ResidueId::Int(i)),
            None => n.as_f64().map(ResidueId::Float),
        },
        Value::String(s) => Some(ResidueId::Text(s.clone())),
        _ => None,
    }
}

fn metric(v: &Value) -> Option<f64> {
    if is_missing(v) {
        return None;
    }
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn label(v: &Value) -> Option<String> {
    if is_missing(v) {
        return None;
    }
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
