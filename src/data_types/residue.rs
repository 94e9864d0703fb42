use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally meaningful residue identifier.
///
/// Producers and the structure viewer serialize residue numbers either as
/// JSON numbers or as strings, so comparisons go through [`ResidueId::matches`]
/// rather than strict equality.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResidueId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ResidueId {
    /// Numeric view of the identifier. Strings are trimmed and parsed; blank
    /// strings have no numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    t.parse::<f64>().ok()
                }
            }
        }
    }

    /// Loose equality: two strings compare exactly, anything involving a
    /// number compares numerically.
    pub fn matches(&self, other: &ResidueId) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResidueId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ResidueId {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ResidueId {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ResidueId {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ResidueId {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
