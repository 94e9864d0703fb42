use crate::selection::SelectionState;
use crate::threshold::Threshold;

/// Labels shown on the shared x axis, one per index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelSource {
    protein: Option<String>,
    labels: Vec<Option<String>>,
}

impl LabelSource {
    pub fn new(protein: impl Into<String>, labels: Vec<Option<String>>) -> Self {
        Self {
            protein: Some(protein.into()),
            labels,
        }
    }

    /// Protein whose amino-acid sequence is currently displayed.
    pub fn protein(&self) -> Option<&str> {
        self.protein.as_deref()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).and_then(|l| l.as_deref())
    }

    pub fn labels(&self) -> &[Option<String>] {
        &self.labels
    }

    pub fn replace(&mut self, protein: impl Into<String>, labels: Vec<Option<String>>) {
        self.protein = Some(protein.into());
        self.labels = labels;
    }
}

/// State shared by the three views of one chart instance.
///
/// Owned by the controller; views only ever see it through `&ChartState`.
#[derive(Clone, Debug, Default)]
pub struct ChartState {
    pub selection: SelectionState,
    pub threshold: Threshold,
    pub labels: LabelSource,
}
