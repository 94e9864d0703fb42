//! Ordered, toggle-on-insert set of selected residues shared by all views.

use crate::data_types::ResidueId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub protein: String,
    pub position: ResidueId,
}

impl SelectionEntry {
    pub fn new(protein: impl Into<String>, position: impl Into<ResidueId>) -> Self {
        Self {
            protein: protein.into(),
            position: position.into(),
        }
    }

    fn is(&self, protein: &str, position: &ResidueId) -> bool {
        self.protein == protein && self.position.matches(position)
    }
}

/// Payload of `on_residue_selected_from_profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedResidue {
    pub position: ResidueId,
    pub selected: bool,
    pub protein: String,
}

/// Insertion order is kept: the newest entry is last, and panning keys off it.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    entries: Vec<SelectionEntry>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, protein: &str, position: &ResidueId) -> Option<usize> {
        self.entries.iter().position(|e| e.is(protein, position))
    }

    pub fn contains(&self, protein: &str, position: &ResidueId) -> bool {
        self.find(protein, position).is_some()
    }

    /// Removes the pair if present, appends it otherwise. Returns whether the
    /// pair is selected afterwards.
    pub fn toggle(&mut self, protein: &str, position: &ResidueId) -> bool {
        match self.find(protein, position) {
            Some(i) => {
                self.entries.remove(i);
                false
            }
            None => {
                self.entries.push(SelectionEntry::new(protein, position.clone()));
                true
            }
        }
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, protein: &str, position: &ResidueId) -> bool {
        match self.find(protein, position) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Empties the set. With `fire`, returns one deselect notification per
    /// previous entry, oldest first; otherwise returns nothing.
    pub fn clear(&mut self, fire: bool) -> Vec<SelectedResidue> {
        let drained = std::mem::take(&mut self.entries);
        if !fire {
            return Vec::new();
        }
        drained
            .into_iter()
            .map(|e| SelectedResidue {
                position: e.position,
                selected: false,
                protein: e.protein,
            })
            .collect()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// The newest `count` entries, oldest of them first.
    pub fn recent(&self, count: usize) -> &[SelectionEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&SelectionEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
