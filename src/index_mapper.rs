//! Residue position to array index resolution.

use crate::data_types::ResidueId;
use crate::registry::DataframeRegistry;
use tracing::trace;

pub struct IndexMapper;

impl IndexMapper {
    /// Array index of `position` within `protein`'s dataframe, first match
    /// wins. `None` covers both an unknown protein and an unknown residue;
    /// callers treat it as a no-op.
    pub fn resolve(
        registry: &DataframeRegistry,
        protein: &str,
        position: &ResidueId,
    ) -> Option<usize> {
        let found = registry.get(protein).and_then(|df| {
            df.positions()
                .iter()
                .position(|p| p.as_ref().is_some_and(|p| p.matches(position)))
        });
        if found.is_none() {
            trace!(protein, %position, "residue not found");
        }
        found
    }
}
