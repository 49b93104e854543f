use std::collections::BTreeMap;

use super::facet::Facet;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter predicate: free-text query plus per-facet selection
// ---------------------------------------------------------------------------

/// Current filter inputs.
///
/// `selections` maps facet target → selected option. A missing key or an
/// empty value means the facet is unconstrained. The engine only reads
/// this; the UI owns mutation.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Matched case-insensitively as a substring against every cell.
    pub query: String,
    pub selections: BTreeMap<String, String>,
}

/// Indices of rows passing the query and every active facet selection.
///
/// Order preserving: the result is a subsequence of `0..dataset.len()`.
/// A row passes when:
/// * the query is empty, or some cell contains it case-insensitively, and
/// * for every facet with a non-empty selection, the row's value at the
///   resolved header equals the selection exactly (case-sensitive).
///   Absent facets impose no constraint regardless of selection state.
pub fn filtered_indices(dataset: &Dataset, facets: &[Facet], state: &FilterState) -> Vec<usize> {
    let query = state.query.to_lowercase();

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            if !query.is_empty() && !row.values().any(|v| v.to_lowercase().contains(&query)) {
                return false;
            }
            for facet in facets {
                let Some(header) = &facet.header else {
                    continue;
                };
                let Some(selected) = state.selections.get(&facet.target) else {
                    continue;
                };
                if selected.is_empty() {
                    continue;
                }
                if row.get(header).map(String::as_str) != Some(selected.as_str()) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}
