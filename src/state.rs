use std::collections::{BTreeMap, BTreeSet};

use crate::data::facet::{self, Facet};
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::Dataset;
use crate::data::sort::{SortState, sorted_indices};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is immutable once loaded; search, facet selections and the
/// sort column are the only mutable inputs, and every change recomputes
/// `visible_rows` from scratch through the pure engine functions.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Facet columns resolved once against the dataset's headers.
    pub facets: Vec<Facet>,

    /// facet target → sorted distinct option values. Recomputed only when
    /// the dataset changes.
    pub facet_options: BTreeMap<String, BTreeSet<String>>,

    /// Free-text query plus per-facet selections.
    pub filters: FilterState,

    /// Active sort column and direction.
    pub sort: SortState,

    /// Row indices passing the filters, in display order (cached).
    pub visible_rows: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            facets: Vec::new(),
            facet_options: BTreeMap::new(),
            filters: FilterState::default(),
            sort: SortState::default(),
            visible_rows: Vec::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Install a newly loaded dataset: resolve facets, build their option
    /// sets, reset filters and sort, and show every row.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.facets = facet::resolve_facets(&dataset.headers);
        self.facet_options = self
            .facets
            .iter()
            .map(|f| (f.target.clone(), facet::facet_options(&dataset, f)))
            .collect();

        self.filters = FilterState::default();
        self.sort = SortState::default();
        self.visible_rows = (0..dataset.len()).collect();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_rows` from the current filter and sort state.
    pub fn refresh(&mut self) {
        if let Some(ds) = &self.dataset {
            let filtered = filtered_indices(ds, &self.facets, &self.filters);
            self.visible_rows = sorted_indices(ds, &filtered, &self.sort);
        }
    }

    /// Select a facet option (empty string clears the selection).
    pub fn select_facet(&mut self, target: &str, value: String) {
        if value.is_empty() {
            self.filters.selections.remove(target);
        } else {
            self.filters.selections.insert(target.to_string(), value);
        }
        self.refresh();
    }

    /// Header click policy: a new column always starts ascending,
    /// re-clicking the active column toggles direction.
    pub fn toggle_sort(&mut self, column: usize) {
        if self.sort.column == Some(column) {
            self.sort.ascending = !self.sort.ascending;
        } else {
            self.sort = SortState {
                column: Some(column),
                ascending: true,
            };
        }
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datetime;

    fn roster_state() -> AppState {
        let dataset = Dataset::from_grid(vec![
            vec!["Name".into(), "Role".into(), "Birthday".into()],
            vec!["Alice".into(), "Support".into(), "44927".into()],
            vec!["Bob".into(), "".into(), "".into()],
        ])
        .unwrap();
        let mut state = AppState::default();
        state.set_dataset(dataset);
        state
    }

    #[test]
    fn loading_a_dataset_shows_every_row() {
        let state = roster_state();
        assert_eq!(state.visible_rows, vec![0, 1]);
        let roles = state.facet_options.get("role").unwrap();
        assert_eq!(roles.len(), 1);
        assert!(roles.contains("Support"));
    }

    #[test]
    fn search_then_decode_roundtrip() {
        // Grid from the sheet → both rows kept (Bob has a non-empty Name),
        // query narrows to Alice, and her Birthday cell decodes.
        let mut state = roster_state();
        state.filters.query = "alice".to_string();
        state.refresh();
        assert_eq!(state.visible_rows, vec![0]);

        let ds = state.dataset.as_ref().unwrap();
        let birthday = &ds.rows[state.visible_rows[0]]["Birthday"];
        assert_eq!(datetime::decode_cell(birthday), "2023-01-01");
    }

    #[test]
    fn new_sort_column_starts_ascending() {
        let mut state = roster_state();
        state.toggle_sort(0);
        assert_eq!(state.sort.column, Some(0));
        assert!(state.sort.ascending);

        state.toggle_sort(0);
        assert!(!state.sort.ascending);

        // Switching columns resets the direction.
        state.toggle_sort(1);
        assert_eq!(state.sort.column, Some(1));
        assert!(state.sort.ascending);
    }

    #[test]
    fn facet_selection_narrows_and_clears() {
        let mut state = roster_state();
        state.select_facet("role", "Support".to_string());
        assert_eq!(state.visible_rows, vec![0]);

        state.select_facet("role", String::new());
        assert_eq!(state.visible_rows, vec![0, 1]);
    }
}
