use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Row – one record of the loaded sheet
// ---------------------------------------------------------------------------

/// A single row: header label → cell text.
///
/// Cells stay text; numeric-looking values are interpreted contextually by
/// the sort comparator and the date decoder.
pub type Row = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Dataset – the normalized sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    /// The grid had no rows at all, not even a header row.
    #[error("sheet contains no rows")]
    EmptySheet,
}

/// The normalized dataset: ordered headers plus the kept rows.
///
/// Immutable once built. Every derived view (facet options, filtered
/// indices, sort order) is recomputed from it on demand.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Header labels in source column order, trimmed. May contain
    /// duplicates or empty labels.
    pub headers: Vec<String>,
    /// Kept rows in source order. Every row carries an entry for each
    /// distinct header label.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from a raw cell grid.
    ///
    /// The first grid row becomes the header list. Every later row is
    /// zipped positionally against the headers: missing trailing cells
    /// become empty text, extra trailing cells are ignored. Rows whose
    /// every cell is empty are dropped.
    ///
    /// Duplicate header labels are tolerated; the later column wins in the
    /// row map, matching the source's lookup semantics.
    pub fn from_grid(grid: Vec<Vec<String>>) -> Result<Self, IngestError> {
        let mut grid_rows = grid.into_iter();
        let headers: Vec<String> = match grid_rows.next() {
            Some(first) => first.iter().map(|c| c.trim().to_string()).collect(),
            None => return Err(IngestError::EmptySheet),
        };

        let mut rows = Vec::new();
        for cells in grid_rows {
            let mut row = Row::new();
            for (i, header) in headers.iter().enumerate() {
                let value = cells.get(i).cloned().unwrap_or_default();
                row.insert(header.clone(), value);
            }
            if row.values().any(|v| !v.is_empty()) {
                rows.push(row);
            }
        }

        Ok(Dataset { headers, rows })
    }

    /// Number of kept rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn empty_grid_is_an_error() {
        assert_eq!(
            Dataset::from_grid(Vec::new()).unwrap_err(),
            IngestError::EmptySheet
        );
    }

    #[test]
    fn header_only_grid_yields_no_rows() {
        let ds = Dataset::from_grid(grid(&[&["Name", "Role"]])).unwrap();
        assert_eq!(ds.headers, vec!["Name", "Role"]);
        assert!(ds.is_empty());
    }

    #[test]
    fn headers_are_trimmed() {
        let ds = Dataset::from_grid(grid(&[&["  Name ", "Role  "]])).unwrap();
        assert_eq!(ds.headers, vec!["Name", "Role"]);
    }

    #[test]
    fn rows_with_only_empty_cells_are_dropped() {
        let ds = Dataset::from_grid(grid(&[
            &["Name", "Role"],
            &["Alice", "Support"],
            &["", ""],
            &["Bob", ""],
        ]))
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0]["Name"], "Alice");
        assert_eq!(ds.rows[1]["Name"], "Bob");
    }

    #[test]
    fn missing_trailing_cells_become_empty_text() {
        let ds = Dataset::from_grid(grid(&[&["Name", "Role", "Team"], &["Alice"]])).unwrap();
        assert_eq!(ds.rows[0]["Role"], "");
        assert_eq!(ds.rows[0]["Team"], "");
    }

    #[test]
    fn extra_trailing_cells_are_ignored() {
        let ds = Dataset::from_grid(grid(&[&["Name"], &["Alice", "stray"]])).unwrap();
        assert_eq!(ds.rows[0].len(), 1);
        assert_eq!(ds.rows[0]["Name"], "Alice");
    }

    #[test]
    fn cell_values_are_not_trimmed() {
        let ds = Dataset::from_grid(grid(&[&["Name"], &[" Alice "]])).unwrap();
        assert_eq!(ds.rows[0]["Name"], " Alice ");
    }

    #[test]
    fn later_duplicate_header_wins() {
        let ds = Dataset::from_grid(grid(&[&["Name", "Name"], &["first", "second"]])).unwrap();
        assert_eq!(ds.rows[0]["Name"], "second");
    }

    #[test]
    fn source_row_order_is_preserved() {
        let ds = Dataset::from_grid(grid(&[
            &["Name"],
            &["Charlie"],
            &["Alice"],
            &["Bob"],
        ]))
        .unwrap();
        let names: Vec<&str> = ds.rows.iter().map(|r| r["Name"].as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
    }
}
