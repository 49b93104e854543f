use std::cmp::Ordering;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Sort state and numeric-aware stable sorting
// ---------------------------------------------------------------------------

/// Current sort inputs: the header index being sorted on (`None` leaves the
/// incoming order untouched) and the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<usize>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            column: None,
            ascending: true,
        }
    }
}

/// Stable sort of row indices by the configured column.
///
/// `column: None` returns the input unchanged. Ties compare equal, so rows
/// with the same key keep their relative input order. Descending reverses
/// the comparator result (ties stay ties, stability is unaffected).
pub fn sorted_indices(dataset: &Dataset, indices: &[usize], state: &SortState) -> Vec<usize> {
    let mut out = indices.to_vec();
    let Some(col) = state.column else {
        return out;
    };
    let Some(header) = dataset.headers.get(col) else {
        return out;
    };

    out.sort_by(|&a, &b| {
        let ord = compare_cells(cell(dataset, a, header), cell(dataset, b, header));
        if state.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    out
}

fn cell<'a>(dataset: &'a Dataset, row: usize, header: &str) -> &'a str {
    dataset.rows[row]
        .get(header)
        .map(String::as_str)
        .unwrap_or("")
}

/// Compare two cell texts: numerically when both sides parse as numbers
/// (empty text counts as zero), code-point text order otherwise.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Empty text coerces to zero; anything else must parse as a finite f64.
fn parse_numeric(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
