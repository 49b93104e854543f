use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use serde_json::Value as JsonValue;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` – first worksheet only
/// * `.csv`  – header line plus records
/// * `.json` – top-level array of arrays of scalar cells
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let grid = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" => read_workbook_grid(path)?,
        "csv" => read_csv_grid(path)?,
        "json" => read_json_grid(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Dataset::from_grid(grid).context("normalizing sheet")
}

// ---------------------------------------------------------------------------
// Workbook (xlsx) loader
// ---------------------------------------------------------------------------

/// Read the first worksheet of a workbook into the raw cell grid.
fn read_workbook_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .context("workbook contains no sheets")?;

    let range = workbook
        .worksheet_range(first)
        .with_context(|| format!("reading sheet '{first}'"))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

/// Coerce a workbook cell to the engine's text representation.
///
/// Native datetime cells keep their serial number so the date decoder
/// applies uniformly downstream.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => float_text(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{e:?}"),
        Data::DateTime(dt) => float_text(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Integral floats print without a trailing `.0` so they stay
/// numeric-sortable and serial-decodable as text.
fn float_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv_from(file)
}

/// Read every CSV record, the header line included, into the raw grid.
fn read_csv_from<R: std::io::Read>(input: R) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut grid = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        grid.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(grid)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: an array of rows, each an array of scalar cells.
///
/// ```json
/// [
///   ["Name", "Role", "Birthday"],
///   ["Alice", "Support", 44927]
/// ]
/// ```
fn read_json_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    json_grid_from_str(&text)
}

fn json_grid_from_str(text: &str) -> Result<Vec<Vec<String>>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut grid = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let cells = row
            .as_array()
            .with_context(|| format!("Row {i} is not a JSON array"))?;
        grid.push(cells.iter().map(json_cell_text).collect());
    }
    Ok(grid)
}

fn json_cell_text(val: &JsonValue) -> String {
    match val {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_records_become_the_raw_grid() {
        let input = "Name,Role\nAlice,Support\nBob,\n";
        let grid = read_csv_from(input.as_bytes()).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["Name", "Role"]);
        assert_eq!(grid[2], vec!["Bob", ""]);
    }

    #[test]
    fn ragged_csv_rows_are_accepted() {
        let input = "Name,Role,Team\nAlice\n";
        let grid = read_csv_from(input.as_bytes()).unwrap();
        assert_eq!(grid[1], vec!["Alice"]);
    }

    #[test]
    fn json_cells_are_coerced_to_text() {
        let grid =
            json_grid_from_str(r#"[["Name","Birthday"],["Alice",44927],["Bob",null]]"#).unwrap();
        assert_eq!(grid[1], vec!["Alice", "44927"]);
        assert_eq!(grid[2], vec!["Bob", ""]);
    }

    #[test]
    fn json_must_be_an_array_of_arrays() {
        assert!(json_grid_from_str(r#"{"rows": []}"#).is_err());
        assert!(json_grid_from_str(r#"[{"Name": "Alice"}]"#).is_err());
    }

    #[test]
    fn integral_floats_print_without_a_fraction() {
        assert_eq!(float_text(44927.0), "44927");
        assert_eq!(float_text(-3.0), "-3");
        assert_eq!(float_text(2.5), "2.5");
    }

    #[test]
    fn workbook_cells_coerce_to_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("x".into())), "x");
        assert_eq!(cell_text(&Data::Float(44927.0)), "44927");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }
}
