use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::datetime;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered-and-sorted table in the central panel.
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a spreadsheet to view it  (File → Open…)");
        });
        return;
    };

    let headers = dataset.headers.clone();
    let sort = state.sort;

    // Header clicks are applied after rendering; the sort state feeds the
    // next recompute.
    let mut clicked_column: Option<usize> = None;

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("data_table")
                .striped(true)
                .min_col_width(80.0)
                .show(ui, |ui: &mut Ui| {
                    for (i, header) in headers.iter().enumerate() {
                        let label = match sort.column {
                            Some(c) if c == i => {
                                let arrow = if sort.ascending { "▲" } else { "▼" };
                                format!("{header} {arrow}")
                            }
                            _ => header.clone(),
                        };
                        if ui.button(RichText::new(label).strong()).clicked() {
                            clicked_column = Some(i);
                        }
                    }
                    ui.end_row();

                    for &row_idx in &state.visible_rows {
                        let row = &dataset.rows[row_idx];
                        for header in &headers {
                            let value = row.get(header).map(String::as_str).unwrap_or("");
                            if is_date_column(header) {
                                ui.label(datetime::decode_cell(value));
                            } else {
                                ui.label(value);
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(col) = clicked_column {
        state.toggle_sort(col);
    }
}

/// Presentation policy for which columns render through the date decoder.
fn is_date_column(header: &str) -> bool {
    let lower = header.to_lowercase();
    lower.contains("birthday") || lower.contains("date")
}
