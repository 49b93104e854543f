use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – facet filters
// ---------------------------------------------------------------------------

/// Render the left facet panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No file loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the loop.
    let facets = state.facets.clone();
    let options = state.facet_options.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for facet in &facets {
                let Some(header) = &facet.header else {
                    continue;
                };
                let Some(values) = options.get(&facet.target) else {
                    continue;
                };

                let selected = state
                    .filters
                    .selections
                    .get(&facet.target)
                    .cloned()
                    .unwrap_or_default();

                ui.strong(header.as_str());
                egui::ComboBox::from_id_salt(&facet.target)
                    .selected_text(if selected.is_empty() {
                        "All".to_string()
                    } else {
                        selected.clone()
                    })
                    .show_ui(ui, |ui: &mut Ui| {
                        if ui.selectable_label(selected.is_empty(), "All").clicked() {
                            state.select_facet(&facet.target, String::new());
                        }
                        for value in values {
                            if ui
                                .selectable_label(selected == *value, value)
                                .clicked()
                            {
                                state.select_facet(&facet.target, value.clone());
                            }
                        }
                    });
                ui.add_space(8.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Search:");
        if ui.text_edit_singleline(&mut state.filters.query).changed() {
            state.refresh();
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} visible",
                ds.len(),
                state.visible_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spreadsheet")
        .add_filter("Supported files", &["xlsx", "xlsm", "xls", "csv", "json"])
        .add_filter("Excel workbook", &["xlsx", "xlsm", "xls"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with headers {:?}",
                    dataset.len(),
                    dataset.headers
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
