use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::Theme;
use crate::data::metric::Metric;
use crate::state::{AppState, Phase};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the metric and country selectors.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, theme: &Theme) {
    ui.heading("Compare");
    ui.separator();

    let countries: Vec<String> = match &state.dataset {
        Some(ds) => ds.countries.iter().cloned().collect(),
        None => {
            if state.loading {
                ui.label("Loading data…");
            } else {
                ui.label("No dataset loaded.");
            }
            return;
        }
    };

    // ---- Metric ----
    ui.strong("Metric");
    let current = state.selection.metric;
    egui::ComboBox::from_id_salt("metric")
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for metric in Metric::ALL {
                if ui.selectable_label(current == metric, metric.label()).clicked() {
                    state.set_metric(metric);
                }
            }
        });
    ui.add_space(8.0);

    // ---- Country A ----
    ui.label(
        RichText::new("Country")
            .strong()
            .color(theme.primary.line)
            .background_color(theme.primary.fill),
    );
    let current = state.selection.primary.clone();
    egui::ComboBox::from_id_salt("country")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for country in &countries {
                if ui.selectable_label(current == *country, country).clicked() {
                    state.set_primary(country.clone());
                }
            }
        });
    ui.add_space(8.0);

    // ---- Country B ----
    ui.label(
        RichText::new("Compare with")
            .strong()
            .color(theme.compare.line)
            .background_color(theme.compare.fill),
    );
    let current = state.selection.compare.clone();
    egui::ComboBox::from_id_salt("country_compare")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for country in &countries {
                if ui.selectable_label(current == *country, country).clicked() {
                    state.set_compare(country.clone());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Hunger Compare");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} countries",
                ds.len(),
                ds.countries.len()
            ));
            ui.separator();
        }

        let can_show_table = state.phase == Phase::Rendered;
        if ui
            .add_enabled(
                can_show_table,
                egui::SelectableLabel::new(state.show_table, "Data table"),
            )
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
