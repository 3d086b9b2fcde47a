use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::Theme;
use crate::data::metric::Metric;
use crate::state::AppState;

/// Placeholder for a year one series has no value for.
pub const GAP: &str = "–";

/// Year-by-year view of both series on the shared axis.
pub fn aligned_table(ui: &mut Ui, state: &AppState, theme: &Theme) {
    let Some(cmp) = &state.comparison else {
        return;
    };
    if cmp.axis.is_empty() {
        ui.label("No values recorded for this selection.");
        return;
    }
    let rows = cmp.aligned_rows();
    let metric = cmp.metric;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .columns(Column::remainder(), 2)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.label(RichText::new(&cmp.primary.label).strong().color(theme.primary.line));
            });
            header.col(|ui| {
                ui.label(RichText::new(&cmp.compare.label).strong().color(theme.compare.line));
            });
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let (year, a, b) = rows[row.index()];
                row.col(|ui| {
                    ui.label(year.to_string());
                });
                row.col(|ui| {
                    ui.label(cell_text(metric, a));
                });
                row.col(|ui| {
                    ui.label(cell_text(metric, b));
                });
            });
        });
}

fn cell_text(metric: Metric, value: Option<f64>) -> String {
    value.map_or_else(|| GAP.to_string(), |v| metric.format_value(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_are_not_zero_filled() {
        assert_eq!(cell_text(Metric::Stunting, None), GAP);
        assert_eq!(cell_text(Metric::Stunting, Some(0.0)), "0.0%");
        assert_eq!(cell_text(Metric::CalorieSupply, Some(2500.4)), "2500 kcal");
    }
}
