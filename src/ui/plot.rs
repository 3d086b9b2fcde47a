use eframe::egui::{RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::Theme;
use crate::state::{tooltip_text, AppState, LOAD_ERROR_MESSAGE};

// ---------------------------------------------------------------------------
// Comparison chart (central panel)
// ---------------------------------------------------------------------------

/// Render the two-country line chart.
///
/// Years missing from one series are not drawn as points; the line runs
/// straight across the gap.
pub fn comparison_plot(ui: &mut Ui, state: &mut AppState, theme: &Theme) {
    let reset_bounds = state.take_bounds_dirty();

    let cmp = match &state.comparison {
        Some(cmp) => cmp,
        None => {
            let message = if state.loading {
                "Loading data…"
            } else {
                state.status_message.as_deref().unwrap_or(LOAD_ERROR_MESSAGE)
            };
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(message);
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&cmp.title).color(theme.title));
    });

    let metric = cmp.metric;
    let mut plot = Plot::new("comparison_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label(cmp.y_label())
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            if name.is_empty() {
                format!("{:.0}", value.x)
            } else {
                format!("{}\n{:.0}", tooltip_text(metric, name, value.y), value.x)
            }
        });
    if reset_bounds {
        plot = plot.reset();
    }

    ui.scope(|ui: &mut Ui| {
        ui.visuals_mut().override_text_color = Some(theme.axis_text);
        plot.show(ui, |plot_ui| {
            for (slot, series) in cmp.visible_series() {
                let style = theme.series_style(slot);

                let line = Line::new(PlotPoints::new(series.plot_points()))
                    .name(&series.label)
                    .color(style.line)
                    .width(4.0)
                    .fill(0.0)
                    .fill_alpha(style.fill_opacity());
                plot_ui.line(line);

                let markers = Points::new(PlotPoints::new(series.plot_points()))
                    .name(&series.label)
                    .color(style.marker)
                    .filled(true)
                    .radius(5.0);
                plot_ui.points(markers);
            }
        });
    });
}
