use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::chart::{category_label, line_segments, ChartKind, Figure};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart windows
// ---------------------------------------------------------------------------

/// Show every open figure in its own floating window.
pub fn figure_windows(ctx: &egui::Context, state: &mut AppState) {
    for figure in &mut state.figures {
        let mut open = figure.open;
        egui::Window::new(figure.title.as_str())
            .id(egui::Id::new(("figure", figure.id)))
            .open(&mut open)
            .default_size([640.0, 420.0])
            .resizable(true)
            .show(ctx, |ui: &mut Ui| {
                figure_plot(ui, figure);
            });
        figure.open = open;
    }
    state.prune_closed_figures();
}

fn figure_plot(ui: &mut Ui, figure: &Figure) {
    let mut plot = Plot::new(("figure_plot", figure.id))
        .legend(Legend::default())
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if let Some(labels) = figure.categories.clone() {
        plot = plot.x_axis_formatter(move |mark, _range| {
            category_label(&labels, mark.value)
                .unwrap_or_default()
                .to_string()
        });
    }

    plot.show(ui, |plot_ui| match figure.kind {
        ChartKind::Line => {
            for series in &figure.series {
                for run in line_segments(&series.points) {
                    plot_ui.line(
                        Line::new(PlotPoints::from(run.clone()))
                            .name(&series.name)
                            .color(series.color)
                            .width(1.5),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(run))
                            .name(&series.name)
                            .color(series.color)
                            .radius(3.0),
                    );
                }
            }
        }
        ChartKind::Bar => {
            for series in &figure.series {
                let bars: Vec<Bar> = series
                    .points
                    .iter()
                    .filter(|p| !p[1].is_nan())
                    .map(|p| Bar::new(p[0], p[1]).width(figure.bar_width))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.name)
                        .color(series.color),
                );
            }
        }
    });
}
