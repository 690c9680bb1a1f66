//! Chart descriptions built from a table selection.
//!
//! A [`Figure`] is a snapshot: it copies the points it needs, so reloading
//! a file leaves already-open chart windows untouched.

use eframe::egui::Color32;

use crate::color::series_color;
use crate::data::model::Table;
use crate::error::{AnalyzerError, Result};

/// Total width of one group of bars, shared by all series.
const BAR_GROUP_WIDTH: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Line => "Line Graph",
            ChartKind::Bar => "Bar Chart",
        }
    }
}

/// One plotted Y column. Missing values are stored as `NaN` in `y`.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub id: u64,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Tick labels when X is categorical; position `i` is labelled `categories[i]`.
    pub categories: Option<Vec<String>>,
    /// Width of each individual bar (bar charts only).
    pub bar_width: f64,
    /// Cleared when the user closes the window.
    pub open: bool,
}

/// Label of the category at `value`; `None` between or outside categories.
pub fn category_label(labels: &[String], value: f64) -> Option<&str> {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    labels.get(rounded as usize).map(String::as_str)
}

/// Snapshot the selected columns of `table` as a chart.
pub fn build_figure(table: &Table, id: u64, kind: ChartKind, x: &str, ys: &[String]) -> Result<Figure> {
    let x_col = table
        .column(x)
        .ok_or_else(|| AnalyzerError::UnknownColumn(x.to_string()))?;

    let mut y_cols = Vec::with_capacity(ys.len());
    for name in ys {
        let col = table
            .column(name)
            .ok_or_else(|| AnalyzerError::UnknownColumn(name.clone()))?;
        if !col.is_numeric() {
            return Err(AnalyzerError::NotNumeric(name.clone()));
        }
        y_cols.push(col);
    }

    // Bar charts are always categorical; line charts only when X is not a number.
    let categorical = kind == ChartKind::Bar || !x_col.is_numeric();
    let xs: Vec<f64> = if categorical {
        (0..table.len()).map(|i| i as f64).collect()
    } else {
        x_col
            .numeric_values()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect()
    };
    let categories =
        categorical.then(|| x_col.values.iter().map(ToString::to_string).collect::<Vec<_>>());

    let k = y_cols.len().max(1) as f64;
    let bar_width = BAR_GROUP_WIDTH / k;

    let series = y_cols
        .iter()
        .enumerate()
        .map(|(j, col)| {
            let offset = match kind {
                ChartKind::Line => 0.0,
                ChartKind::Bar => -BAR_GROUP_WIDTH / 2.0 + bar_width * (j as f64 + 0.5),
            };
            let points = xs
                .iter()
                .zip(col.numeric_values())
                .map(|(&xi, yi)| [xi + offset, yi.unwrap_or(f64::NAN)])
                .collect();
            Series {
                name: col.name.clone(),
                color: series_color(j),
                points,
            }
        })
        .collect();

    let y_label = ys.join(", ");
    Ok(Figure {
        id,
        kind,
        title: format!("{}: {} vs {}", kind.title(), y_label, x),
        x_label: x.to_string(),
        y_label,
        series,
        categories,
        bar_width,
        open: true,
    })
}

/// Split a line into runs of drawable points; any `NaN` coordinate ends a run.
pub fn line_segments(points: &[[f64; 2]]) -> Vec<Vec<[f64; 2]>> {
    points
        .split(|p| p[0].is_nan() || p[1].is_nan())
        .filter(|run| !run.is_empty())
        .map(<[[f64; 2]]>::to_vec)
        .collect()
}
