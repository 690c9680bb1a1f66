use std::path::{Path, PathBuf};

use crate::chart::{build_figure, ChartKind, Figure};
use crate::data::loader::load_csv;
use crate::data::model::Table;
use crate::data::stats::min_max_report;

const NO_DATASET: &str = "Load a CSV file first!";
const NO_Y_SELECTION: &str = "Select at least one Y-axis column!";

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
    Error,
}

/// A blocking message shown on top of the window until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self::new(DialogLevel::Info, title, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DialogLevel::Warning, "Warning", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DialogLevel::Error, "Error", message)
    }

    fn new(level: DialogLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None until the user loads a file).
    pub dataset: Option<Table>,

    /// Path the current table was read from.
    pub source: Option<PathBuf>,

    /// Column used for the X axis.
    pub x_column: Option<String>,

    /// Numeric columns selected for the Y axis.
    y_columns: Vec<String>,

    /// Chart windows, oldest first.
    pub figures: Vec<Figure>,
    next_figure_id: u64,

    /// Pending modal message.
    pub dialog: Option<Dialog>,

    /// Status line shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path`; on failure the previous table stays in place.
    pub fn load_path(&mut self, path: &Path) {
        match load_csv(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {}: {} rows, columns {:?}",
                    path.display(),
                    table.len(),
                    table.column_names()
                );
                let message = format!(
                    "File loaded: {}\nRows: {} Columns: {}",
                    path.display(),
                    table.len(),
                    table.column_count()
                );
                self.set_dataset(table, Some(path.to_path_buf()));
                self.dialog = Some(Dialog::info("Success", message));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Failed to load {}", path.display()));
                self.dialog = Some(Dialog::error(format!("Failed to load file:\n{e}")));
            }
        }
    }

    /// Install a newly loaded table and reset the column selectors.
    pub fn set_dataset(&mut self, table: Table, source: Option<PathBuf>) {
        self.x_column = table.column_names().into_iter().next();
        self.y_columns.clear();
        self.status_message = source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| format!("Loaded {}", name.to_string_lossy()));
        self.dataset = Some(table);
        self.source = source;
    }

    pub fn set_x_column(&mut self, name: &str) {
        if self.dataset.as_ref().and_then(|t| t.column(name)).is_some() {
            self.x_column = Some(name.to_string());
        }
    }

    /// Toggle a column in the Y selection. Non-numeric columns are ignored.
    pub fn toggle_y_column(&mut self, name: &str) {
        if let Some(pos) = self.y_columns.iter().position(|c| c == name) {
            self.y_columns.remove(pos);
            return;
        }
        let numeric = self
            .dataset
            .as_ref()
            .and_then(|t| t.column(name))
            .is_some_and(|c| c.is_numeric());
        if numeric {
            self.y_columns.push(name.to_string());
        }
    }

    /// Select every numeric column.
    pub fn select_all_y(&mut self) {
        if let Some(table) = &self.dataset {
            self.y_columns = table.numeric_column_names();
        }
    }

    pub fn clear_y(&mut self) {
        self.y_columns.clear();
    }

    pub fn is_y_selected(&self, name: &str) -> bool {
        self.y_columns.iter().any(|c| c == name)
    }

    /// Selected Y columns in table order.
    pub fn selected_y_columns(&self) -> Vec<String> {
        match &self.dataset {
            Some(table) => table
                .numeric_column_names()
                .into_iter()
                .filter(|name| self.is_y_selected(name))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Open a chart window for the current selection.
    pub fn plot(&mut self, kind: ChartKind) {
        let Some(ys) = self.require_selection() else {
            return;
        };
        let Some(table) = &self.dataset else {
            return;
        };
        let x = self.x_column.as_deref().unwrap_or_default();

        match build_figure(table, self.next_figure_id, kind, x, &ys) {
            Ok(figure) => {
                log::debug!("opening figure {}: {}", figure.id, figure.title);
                self.next_figure_id += 1;
                self.figures.push(figure);
            }
            Err(e) => {
                log::warn!("cannot plot: {e}");
                self.dialog = Some(Dialog::error(format!("Failed to plot:\n{e}")));
            }
        }
    }

    /// Show the min/max of each selected Y column.
    pub fn show_min_max(&mut self) {
        let Some(ys) = self.require_selection() else {
            return;
        };
        let Some(table) = &self.dataset else {
            return;
        };
        self.dialog = Some(match min_max_report(table, &ys) {
            Ok(report) => Dialog::info("Min & Max Values", report),
            Err(e) => Dialog::error(e.to_string()),
        });
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Forget chart windows the user has closed.
    pub fn prune_closed_figures(&mut self) {
        self.figures.retain(|f| f.open);
    }

    /// Return the Y selection, or queue a warning if it or the table is missing.
    fn require_selection(&mut self) -> Option<Vec<String>> {
        if self.dataset.is_none() {
            self.dialog = Some(Dialog::warning(NO_DATASET));
            return None;
        }
        let ys = self.selected_y_columns();
        if ys.is_empty() {
            self.dialog = Some(Dialog::warning(NO_Y_SELECTION));
            return None;
        }
        Some(ys)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::loader::read_csv;

    fn loaded() -> AppState {
        let table = read_csv("city,day,t,sunny\nOslo,1,3.5,True\nRome,2,18.0,False\n".as_bytes())
            .unwrap();
        let mut state = AppState::default();
        state.set_dataset(table, Some(PathBuf::from("/tmp/weather.csv")));
        state
    }

    fn level(state: &AppState) -> Option<DialogLevel> {
        state.dialog.as_ref().map(|d| d.level)
    }

    #[test]
    fn actions_without_dataset_warn() {
        let mut state = AppState::default();
        state.plot(ChartKind::Line);
        assert_eq!(state.dialog, Some(Dialog::warning(NO_DATASET)));
        state.close_dialog();
        state.show_min_max();
        assert_eq!(state.dialog, Some(Dialog::warning(NO_DATASET)));
        assert!(state.figures.is_empty());
    }

    #[test]
    fn actions_without_y_selection_warn() {
        let mut state = loaded();
        state.plot(ChartKind::Bar);
        assert_eq!(state.dialog, Some(Dialog::warning(NO_Y_SELECTION)));
        assert!(state.figures.is_empty());
    }

    #[test]
    fn loading_resets_selectors() {
        let mut state = loaded();
        assert_eq!(state.x_column.as_deref(), Some("city"));
        assert_eq!(state.status_message.as_deref(), Some("Loaded weather.csv"));
        state.toggle_y_column("t");
        assert!(state.is_y_selected("t"));

        let other = read_csv("a,b\n1,2\n".as_bytes()).unwrap();
        state.set_dataset(other, None);
        assert_eq!(state.x_column.as_deref(), Some("a"));
        assert!(state.selected_y_columns().is_empty());
    }

    #[test]
    fn only_numeric_columns_can_be_y() {
        let mut state = loaded();
        state.toggle_y_column("city");
        state.toggle_y_column("sunny");
        state.toggle_y_column("missing");
        assert!(state.selected_y_columns().is_empty());

        state.select_all_y();
        assert_eq!(state.selected_y_columns(), vec!["day", "t"]);
        state.clear_y();
        assert!(state.selected_y_columns().is_empty());
    }

    #[test]
    fn y_selection_follows_table_order() {
        let mut state = loaded();
        state.toggle_y_column("t");
        state.toggle_y_column("day");
        assert_eq!(state.selected_y_columns(), vec!["day", "t"]);
        state.toggle_y_column("t");
        assert_eq!(state.selected_y_columns(), vec!["day"]);
    }

    #[test]
    fn plotting_opens_figures() {
        let mut state = loaded();
        state.toggle_y_column("t");
        state.plot(ChartKind::Line);
        state.set_x_column("day");
        state.plot(ChartKind::Bar);
        assert!(state.dialog.is_none());
        assert_eq!(state.figures.len(), 2);
        assert_eq!(state.figures[0].title, "Line Graph: t vs city");
        assert_eq!(state.figures[1].title, "Bar Chart: t vs day");
        assert_ne!(state.figures[0].id, state.figures[1].id);

        state.figures[0].open = false;
        state.prune_closed_figures();
        assert_eq!(state.figures.len(), 1);
        assert_eq!(state.figures[0].kind, ChartKind::Bar);
    }

    #[test]
    fn min_max_is_reported_as_info() {
        let mut state = loaded();
        state.select_all_y();
        state.show_min_max();
        let dialog = state.dialog.clone().unwrap();
        assert_eq!(dialog.level, DialogLevel::Info);
        assert_eq!(dialog.title, "Min & Max Values");
        assert_eq!(
            dialog.message,
            "day: Min = 1, Max = 2\nt: Min = 3.5, Max = 18.0\n"
        );
    }

    #[test]
    fn unknown_x_column_is_ignored() {
        let mut state = loaded();
        state.set_x_column("nope");
        assert_eq!(state.x_column.as_deref(), Some("city"));
    }

    #[test]
    fn load_failure_keeps_previous_table() {
        let mut state = loaded();
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "a,b\n1,2\n3,4,5\n").unwrap();

        state.load_path(bad.path());
        assert_eq!(level(&state), Some(DialogLevel::Error));
        let message = &state.dialog.as_ref().unwrap().message;
        assert!(message.starts_with("Failed to load file:\n"));
        assert!(message.contains("Expected 2 fields in line 3, saw 3"));
        assert_eq!(state.dataset.as_ref().unwrap().column_count(), 4);
    }

    #[test]
    fn load_missing_file_warns_instead_of_panicking() {
        let mut state = AppState::default();
        let dir = tempfile::tempdir().unwrap();
        state.load_path(&dir.path().join("absent.csv"));
        assert_eq!(level(&state), Some(DialogLevel::Error));
        assert!(state.dataset.is_none());
    }

    #[test]
    fn load_success_reports_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "x,y,z\n1,2,3\n4,5,6\n").unwrap();

        let mut state = AppState::default();
        state.load_path(file.path());
        let dialog = state.dialog.clone().unwrap();
        assert_eq!(dialog.level, DialogLevel::Info);
        assert!(dialog.message.ends_with("Rows: 2 Columns: 3"));
        assert_eq!(state.source.as_deref(), Some(file.path()));
        assert_eq!(state.x_column.as_deref(), Some("x"));
    }
}
