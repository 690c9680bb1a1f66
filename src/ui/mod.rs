//! Presentation only: every widget reads or mutates `AppState`, never the filesystem
//! directly (the file dialog hands its path to `AppState::load_path`).

pub mod dialog;
pub mod panels;
pub mod plot;
pub mod table;
