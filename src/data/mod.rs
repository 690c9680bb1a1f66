/// Data layer: core types, loading, and summary statistics.
///
/// Architecture:
/// ```text
///     .csv
///       │
///       ▼
///   ┌──────────┐
///   │  loader  │  tokenize → infer column kinds → Table
///   └──────────┘
///       │
///       ▼
///   ┌──────────┐
///   │  Table   │  Vec<Column>, shared row count
///   └──────────┘
///       │
///       ▼
///   ┌──────────┐
///   │  stats   │  per-column min / max
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
