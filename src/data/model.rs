use std::fmt;

/// Maximum number of rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 50;

// ---------------------------------------------------------------------------
// ColumnKind – inferred dtype of a column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    /// Only integer and float columns can be plotted or summarised.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring common DataFrame dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => f.write_str(&format_float(*v)),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Null => f.write_str("nan"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64`; missing numbers come back as `NaN`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

/// Format a float the way Python's `repr` does: shortest round-trip digits,
/// always with a fractional part or exponent.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        // Rust gives "1e20" / "1.5e-7"; Python wants "1e+20" / "1.5e-07".
        let s = format!("{v:e}");
        let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(d) => ('-', d),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    let s = format!("{v}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

// ---------------------------------------------------------------------------
// Column / Table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// Numeric view of the column; `None` for non-numeric cells.
    pub fn numeric_values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().map(CellValue::as_f64)
    }
}

/// The loaded CSV: named columns sharing one row count.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table; all columns must have the same length.
    pub fn new(columns: Vec<Column>) -> Self {
        let rows = columns.first().map_or(0, |c| c.values.len());
        debug_assert!(columns.iter().all(|c| c.values.len() == rows));
        Table { columns, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Names of the columns eligible for the Y axis.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        &self.columns[col].values[row]
    }

    /// Rows shown in the preview table.
    pub fn preview_rows(&self) -> usize {
        self.rows.min(PREVIEW_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, kind: ColumnKind, values: Vec<CellValue>) -> Column {
        Column {
            name: name.to_string(),
            kind,
            values,
        }
    }

    #[test]
    fn floats_format_like_python_repr() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1e20), "1e+20");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(123456.0), "123456.0");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn cells_display_like_dataframe_values() {
        assert_eq!(CellValue::Integer(7).to_string(), "7");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Null.to_string(), "nan");
        assert_eq!(CellValue::Text("Oslo".into()).to_string(), "Oslo");
    }

    #[test]
    fn numeric_columns_exclude_text_and_bool() {
        let table = Table::new(vec![
            column("city", ColumnKind::Text, vec![CellValue::Text("a".into())]),
            column("n", ColumnKind::Integer, vec![CellValue::Integer(1)]),
            column("ok", ColumnKind::Bool, vec![CellValue::Bool(false)]),
            column("t", ColumnKind::Float, vec![CellValue::Float(1.5)]),
        ]);
        assert_eq!(table.numeric_column_names(), vec!["n", "t"]);
        assert_eq!(table.column_names().len(), 4);
    }

    #[test]
    fn preview_is_bounded() {
        let values = (0..120).map(CellValue::Integer).collect();
        let table = Table::new(vec![column("n", ColumnKind::Integer, values)]);
        assert_eq!(table.len(), 120);
        assert_eq!(table.preview_rows(), PREVIEW_ROWS);

        let empty = Table::default();
        assert!(empty.is_empty());
        assert_eq!(empty.preview_rows(), 0);
    }
}
