use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::model::{CellValue, Column, ColumnKind, Table};
use crate::error::{AnalyzerError, Result};

/// Cell contents treated as missing values.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CSV file from disk.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| AnalyzerError::file_open(path, e))?;
    let table = read_csv(file)?;
    log::debug!(
        "parsed {}: {} rows, {} columns",
        path.display(),
        table.len(),
        table.column_count()
    );
    Ok(table)
}

/// Parse CSV text with a header row and infer a type for every column.
pub fn read_csv<R: Read>(rdr: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut records = reader.records();

    let header = loop {
        match records.next() {
            None => return Err(AnalyzerError::EmptyInput),
            Some(record) => {
                let record = record?;
                if !is_blank(&record) {
                    break record;
                }
            }
        }
    };

    let names = column_names(&header);
    let width = names.len();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); width];

    for record in records {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        if record.len() > width {
            return Err(AnalyzerError::TooManyFields {
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }
        // Short rows are padded with missing values.
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(idx).unwrap_or("").to_string());
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| infer_column(name, raw))
        .collect();
    Ok(Table::new(columns))
}

// ---------------------------------------------------------------------------
// Header handling
// ---------------------------------------------------------------------------

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 0 || (record.len() == 1 && record[0].trim().is_empty())
}

/// Fill in empty names and de-duplicate repeated ones (`a`, `a.1`, `a.2`).
///
/// A renamed column that collides again is renamed in turn, so `a,a.1,a`
/// becomes `a,a.1,a.1.1`.
fn column_names(header: &StringRecord) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header.len());

    for (idx, raw) in header.iter().enumerate() {
        let mut name = if raw.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            raw.to_string()
        };

        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{name}.{count}");
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        names.push(name);
    }
    names
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

fn is_na(s: &str) -> bool {
    NA_TOKENS.contains(&s)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Pick the narrowest kind that accepts every non-missing cell.
///
/// Integer and boolean columns cannot hold missing values; an integer
/// column with gaps is widened to float, a boolean one falls back to text.
/// A column with no rows at all is text.
fn infer_column(name: String, raw: Vec<String>) -> Column {
    let present: Vec<&str> = raw
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !is_na(s))
        .collect();
    let has_missing = present.len() < raw.len();

    let all_ints = !present.is_empty() && present.iter().all(|s| s.trim().parse::<i64>().is_ok());

    let kind = if raw.is_empty() {
        ColumnKind::Text
    } else if !has_missing && all_ints {
        ColumnKind::Integer
    } else if present.iter().all(|s| s.trim().parse::<f64>().is_ok()) {
        ColumnKind::Float
    } else if !has_missing && present.iter().all(|s| parse_bool(s).is_some()) {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    };

    let values = raw
        .into_iter()
        .map(|s| convert_cell(kind, s))
        .collect();

    Column { name, kind, values }
}

fn convert_cell(kind: ColumnKind, s: String) -> CellValue {
    if is_na(&s) {
        return match kind {
            ColumnKind::Float => CellValue::Float(f64::NAN),
            _ => CellValue::Null,
        };
    }
    match kind {
        ColumnKind::Integer => s
            .trim()
            .parse()
            .map(CellValue::Integer)
            .unwrap_or(CellValue::Null),
        ColumnKind::Float => s
            .trim()
            .parse()
            .map(CellValue::Float)
            .unwrap_or(CellValue::Float(f64::NAN)),
        ColumnKind::Bool => parse_bool(&s).map_or(CellValue::Null, CellValue::Bool),
        ColumnKind::Text => CellValue::Text(s),
    }
}
