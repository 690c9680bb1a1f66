use super::model::{CellValue, Column, ColumnKind, Table};
use crate::error::{AnalyzerError, Result};

/// Minimum and maximum of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMax {
    pub column: String,
    /// `Null` when the column holds no values.
    pub min: CellValue,
    pub max: CellValue,
}

/// Compute the extremes of a numeric column, skipping missing values.
pub fn min_max(column: &Column) -> Result<MinMax> {
    let (min, max) = match column.kind {
        ColumnKind::Integer => {
            let ints = column.values.iter().filter_map(|v| match v {
                CellValue::Integer(i) => Some(*i),
                _ => None,
            });
            let (lo, hi) = ints.fold((None, None), |(lo, hi): (Option<i64>, Option<i64>), i| {
                (
                    Some(lo.map_or(i, |l| l.min(i))),
                    Some(hi.map_or(i, |h| h.max(i))),
                )
            });
            (
                lo.map_or(CellValue::Null, CellValue::Integer),
                hi.map_or(CellValue::Null, CellValue::Integer),
            )
        }
        ColumnKind::Float => {
            let floats = column.numeric_values().flatten().filter(|v| !v.is_nan());
            let (lo, hi) = floats.fold((None, None), |(lo, hi): (Option<f64>, Option<f64>), v| {
                (
                    Some(lo.map_or(v, |l| l.min(v))),
                    Some(hi.map_or(v, |h| h.max(v))),
                )
            });
            (
                lo.map_or(CellValue::Null, CellValue::Float),
                hi.map_or(CellValue::Null, CellValue::Float),
            )
        }
        ColumnKind::Bool | ColumnKind::Text => {
            return Err(AnalyzerError::NotNumeric(column.name.clone()));
        }
    };

    Ok(MinMax {
        column: column.name.clone(),
        min,
        max,
    })
}

/// One `"{col}: Min = {min}, Max = {max}"` line per requested column.
pub fn min_max_report(table: &Table, columns: &[String]) -> Result<String> {
    columns
        .iter()
        .map(|name| -> Result<String> {
            let column = table
                .column(name)
                .ok_or_else(|| AnalyzerError::UnknownColumn(name.clone()))?;
            let mm = min_max(column)?;
            Ok(format!("{}: Min = {}, Max = {}\n", mm.column, mm.min, mm.max))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn table() -> Table {
        read_csv("n,t,gap,city\n3,2.5,,a\n-1,7.0,4.5,b\n10,0.25,,c\n".as_bytes()).unwrap()
    }

    #[test]
    fn integer_extremes() {
        let t = table();
        let mm = min_max(t.column("n").unwrap()).unwrap();
        assert_eq!(mm.min, CellValue::Integer(-1));
        assert_eq!(mm.max, CellValue::Integer(10));
    }

    #[test]
    fn float_extremes_skip_missing() {
        let t = table();
        let mm = min_max(t.column("gap").unwrap()).unwrap();
        assert_eq!(mm.min, CellValue::Float(4.5));
        assert_eq!(mm.max, CellValue::Float(4.5));

        let mm = min_max(t.column("t").unwrap()).unwrap();
        assert_eq!(mm.min, CellValue::Float(0.25));
        assert_eq!(mm.max, CellValue::Float(7.0));
    }

    #[test]
    fn extremes_match_column_fold() {
        let t = table();
        let col = t.column("t").unwrap();
        let values: Vec<f64> = col.numeric_values().flatten().collect();
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mm = min_max(col).unwrap();
        assert_eq!(mm.min.as_f64(), Some(lo));
        assert_eq!(mm.max.as_f64(), Some(hi));
    }

    #[test]
    fn empty_column_reports_nan() {
        let t = read_csv("a,b\n1,\n2,NA\n".as_bytes()).unwrap();
        let report = min_max_report(&t, &["b".to_string()]).unwrap();
        assert_eq!(report, "b: Min = nan, Max = nan\n");
    }

    #[test]
    fn text_columns_are_rejected() {
        let t = table();
        let err = min_max(t.column("city").unwrap()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NotNumeric(name) if name == "city"));
    }

    #[test]
    fn report_lists_columns_in_request_order() {
        let t = table();
        let report = min_max_report(&t, &["t".to_string(), "n".to_string()]).unwrap();
        assert_eq!(
            report,
            "t: Min = 0.25, Max = 7.0\nn: Min = -1, Max = 10\n"
        );
    }

    #[test]
    fn unknown_column_is_an_error() {
        let t = table();
        let err = min_max_report(&t, &["missing".to_string()]).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnknownColumn(_)));
    }
}
