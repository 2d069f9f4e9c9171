use std::{fs, path::Path};

use crate::errors::JobError;

/// One summary row for a column that produced at least one value.
/// `param_count` carries the job's `lines_to_read` verbatim, not the
/// number of rows actually read or coerced. That pass-through mirrors
/// the original tool and is kept for output compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub column_name: String,
    pub mean: f64,
    pub stddev: f64,
    pub param_count: i64,
}

/// Derive the output stem from an input file name: everything before
/// the first ".csv" occurrence, or the whole name when absent.
pub fn output_stem(file_name: &str) -> &str {
    match file_name.find(".csv") {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// Write the summary file. Numeric fields use fixed two-decimal
/// precision. The header line is written even when no column survived.
pub fn write_summary(path: &Path, records: &[SummaryRecord]) -> Result<(), JobError> {
    let mut text = String::from("column_name,mean,stddev,param_count\n");
    for record in records {
        text.push_str(&format!(
            "{},{:.2},{:.2},{}\n",
            record.column_name, record.mean, record.stddev, record.param_count
        ));
    }
    write_file(path, &text)
}

/// Write the transformed file: header row, then one body row per
/// data-row index. Column lengths may have diverged after coercion
/// failures; rows run to the longest column and shorter columns emit
/// empty cells. Values use f64's shortest round-trip formatting.
pub fn write_transformed(
    path: &Path,
    header: &[String],
    columns: &[Vec<f64>],
) -> Result<(), JobError> {
    let mut text = header.join(",");
    text.push('\n');

    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..height {
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                text.push(',');
            }
            if let Some(value) = column.get(row) {
                text.push_str(&value.to_string());
            }
        }
        text.push('\n');
    }
    write_file(path, &text)
}

fn write_file(path: &Path, text: &str) -> Result<(), JobError> {
    fs::write(path, text).map_err(|source| JobError::FileAccess {
        path: path.display().to_string(),
        source,
    })
}
