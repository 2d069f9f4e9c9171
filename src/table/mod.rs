use std::{collections::HashMap, fs, path::Path};

use crate::errors::JobError;

/// A CSV file slurped into memory. Splitting is a naive comma split:
/// quoted fields and embedded commas or newlines are not supported, so
/// a comma inside a field reads as a field separator.
#[derive(Debug)]
pub struct RawTable {
    /// Column names from the first non-blank line.
    pub headers: Vec<String>,
    /// Data rows, one `Vec` of cells per line.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Map each header name to its zero-based position. Duplicate names
    /// resolve to the last occurrence.
    pub fn header_index(&self) -> HashMap<String, usize> {
        let mut index = HashMap::with_capacity(self.headers.len());
        for (pos, name) in self.headers.iter().enumerate() {
            index.insert(name.clone(), pos);
        }
        index
    }
}

/// Read `path` as comma-separated text. Blank lines are dropped; the
/// first remaining line becomes the header. A file with no content at
/// all is an `EmptyTable` failure.
pub fn load_table(path: &Path) -> Result<RawTable, JobError> {
    let text = fs::read_to_string(path).map_err(|source| JobError::FileAccess {
        path: path.display().to_string(),
        source,
    })?;

    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let headers = match lines.next() {
        Some(line) => split_line(line),
        None => {
            return Err(JobError::EmptyTable {
                path: path.display().to_string(),
            })
        }
    };
    let rows = lines.map(split_line).collect();
    Ok(RawTable { headers, rows })
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(text: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(text.as_bytes()).unwrap();
        tmp
    }

    #[test]
    fn splits_header_and_rows() {
        let tmp = write_csv("a,b,c\n1,2,3\n4,5,6\n");
        let table = load_table(tmp.path()).unwrap();
        assert_eq!(table.headers, ["a", "b", "c"]);
        assert_eq!(table.rows, [["1", "2", "3"], ["4", "5", "6"]]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let tmp = write_csv("\n\na,b\n\n1,2\n\n");
        let table = load_table(tmp.path()).unwrap();
        assert_eq!(table.headers, ["a", "b"]);
        assert_eq!(table.rows, [["1", "2"]]);
    }

    #[test]
    fn naive_split_ignores_quoting() {
        let tmp = write_csv("a,b\n\"1,5\",2\n");
        let table = load_table(tmp.path()).unwrap();
        assert_eq!(table.rows, [["\"1", "5\"", "2"]]);
    }

    #[test]
    fn duplicate_header_names_resolve_to_last_position() {
        let tmp = write_csv("a,b,a\n1,2,3\n");
        let table = load_table(tmp.path()).unwrap();
        let index = table.header_index();
        assert_eq!(index["a"], 2);
        assert_eq!(index["b"], 1);
    }

    #[test]
    fn missing_file_is_file_access() {
        let err = load_table(Path::new("/no/such/table.csv")).unwrap_err();
        assert!(matches!(err, JobError::FileAccess { .. }));
    }

    #[test]
    fn empty_file_is_empty_table() {
        let tmp = write_csv("");
        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, JobError::EmptyTable { .. }));
    }

    #[test]
    fn whitespace_only_file_is_empty_table() {
        let tmp = write_csv("\n   \n\n");
        let err = load_table(tmp.path()).unwrap_err();
        assert!(matches!(err, JobError::EmptyTable { .. }));
    }
}
