//! The tree table: one hierarchy path per row, spread across `Path Node N` columns.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use ontoviz_common::error::{OntovizError, Result};

/// Cell values read as null, matching the NA markers common CSV tooling
/// writes for absent values. Matched exactly, case-sensitive.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// True for empty cells and NA markers.
pub fn is_missing(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

/// Header name of the `index`-th path column (1-based).
pub fn path_node_column(index: usize) -> String {
    format!("Path Node {index}")
}

#[derive(Debug, Clone, Default)]
pub struct PathTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl PathTable {
    /// Parse a tree table. Rows may be shorter than the header.
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let csv_err = |source_err| OntovizError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_err)?.clone();
        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        Ok(Self { headers, rows })
    }

    /// Number of columns in the header, path columns or not.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = PathRow<'_>> {
        self.rows.iter().map(|record| PathRow { record })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PathRow<'a> {
    record: &'a StringRecord,
}

impl<'a> PathRow<'a> {
    /// Cell value at `index`; `None` when empty, an NA marker, or past the
    /// end of a short row.
    pub fn cell(&self, index: usize) -> Option<&'a str> {
        self.record.get(index).filter(|value| !is_missing(value))
    }
}
