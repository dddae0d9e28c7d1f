//! Term → label lookup built from the labels table.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use ontoviz_common::error::{OntovizError, Result};
use tracing::{debug, warn};

use crate::tree::is_missing;

pub const TERM_COLUMN: &str = "term";
pub const LABEL_COLUMN: &str = "label";

/// Immutable mapping from raw term identifiers to display labels.
#[derive(Debug, Clone, Default)]
pub struct LabelMapping {
    labels: HashMap<String, String>,
}

impl LabelMapping {
    /// Parse a labels table with `term` and `label` columns.
    ///
    /// Rows whose term or label is empty or an NA marker are skipped. When a
    /// term repeats, the last row wins. An input with no header row at all
    /// yields an empty mapping.
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let csv_err = |source_err| OntovizError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_err)?.clone();
        if headers.is_empty() {
            warn!("{} has no header row; terms will be shown unlabelled", source.display());
            return Ok(Self::default());
        }

        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| OntovizError::MissingColumn {
                    path: source.to_path_buf(),
                    column: name.to_string(),
                })
        };
        let term_idx = column(TERM_COLUMN)?;
        let label_idx = column(LABEL_COLUMN)?;

        let mut labels = HashMap::new();
        let mut duplicates = 0usize;

        for result in reader.records() {
            let record = result.map_err(csv_err)?;

            let term = record.get(term_idx).unwrap_or_default();
            let label = record.get(label_idx).unwrap_or_default();
            if is_missing(term) || is_missing(label) {
                continue;
            }

            if let Some(previous) = labels.insert(term.to_string(), label.to_string()) {
                duplicates += 1;
                debug!("Duplicate term {:?}: {:?} replaced by {:?}", term, previous, label);
            }
        }

        if duplicates > 0 {
            warn!(
                "{} duplicate terms in {}; the last label for each term wins",
                duplicates,
                source.display()
            );
        }

        Ok(Self { labels })
    }

    /// Label for `term`, or `term` itself when unmapped.
    pub fn resolve<'a>(&'a self, term: &'a str) -> &'a str {
        self.labels.get(term).map(String::as_str).unwrap_or(term)
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.labels.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
