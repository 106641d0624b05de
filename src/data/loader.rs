//! Загрузка набора URL из CSV

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{PipelineError, Result};

/// Исходная таблица: все столбцы CSV плюс позиции `URL` и `Label`
#[derive(Debug, Clone)]
pub struct UrlDataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
    url_idx: usize,
    label_idx: usize,
}

impl UrlDataset {
    pub fn new(
        headers: StringRecord,
        records: Vec<StringRecord>,
        url_column: &str,
        label_column: &str,
    ) -> Result<Self> {
        let url_idx = column_index(&headers, url_column)?;
        let label_idx = column_index(&headers, label_column)?;

        Ok(Self {
            headers,
            records,
            url_idx,
            label_idx,
        })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    /// (строки, столбцы)
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.headers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn head(&self, n: usize) -> &[StringRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// URL по строкам; пустая ячейка считается пропуском
    pub fn urls(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.records
            .iter()
            .map(move |r| r.get(self.url_idx).filter(|u| !u.is_empty()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .map(move |r| r.get(self.label_idx).unwrap_or(""))
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| PipelineError::MissingColumn {
            column: column.to_string(),
        })
}

pub struct DataLoader;

impl DataLoader {
    pub fn load<P: AsRef<Path>>(path: P, url_column: &str, label_column: &str) -> Result<UrlDataset> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        let headers = reader.headers()?.clone();
        debug!("CSV header: {:?}", headers);

        let mut records = Vec::new();
        for result in reader.records() {
            records.push(result?);
        }

        let dataset = UrlDataset::new(headers, records, url_column, label_column)?;
        let (rows, cols) = dataset.shape();
        info!("Loaded {} rows x {} columns from {}", rows, cols, path.display());

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.csv");
        std::fs::write(
            &path,
            "URL,Label\nhttps://a.com/x,bad\n,good\nhttp://b.com,good\n",
        )
        .unwrap();

        let dataset = DataLoader::load(&path, "URL", "Label").unwrap();
        assert_eq!(dataset.shape(), (3, 2));

        let urls: Vec<Option<&str>> = dataset.urls().collect();
        assert_eq!(urls, vec![Some("https://a.com/x"), None, Some("http://b.com")]);

        let labels: Vec<&str> = dataset.labels().collect();
        assert_eq!(labels, vec!["bad", "good", "good"]);
        assert_eq!(dataset.head(2).len(), 2);
        assert_eq!(dataset.head(10).len(), 3);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let err = DataLoader::load(&path, "URL", "Label").unwrap_err();
        assert!(matches!(err, PipelineError::DatasetNotFound { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn test_missing_label_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.csv");
        std::fs::write(&path, "URL,Class\nhttp://b.com,good\n").unwrap();

        let err = DataLoader::load(&path, "URL", "Label").unwrap_err();
        match err {
            PipelineError::MissingColumn { column } => assert_eq!(column, "Label"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
