//! Сохранение масштабированного набора и сводки

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use ndarray::Array2;
use tracing::info;

use crate::data::loader::UrlDataset;
use crate::error::{PipelineError, Result};
use crate::types::{FeatureKind, PipelineReport};

pub struct DataWriter;

impl DataWriter {
    /// Исходные столбцы плюс масштабированные признаки, без индекса строк.
    /// Если признак уже есть среди столбцов, он перезаписывается на месте.
    pub fn write_scaled<P: AsRef<Path>>(
        dataset: &UrlDataset,
        scaled: &Array2<f64>,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        if scaled.ncols() != FeatureKind::ALL.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: FeatureKind::ALL.len(),
                actual: scaled.ncols(),
            });
        }
        ensure_parent_dir(path)?;

        let mut header: Vec<String> = dataset.headers().iter().map(str::to_string).collect();
        // Позиция каждого признака в итоговой строке
        let mut positions = [0usize; 4];
        for kind in FeatureKind::ALL {
            positions[kind.index()] = match header.iter().position(|h| h.trim() == kind.name()) {
                Some(pos) => pos,
                None => {
                    header.push(kind.name().to_string());
                    header.len() - 1
                }
            };
        }

        let mut writer = Writer::from_writer(File::create(path)?);
        writer.write_record(&header)?;

        for (record, values) in dataset.records().iter().zip(scaled.rows()) {
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(header.len(), String::new());
            for kind in FeatureKind::ALL {
                // `{:?}` сохраняет дробную часть: 0.0, 1.0
                row[positions[kind.index()]] = format!("{:?}", values[kind.index()]);
            }
            writer.write_record(&row)?;
        }

        writer.flush()?;
        info!("Scaled dataset saved at: {}", path.display());
        Ok(())
    }

    pub fn write_summary<P: AsRef<Path>>(report: &PipelineReport, path: P) -> Result<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, report)?;
        info!("Summary saved at: {}", path.display());
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
