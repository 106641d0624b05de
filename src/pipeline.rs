//! Конвейер: загрузка → признаки → пропуски → MinMax → отчет → сохранение

use ndarray::Array2;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::data::{DataLoader, DataWriter, UrlDataset};
use crate::error::{PipelineError, Result};
use crate::preprocessing::{count_missing, FeatureEngineer, MedianImputer, MinMaxScaler};
use crate::report::{console, feature_ranges, label_counts, plots};
use crate::types::{FeatureKind, PipelineReport};

/// Признаки до и после масштабирования
pub struct FeatureTables {
    /// После заполнения пропусков, без масштабирования
    pub original: Array2<f64>,
    pub scaled: Array2<f64>,
    pub imputed_values: usize,
    pub scaler: MinMaxScaler,
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn prepare_features(dataset: &UrlDataset) -> Result<FeatureTables> {
        if dataset.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        let mut original = FeatureEngineer::extract_feature_matrix(dataset);

        let imputed_values = count_missing(&original);
        if imputed_values > 0 {
            warn!("Missing values detected ({}). Filling with median...", imputed_values);
            original = MedianImputer::new().fit_transform(&original)?;
        }

        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&original)?;

        Ok(FeatureTables {
            original,
            scaled,
            imputed_values,
            scaler,
        })
    }

    pub fn run(&self) -> Result<PipelineReport> {
        let config = &self.config;

        let dataset = DataLoader::load(&config.input_path, &config.url_column, &config.label_column)?;
        println!("Data loaded successfully");
        println!("{}", console::format_shape(&dataset));
        print!("{}", console::format_head(&dataset, config.head_rows));

        let tables = Self::prepare_features(&dataset)?;
        println!("\n{}", console::format_features(&FeatureKind::ALL));

        let ranges = feature_ranges(&tables.original, &tables.scaled);
        let mut plot_paths = Vec::new();
        for range in &ranges {
            if config.render_plots {
                let j = range.feature.index();
                plot_paths.push(plots::render_feature_histograms(
                    range.feature,
                    tables.original.column(j),
                    tables.scaled.column(j),
                    config.histogram_bins,
                    config.kde,
                    &config.plots_dir,
                )?);
            }
            println!("\n{}", console::format_range_comparison(range));
        }

        let output_path = config.output_path();
        DataWriter::write_scaled(&dataset, &tables.scaled, &output_path)?;
        println!("Scaled dataset saved at: {}", output_path.display());

        let counts = label_counts(dataset.labels());
        print!("{}", console::format_label_counts(&counts));
        if config.render_plots {
            plot_paths.push(plots::render_class_balance(&counts, &config.plots_dir)?);
        }

        print!("{}", console::format_summary_table(&ranges));

        let (rows, columns) = dataset.shape();
        let report = PipelineReport {
            rows,
            columns,
            features: FeatureKind::ALL.to_vec(),
            imputed_values: tables.imputed_values,
            ranges,
            label_counts: counts,
            output_path,
            plot_paths,
            generated_at: chrono::Utc::now(),
        };
        DataWriter::write_summary(&report, config.summary_path())?;

        info!("Pipeline finished: {} rows, {} plots", rows, report.plot_paths.len());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use csv::StringRecord;

    fn dataset(urls: &[&str]) -> UrlDataset {
        let records = urls
            .iter()
            .map(|u| StringRecord::from(vec![*u, "bad"]))
            .collect();
        UrlDataset::new(StringRecord::from(vec!["URL", "Label"]), records, "URL", "Label").unwrap()
    }

    #[test]
    fn test_missing_url_gets_column_median() {
        let ds = dataset(&["https://a.com/x", "http://b.com", "", "https://c.co/y/z"]);
        let tables = Pipeline::prepare_features(&ds).unwrap();

        assert_eq!(tables.imputed_values, 4);
        // url_length: [15, 12, 16] → медиана 15
        assert_eq!(tables.original[[2, FeatureKind::UrlLength.index()]], 15.0);
        assert_eq!(tables.original[[2, FeatureKind::NumSlashes.index()]], 3.0);
        assert_eq!(tables.original[[2, FeatureKind::HasHttps.index()]], 1.0);
        assert_abs_diff_eq!(
            tables.scaled[[2, FeatureKind::UrlLength.index()]],
            0.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_no_missing_values_is_noop() {
        let ds = dataset(&["https://a.com/x", "http://b.com"]);
        let tables = Pipeline::prepare_features(&ds).unwrap();
        assert_eq!(tables.imputed_values, 0);
        assert_eq!(tables.original[[1, 0]], 12.0);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = dataset(&[]);
        assert!(matches!(
            Pipeline::prepare_features(&ds),
            Err(PipelineError::EmptyDataset)
        ));
    }
}
