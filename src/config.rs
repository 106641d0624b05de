/// Настройки конвейера масштабирования

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    #[serde(default = "default_plots_dir")]
    pub plots_dir: PathBuf,
    #[serde(default = "default_url_column")]
    pub url_column: String,
    #[serde(default = "default_label_column")]
    pub label_column: String,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default = "default_head_rows")]
    pub head_rows: usize,
    #[serde(default = "default_true")]
    pub render_plots: bool,
    #[serde(default = "default_true")]
    pub kde: bool,
}

fn default_input_path() -> PathBuf { PathBuf::from("phishing_site_urls.csv") }
fn default_output_dir() -> PathBuf { PathBuf::from("results/outputs") }
fn default_output_file() -> String { "features_scaled.csv".to_string() }
fn default_summary_file() -> String { "feature_summary.json".to_string() }
fn default_plots_dir() -> PathBuf { PathBuf::from("results/plots") }
fn default_url_column() -> String { "URL".to_string() }
fn default_label_column() -> String { "Label".to_string() }
fn default_histogram_bins() -> usize { 50 }
fn default_head_rows() -> usize { 5 }
fn default_true() -> bool { true }

impl PipelineConfig {
    /// Загрузка из JSON; отсутствующие поля берутся по умолчанию
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            summary_file: default_summary_file(),
            plots_dir: default_plots_dir(),
            url_column: default_url_column(),
            label_column: default_label_column(),
            histogram_bins: default_histogram_bins(),
            head_rows: default_head_rows(),
            render_plots: true,
            kde: true,
        }
    }
}
