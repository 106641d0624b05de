/// Типы данных для признаков URL

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Числовые признаки, извлекаемые из текста URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    UrlLength,
    NumDots,
    NumSlashes,
    HasHttps,
}

impl FeatureKind {
    /// Порядок столбцов в матрице признаков
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::UrlLength,
        FeatureKind::NumDots,
        FeatureKind::NumSlashes,
        FeatureKind::HasHttps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::UrlLength => "url_length",
            FeatureKind::NumDots => "num_dots",
            FeatureKind::NumSlashes => "num_slashes",
            FeatureKind::HasHttps => "has_https",
        }
    }

    pub fn index(self) -> usize {
        match self {
            FeatureKind::UrlLength => 0,
            FeatureKind::NumDots => 1,
            FeatureKind::NumSlashes => 2,
            FeatureKind::HasHttps => 3,
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatures {
    pub url_length: f64,
    pub num_dots: f64,
    pub num_slashes: f64,
    pub has_https: f64,
}

impl UrlFeatures {
    pub fn get(&self, kind: FeatureKind) -> f64 {
        match kind {
            FeatureKind::UrlLength => self.url_length,
            FeatureKind::NumDots => self.num_dots,
            FeatureKind::NumSlashes => self.num_slashes,
            FeatureKind::HasHttps => self.has_https,
        }
    }

    /// Значения в порядке `FeatureKind::ALL`
    pub fn to_row(&self) -> [f64; 4] {
        FeatureKind::ALL.map(|kind| self.get(kind))
    }
}

/// Диапазон признака до и после масштабирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub feature: FeatureKind,
    pub min_before: f64,
    pub max_before: f64,
    pub min_after: f64,
    pub max_after: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub rows: usize,
    pub columns: usize,
    pub features: Vec<FeatureKind>,
    pub imputed_values: usize,
    pub ranges: Vec<FeatureRange>,
    pub label_counts: Vec<LabelCount>,
    pub output_path: PathBuf,
    #[serde(default)]
    pub plot_paths: Vec<PathBuf>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
