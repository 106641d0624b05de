//! Feature engineering для URL

use ndarray::Array2;

use crate::data::UrlDataset;
use crate::types::{FeatureKind, UrlFeatures};

pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Признаки считаются по тексту URL как есть: без приведения регистра
    /// и без разбора схемы.
    pub fn extract_url_features(url: &str) -> UrlFeatures {
        UrlFeatures {
            url_length: url.chars().count() as f64,
            num_dots: url.matches('.').count() as f64,
            num_slashes: url.matches('/').count() as f64,
            has_https: if url.starts_with("https") { 1.0 } else { 0.0 },
        }
    }

    /// Матрица (строки, 4) в порядке `FeatureKind::ALL`.
    /// Строки без URL заполняются NaN.
    pub fn extract_feature_matrix(dataset: &UrlDataset) -> Array2<f64> {
        let n_samples = dataset.shape().0;
        let n_features = FeatureKind::ALL.len();
        let mut features = Array2::from_elem((n_samples, n_features), f64::NAN);

        for (i, url) in dataset.urls().enumerate() {
            if let Some(url) = url {
                let row = Self::extract_url_features(url).to_row();
                for (j, value) in row.iter().enumerate() {
                    features[[i, j]] = *value;
                }
            }
        }

        features
    }
}
