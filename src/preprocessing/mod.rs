/// Модуль предобработки данных

pub mod feature_engineering;
pub mod imputation;
pub mod normalization;

pub use feature_engineering::FeatureEngineer;
pub use imputation::{count_missing, MedianImputer};
pub use normalization::MinMaxScaler;
