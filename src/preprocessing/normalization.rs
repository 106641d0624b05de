//! Нормализация данных (MinMax)

#![allow(non_snake_case)]

use ndarray::{Array1, Array2, Axis};

use crate::error::{PipelineError, Result};

/// Приводит каждый признак к диапазону [0, 1]:
/// `(x - min) / (max - min)`.
///
/// Для константного признака (`max == min`) масштаб считается равным 1,
/// поэтому все значения переходят в 0.
pub struct MinMaxScaler {
    data_min: Option<Array1<f64>>,
    data_max: Option<Array1<f64>>,
    scale: Option<Array1<f64>>,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self {
            data_min: None,
            data_max: None,
            scale: None,
        }
    }

    pub fn fit(&mut self, X: &Array2<f64>) -> Result<()> {
        if X.nrows() == 0 {
            return Err(PipelineError::EmptyDataset);
        }

        let data_min = X.fold_axis(Axis(0), f64::INFINITY, |acc, &v| acc.min(v));
        let data_max = X.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &v| acc.max(v));

        // Избегаем деления на ноль
        let scale = (&data_max - &data_min).mapv(|range| if range == 0.0 { 1.0 } else { range });

        self.data_min = Some(data_min);
        self.data_max = Some(data_max);
        self.scale = Some(scale);
        Ok(())
    }

    pub fn transform(&self, X: &Array2<f64>) -> Result<Array2<f64>> {
        let (min, scale) = self.fitted(X)?;

        let mut scaled = X.clone();
        for mut row in scaled.rows_mut() {
            for (i, val) in row.iter_mut().enumerate() {
                *val = (*val - min[i]) / scale[i];
            }
        }

        Ok(scaled)
    }

    pub fn fit_transform(&mut self, X: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(X)?;
        self.transform(X)
    }

    pub fn inverse_transform(&self, X: &Array2<f64>) -> Result<Array2<f64>> {
        let (min, scale) = self.fitted(X)?;

        let mut restored = X.clone();
        for mut row in restored.rows_mut() {
            for (i, val) in row.iter_mut().enumerate() {
                *val = *val * scale[i] + min[i];
            }
        }

        Ok(restored)
    }

    pub fn data_min(&self) -> Option<&Array1<f64>> {
        self.data_min.as_ref()
    }

    pub fn data_max(&self) -> Option<&Array1<f64>> {
        self.data_max.as_ref()
    }

    fn fitted(&self, X: &Array2<f64>) -> Result<(&Array1<f64>, &Array1<f64>)> {
        let min = self.data_min.as_ref().ok_or(PipelineError::NotFitted("Scaler"))?;
        let scale = self.scale.as_ref().ok_or(PipelineError::NotFitted("Scaler"))?;
        if X.ncols() != min.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: min.len(),
                actual: X.ncols(),
            });
        }
        Ok((min, scale))
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_scaled_range_is_unit_interval() {
        let X = array![
            [15.0, 1.0, 3.0, 1.0],
            [12.0, 1.0, 2.0, 0.0],
            [16.0, 1.0, 4.0, 1.0],
            [13.0, 2.0, 2.0, 0.0],
        ];

        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&X).unwrap();

        for j in [0, 2, 3] {
            let col = scaled.column(j);
            assert_eq!(col.fold(f64::INFINITY, |a, &b| a.min(b)), 0.0);
            assert_eq!(col.fold(f64::NEG_INFINITY, |a, &b| a.max(b)), 1.0);
        }
        assert_abs_diff_eq!(scaled[[0, 0]], 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[[3, 0]], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[[0, 2]], 0.5, epsilon = 1e-12);

        // Исходная матрица не изменяется
        assert_eq!(X[[0, 0]], 15.0);
    }

    #[test]
    fn test_linear_relationship_holds() {
        let X = array![[3.0], [7.5], [-2.0], [10.0], [4.25]];
        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&X).unwrap();

        let min = scaler.data_min().unwrap()[0];
        let max = scaler.data_max().unwrap()[0];
        assert_eq!((min, max), (-2.0, 10.0));
        for (orig, s) in X.column(0).iter().zip(scaled.column(0).iter()) {
            assert_abs_diff_eq!(*s, (orig - min) / (max - min), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let X = array![[1.0, 5.0], [1.0, 6.0], [1.0, 7.0]];
        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&X).unwrap();

        assert!(scaled.column(0).iter().all(|&v| v == 0.0));
        assert_abs_diff_eq!(scaled[[1, 1]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_transform_restores_values() {
        let X = array![[12.0, 0.0], [16.0, 1.0], [15.0, 1.0], [9.0, 1.0]];
        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&X).unwrap();
        let restored = scaler.inverse_transform(&scaled).unwrap();

        for (a, b) in X.iter().zip(restored.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_errors() {
        let empty = Array2::<f64>::zeros((0, 4));
        assert!(matches!(
            MinMaxScaler::new().fit(&empty),
            Err(PipelineError::EmptyDataset)
        ));

        let X = array![[1.0, 2.0]];
        assert!(matches!(
            MinMaxScaler::new().transform(&X),
            Err(PipelineError::NotFitted(_))
        ));

        let mut scaler = MinMaxScaler::new();
        scaler.fit(&X).unwrap();
        assert!(matches!(
            scaler.transform(&array![[1.0, 2.0, 3.0]]),
            Err(PipelineError::ShapeMismatch { expected: 2, actual: 3 })
        ));
    }
}
