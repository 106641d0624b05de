//! Заполнение пропусков медианой

#![allow(non_snake_case)]

use ndarray::{Array1, Array2, Axis};

use crate::error::{PipelineError, Result};
use crate::types::FeatureKind;

/// Количество пропусков (NaN) в матрице
pub fn count_missing(X: &Array2<f64>) -> usize {
    X.iter().filter(|v| v.is_nan()).count()
}

/// Медиана значений без пропусков; `None`, если таких нет
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut observed: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    if observed.is_empty() {
        return None;
    }
    observed.sort_by(|a, b| a.total_cmp(b));

    let mid = observed.len() / 2;
    if observed.len() % 2 == 0 {
        Some((observed[mid - 1] + observed[mid]) / 2.0)
    } else {
        Some(observed[mid])
    }
}

pub struct MedianImputer {
    medians: Option<Array1<f64>>,
}

impl MedianImputer {
    pub fn new() -> Self {
        Self { medians: None }
    }

    pub fn fit(&mut self, X: &Array2<f64>) -> Result<()> {
        let mut medians = Array1::zeros(X.ncols());
        for (j, column) in X.axis_iter(Axis(1)).enumerate() {
            medians[j] = median(column.iter().copied()).ok_or_else(|| {
                PipelineError::AllMissing {
                    feature: feature_name(j),
                }
            })?;
        }

        self.medians = Some(medians);
        Ok(())
    }

    pub fn transform(&self, X: &Array2<f64>) -> Result<Array2<f64>> {
        let medians = self.medians.as_ref().ok_or(PipelineError::NotFitted("Imputer"))?;
        if X.ncols() != medians.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: medians.len(),
                actual: X.ncols(),
            });
        }

        let mut filled = X.clone();
        for mut row in filled.rows_mut() {
            for (j, val) in row.iter_mut().enumerate() {
                if val.is_nan() {
                    *val = medians[j];
                }
            }
        }

        Ok(filled)
    }

    pub fn fit_transform(&mut self, X: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(X)?;
        self.transform(X)
    }

    pub fn medians(&self) -> Option<&Array1<f64>> {
        self.medians.as_ref()
    }
}

impl Default for MedianImputer {
    fn default() -> Self {
        Self::new()
    }
}

fn feature_name(column: usize) -> String {
    FeatureKind::ALL
        .get(column)
        .map(|k| k.name().to_string())
        .unwrap_or_else(|| format!("column {column}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_median() {
        assert_eq!(median([3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median([4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median([f64::NAN, 5.0]), Some(5.0));
        assert_eq!(median([f64::NAN]), None);
    }

    #[test]
    fn test_fills_with_column_median() {
        let nan = f64::NAN;
        let X = array![
            [10.0, 1.0, 2.0, 1.0],
            [nan, 3.0, nan, 0.0],
            [20.0, nan, 4.0, 1.0],
            [40.0, 5.0, 6.0, nan],
        ];
        assert_eq!(count_missing(&X), 4);

        let mut imputer = MedianImputer::new();
        let filled = imputer.fit_transform(&X).unwrap();

        assert_eq!(count_missing(&filled), 0);
        assert_eq!(filled[[1, 0]], 20.0);
        assert_eq!(filled[[2, 1]], 3.0);
        assert_eq!(filled[[1, 2]], 4.0);
        assert_eq!(filled[[3, 3]], 1.0);
        // Наблюдаемые значения не меняются
        assert_eq!(filled[[0, 0]], 10.0);
        assert_eq!(filled[[3, 2]], 6.0);
    }

    #[test]
    fn test_all_missing_column() {
        let nan = f64::NAN;
        let X = array![[1.0, nan, 1.0, 0.0], [2.0, nan, 1.0, 1.0]];

        let err = MedianImputer::new().fit(&X).unwrap_err();
        match err {
            PipelineError::AllMissing { feature } => assert_eq!(feature, "num_dots"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_transform_requires_fit() {
        let X = array![[1.0, 2.0, 3.0, 0.0]];
        assert!(matches!(
            MedianImputer::new().transform(&X),
            Err(PipelineError::NotFitted(_))
        ));
    }
}
