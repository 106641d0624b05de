//! Описательная статистика для отчета

use std::collections::HashMap;

use ndarray::{Array2, ArrayView1};

use crate::types::{FeatureKind, FeatureRange, LabelCount};

/// (min, max) без учета NaN; `None` для пустого столбца
pub fn column_range(values: ArrayView1<f64>) -> Option<(f64, f64)> {
    values
        .iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Сводка диапазонов признаков до и после масштабирования
pub fn feature_ranges(before: &Array2<f64>, after: &Array2<f64>) -> Vec<FeatureRange> {
    FeatureKind::ALL
        .iter()
        .map(|&feature| {
            let j = feature.index();
            let (min_before, max_before) = column_range(before.column(j)).unwrap_or((f64::NAN, f64::NAN));
            let (min_after, max_after) = column_range(after.column(j)).unwrap_or((f64::NAN, f64::NAN));
            FeatureRange {
                feature,
                min_before,
                max_before,
                min_after,
                max_after,
            }
        })
        .collect()
}

/// Частоты меток по убыванию; при равенстве сохраняется порядок появления
pub fn label_counts<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        let count = counts.entry(label).or_insert_with(|| {
            order.push(label);
            0
        });
        *count += 1;
    }

    let mut result: Vec<LabelCount> = order
        .into_iter()
        .map(|label| LabelCount {
            label: label.to_string(),
            count: counts[label],
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Равные интервалы по [min, max]; правая граница последнего интервала включена.
/// Для константных данных диапазон расширяется на 0.5 в обе стороны.
pub fn histogram(values: ArrayView1<f64>, bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let Some((mut lo, mut hi)) = column_range(values) else {
        return Vec::new();
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values.iter().filter(|v| !v.is_nan()) {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        result[idx].count += 1;
    }

    result
}

/// Гауссова оценка плотности на равномерной сетке из `points` точек по [min, max].
/// Ширина окна по правилу Скотта: `std * n^(-1/5)`.
/// Пустой результат, если данных меньше двух или дисперсия нулевая.
pub fn gaussian_kde(values: ArrayView1<f64>, points: usize) -> Vec<(f64, f64)> {
    let observed: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let n = observed.len();
    if n < 2 || points < 2 {
        return Vec::new();
    }

    let mean = observed.iter().sum::<f64>() / n as f64;
    let variance = observed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();
    if std < 1e-12 {
        return Vec::new();
    }

    let bandwidth = std * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let (lo, hi) = observed
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let step = (hi - lo) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = observed
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum();
            (x, density * norm)
        })
        .collect()
}
