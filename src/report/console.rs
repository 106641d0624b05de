//! Текстовый отчет в консоль

use std::fmt::Write as _;

use crate::data::UrlDataset;
use crate::types::{FeatureKind, FeatureRange, LabelCount};

pub fn format_shape(dataset: &UrlDataset) -> String {
    let (rows, cols) = dataset.shape();
    format!("Data shape: ({rows}, {cols})")
}

/// Первые строки набора с номером строки слева
pub fn format_head(dataset: &UrlDataset, n: usize) -> String {
    let mut out = String::new();
    let header: Vec<&str> = dataset.headers().iter().collect();
    let _ = writeln!(out, "    {}", header.join("  "));
    for (i, record) in dataset.head(n).iter().enumerate() {
        let fields: Vec<&str> = record.iter().collect();
        let _ = writeln!(out, "{:<3} {}", i, fields.join("  "));
    }
    out
}

pub fn format_features(features: &[FeatureKind]) -> String {
    let names: Vec<&str> = features.iter().map(|f| f.name()).collect();
    format!("Numeric Features: [{}]", names.join(", "))
}

pub fn format_range_comparison(range: &FeatureRange) -> String {
    format!(
        "Original range of '{}': {} to {}\nScaled range of '{}': {:?} to {:?}",
        range.feature,
        range.min_before,
        range.max_before,
        range.feature,
        range.min_after,
        range.max_after,
    )
}

pub fn format_label_counts(counts: &[LabelCount]) -> String {
    let width = counts.iter().map(|c| c.label.len()).max().unwrap_or(0).max("Label".len());
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  count", "Label");
    for c in counts {
        let _ = writeln!(out, "{:<width$}  {}", c.label, c.count);
    }
    out
}

/// Сводная таблица диапазонов признаков
pub fn format_summary_table(ranges: &[FeatureRange]) -> String {
    const COLUMNS: [&str; 5] = ["Feature", "Min (Before)", "Max (Before)", "Min (After)", "Max (After)"];

    let rows: Vec<[String; 5]> = ranges
        .iter()
        .map(|r| {
            [
                r.feature.name().to_string(),
                r.min_before.to_string(),
                r.max_before.to_string(),
                format!("{:?}", r.min_after),
                format!("{:?}", r.max_after),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths.iter())
        .map(|(c, &w)| format!("{c:>w$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("  "));
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(c, &w)| format!("{c:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}
