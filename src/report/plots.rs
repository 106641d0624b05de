//! Графики распределений и баланса классов (PNG)

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::ArrayView1;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::report::stats;
use crate::types::{FeatureKind, LabelCount};

const KDE_POINTS: usize = 200;

const PASTEL: [RGBColor; 4] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 155),
];

fn plot_err<E: std::fmt::Display>(e: E) -> PipelineError {
    PipelineError::Plot(e.to_string())
}

/// Гистограммы признака до и после масштабирования рядом друг с другом
pub fn render_feature_histograms(
    feature: FeatureKind,
    before: ArrayView1<f64>,
    after: ArrayView1<f64>,
    bins: usize,
    kde: bool,
    dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_scaling.png", feature.name()));

    {
        let root = BitMapBackend::new(&path, (1200, 500)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;
        let (left, right) = root.split_horizontally(600);

        draw_histogram(&left, &format!("Before Scaling: {feature}"), before, bins, kde, &BLUE)?;
        draw_histogram(&right, &format!("After MinMax Scaling: {feature}"), after, bins, kde, &GREEN)?;

        root.present().map_err(plot_err)?;
    }

    debug!("Histogram for {} saved to {}", feature, path.display());
    Ok(path)
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    values: ArrayView1<f64>,
    bins: usize,
    kde: bool,
    color: &RGBColor,
) -> Result<()> {
    let hist = stats::histogram(values, bins);
    let (Some(first), Some(last)) = (hist.first(), hist.last()) else {
        return Ok(());
    };
    let (x_lo, x_hi) = (first.start, last.end);
    let y_max = hist.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .y_desc("Count")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(hist.iter().map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], color.mix(0.5).filled())
        }))
        .map_err(plot_err)?;

    if kde {
        // Плотность переводится в масштаб счетчиков
        let n = values.iter().filter(|v| !v.is_nan()).count() as f64;
        let bin_width = (x_hi - x_lo) / hist.len() as f64;
        let curve = stats::gaussian_kde(values, KDE_POINTS);
        if !curve.is_empty() {
            chart
                .draw_series(LineSeries::new(
                    curve.into_iter().map(|(x, d)| (x, d * n * bin_width)),
                    color.stroke_width(2),
                ))
                .map_err(plot_err)?;
        }
    }

    Ok(())
}

/// Столбчатая диаграмма количества меток
pub fn render_class_balance(counts: &[LabelCount], dir: &Path) -> Result<PathBuf> {
    if counts.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }
    fs::create_dir_all(dir)?;
    let path = dir.join("class_balance.png");

    {
        let root = BitMapBackend::new(&path, (600, 400)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
        let last = (counts.len() - 1) as u32;
        let y_max = (counts.iter().map(|c| c.count).max().unwrap_or(0) as f64 * 1.1).ceil() as u32 + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption("Class Balance: Good vs Bad URLs", ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..last.max(1)).into_segmented(), 0u32..y_max)
            .map_err(plot_err)?;

        let formatter = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Label")
            .y_desc("Count")
            .x_label_formatter(&formatter)
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, c)| {
                let i = i as u32;
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0),
                        (SegmentValue::Exact(i + 1), c.count as u32),
                    ],
                    PASTEL[i as usize % PASTEL.len()].filled(),
                )
            }))
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
    }

    debug!("Class balance plot saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    fn assert_png(path: &Path) {
        let bytes = fs::read(path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_render_feature_histograms() {
        let dir = tempdir().unwrap();
        let before = array![15.0, 12.0, 16.0, 13.0, 20.0];
        let after = array![0.375, 0.0, 0.5, 0.125, 1.0];

        let path = render_feature_histograms(
            FeatureKind::UrlLength,
            before.view(),
            after.view(),
            50,
            true,
            &dir.path().join("plots"),
        )
        .unwrap();

        assert_eq!(path, dir.path().join("plots/url_length_scaling.png"));
        assert_png(&path);
    }

    #[test]
    fn test_all_missing_column_renders_blank_panels() {
        let dir = tempdir().unwrap();
        let missing = array![f64::NAN, f64::NAN];

        let path = render_feature_histograms(
            FeatureKind::NumDots,
            missing.view(),
            missing.view(),
            10,
            true,
            dir.path(),
        )
        .unwrap();

        assert_png(&path);
    }

    #[test]
    fn test_render_class_balance() {
        let dir = tempdir().unwrap();
        let counts = vec![
            LabelCount { label: "good".into(), count: 3 },
            LabelCount { label: "bad".into(), count: 2 },
        ];

        let path = render_class_balance(&counts, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("class_balance.png"));
        assert_png(&path);
    }

    #[test]
    fn test_class_balance_requires_counts() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("plots");

        let err = render_class_balance(&[], &target).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyDataset));
        assert!(!target.exists());
    }
}
