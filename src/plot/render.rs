//! PNG rendering of [`LineChart`]s with plotters.

use std::path::Path;

use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use super::charts::LineChart;
use crate::error::{BenchError, Result};

const SIZE: (u32, u32) = (1200, 900);

/// Pad a data interval so single points and flat lines stay visible.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { lo.abs().max(1.0) * 0.1 };
    (lo - pad, hi + pad)
}

fn draw_lines<'a, DB, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    spec: &LineChart,
) -> core::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .draw()?;

    for (i, series) in spec.series.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(LineSeries::new(series.points.iter().copied(), color.stroke_width(2)).point_size(4))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !spec.series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}

/// Render `spec` to a PNG at `path`, replacing any existing file.
pub fn render(spec: &LineChart, path: &Path) -> Result<()> {
    let plot_err = |reason: String| BenchError::Plot {
        path: path.to_path_buf(),
        reason,
    };

    let positive;
    let spec = if spec.log_y {
        positive = spec.positive_only();
        &positive
    } else {
        spec
    };
    let bounds = spec.bounds();
    let ((x_lo, x_hi), _) = bounds.unwrap_or(((0.0, 1.0), (0.0, 1.0)));
    let (x_lo, x_hi) = padded(x_lo, x_hi);

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(e.to_string()))?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(spec.title.as_str(), ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90);

    if spec.log_y {
        // Only positive points remain, so the smallest one is a usable floor.
        let (floor, top) = bounds.map_or((1.0, 1.0), |(_, y)| y);
        let mut chart = builder
            .build_cartesian_2d(x_lo..x_hi, (floor * 0.8..top * 1.25).log_scale())
            .map_err(|e| plot_err(e.to_string()))?;
        draw_lines(&mut chart, spec).map_err(|e| plot_err(e.to_string()))?;
    } else {
        let y_hi = bounds.map_or(0.0, |(_, (_, hi))| hi);
        let top = if y_hi > 0.0 { y_hi * 1.1 } else { 1.0 };
        let mut chart = builder
            .build_cartesian_2d(x_lo..x_hi, 0.0..top)
            .map_err(|e| plot_err(e.to_string()))?;
        draw_lines(&mut chart, spec).map_err(|e| plot_err(e.to_string()))?;
    }

    root.present().map_err(|e| plot_err(e.to_string()))
}
