use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters::style::full_palette;

use ndarray::{Array1, Array2, ArrayView1};

use itertools::Itertools;

// palette order follows the course handouts
const COLORS: [RGBColor; 6] = [
    full_palette::RED,
    full_palette::GREEN,
    full_palette::BLUE,
    full_palette::ORANGE,
    full_palette::BLACK,
    full_palette::CYAN,
];

/// Scatter plot of 2D data, one color/marker per distinct label.
pub fn plot_data<DB>(
    data: &Array2<f64>,
    labels: Option<&Array1<f64>>,
    caption: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let (xmin, xmax, ymin, ymax) = data_bounds(data);
    let (xmin, xmax) = padded(xmin, xmax);
    let (ymin, ymax) = padded(ymin, ymax);

    let mut chart_context = build_chart(caption, xmin..xmax, ymin..ymax, drawing_area)?;

    draw_scatter(&mut chart_context, data, labels)?;

    Ok(())
}

pub struct Grid {
    pub points: Array2<f64>,
    pub x: Array2<f64>,
    pub y: Array2<f64>,
}

/// Builds a `step x step` evaluation mesh. With `data` given, its column extrema
/// replace the explicit bounds. `points` flattens the mesh row-major, one
/// evaluation point per row.
pub fn make_grid(
    data: Option<&Array2<f64>>,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    step: usize,
) -> Grid {
    let (xmin, xmax, ymin, ymax) = match data {
        Some(data) => data_bounds(data),
        None => (xmin, xmax, ymin, ymax),
    };

    let dx = (xmax - xmin) / step as f64;
    let dy = (ymax - ymin) / step as f64;

    let x = Array2::from_shape_fn((step, step), |(_, j)| xmin + j as f64 * dx);
    let y = Array2::from_shape_fn((step, step), |(i, _)| ymin + i as f64 * dy);

    let points = Array2::from_shape_fn((step * step, 2), |(k, c)| {
        if c == 0 {
            x[[k / step, k % step]]
        } else {
            y[[k / step, k % step]]
        }
    });

    Grid { points, x, y }
}

/// Fills the decision regions of `decision` over the data's bounding box (two
/// tones split at zero) and overlays the labeled points when given. Returns the
/// chart so callers can draw more series on top.
pub fn plot_frontiere<'a, DB, F>(
    data: &Array2<f64>,
    decision: F,
    step: usize,
    labels: Option<&Array1<f64>>,
    caption: &str,
    drawing_area: &'a DrawingArea<DB, Shift>,
) -> Result<ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>, Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
    F: Fn(&Array2<f64>) -> Array1<f64>,
{
    let grid = make_grid(Some(data), 0., 0., 0., 0., step);

    let values = decision(&grid.points);
    if values.len() != grid.points.nrows() {
        return Err(format!(
            "decision function returned {} values for {} grid points",
            values.len(),
            grid.points.nrows()
        )
        .into());
    }

    let (xmin, xmax, ymin, ymax) = data_bounds(data);
    let mut chart_context = build_chart(caption, xmin..xmax, ymin..ymax, drawing_area)?;

    let dx = (xmax - xmin) / step as f64;
    let dy = (ymax - ymin) / step as f64;

    chart_context.draw_series(values.iter().enumerate().map(|(k, &value)| {
        let x0 = grid.x[[k / step, k % step]];
        let y0 = grid.y[[k / step, k % step]];

        let color = if value > 0. {
            BLUE.mix(0.2)
        } else {
            full_palette::GREY.mix(0.35)
        };

        Rectangle::new([(x0, y0), (x0 + dx, y0 + dy)], color.filled())
    }))?;

    if labels.is_some() {
        draw_scatter(&mut chart_context, data, labels)?;
    }

    Ok(chart_context)
}

/// Renders a length-`s*s` vector as a reversed-grayscale `s x s` image
/// (large values dark, row 0 on top).
pub fn show_image<DB>(
    v: ArrayView1<f64>,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let side = (v.len() as f64).sqrt().round() as usize;
    if side * side != v.len() {
        return Err(format!("cannot show {} values as a square image", v.len()).into());
    }

    drawing_area.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(drawing_area);

    let mut chart_context = builder.build_cartesian_2d(0..side as i32, 0..side as i32)?;

    let max = find_max_min(v.iter().cloned())
        .map(|m| m.max)
        .unwrap_or(1.);

    chart_context.draw_series(v.iter().enumerate().map(|(k, &value)| {
        let (i, j) = (k / side, k % side);
        let intensity = if max > 0. { (value / max).clamp(0., 1.) } else { 0. };

        Rectangle::new(
            [
                (j as i32, (side - 1 - i) as i32),
                (j as i32 + 1, (side - i) as i32),
            ],
            BLACK.mix(intensity).filled(),
        )
    }))?;

    Ok(())
}

/// Iteration-indexed log-scale plot of a value series.
pub fn plot_trace<DB>(
    values: &Array1<f64>,
    label: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let Some(MinMax { min, max }) = find_max_min(values.iter().cloned()) else {
        return Ok(());
    };

    // log scale cannot touch zero
    let floor = if min > 0. { min } else { 1e-12 };
    let max = if max > floor { max } else { floor * 10. };

    let mut builder = ChartBuilder::on(drawing_area);

    let mut chart_context = builder
        .caption(label, ("Arial", 20))
        .set_all_label_area_size(70)
        .margin(30)
        .build_cartesian_2d(0..values.len(), (floor..max).log_scale())?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc("Iteration")
        .y_labels(10)
        .y_desc(label)
        .y_label_formatter(&|y| format!("{:.1e}", y))
        .draw()?;

    chart_context.draw_series(LineSeries::new(
        values.iter().enumerate().map(|(i, &v)| (i, v.max(floor))),
        BLUE.filled(),
    ))?;

    Ok(())
}

fn build_chart<'a, DB>(
    caption: &str,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
    drawing_area: &'a DrawingArea<DB, Shift>,
) -> Result<ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>, Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(drawing_area);

    let mut chart_context = builder
        .caption(caption, ("Arial", 20))
        .set_all_label_area_size(50)
        .margin(20)
        .build_cartesian_2d(x_range, y_range)?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .draw()?;

    Ok(chart_context)
}

fn draw_scatter<DB>(
    chart_context: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    data: &Array2<f64>,
    labels: Option<&Array1<f64>>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let labels = match labels {
        Some(labels) => labels,
        None => {
            chart_context.draw_series(
                data.outer_iter()
                    .map(|row| Cross::new((row[0], row[1]), 4, BLACK.filled())),
            )?;
            return Ok(());
        }
    };

    assert_eq!(labels.len(), data.nrows());

    for (i, label) in distinct_labels(labels).into_iter().enumerate() {
        let points: Vec<(f64, f64)> = data
            .outer_iter()
            .zip(labels.iter())
            .filter(|(_, &l)| l == label)
            .map(|(row, _)| (row[0], row[1]))
            .collect();

        let style = COLORS[i % COLORS.len()].filled();

        match i % 3 {
            0 => chart_context.draw_series(points.iter().map(|&p| Circle::new(p, 3, style)))?,
            1 => chart_context.draw_series(points.iter().map(|&p| Cross::new(p, 4, style)))?,
            _ => chart_context
                .draw_series(points.iter().map(|&p| TriangleMarker::new(p, 4, style)))?,
        };
    }

    Ok(())
}

fn distinct_labels(labels: &Array1<f64>) -> Vec<f64> {
    labels
        .iter()
        .cloned()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .dedup()
        .collect()
}

fn data_bounds(data: &Array2<f64>) -> (f64, f64, f64, f64) {
    let x = find_max_min(data.column(0).iter().cloned()).unwrap_or(MinMax { min: -5., max: 5. });
    let y = find_max_min(data.column(1).iter().cloned()).unwrap_or(MinMax { min: -5., max: 5. });
    (x.min, x.max, y.min, y.max)
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    let margin = (max - min).max(1e-6) * 0.05;
    (min - margin, max + margin)
}

pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

pub fn find_max_min<T: std::cmp::PartialOrd + Copy>(
    mut data: impl Iterator<Item = T>,
) -> Option<MinMax<T>> {
    let init = data.next()?;
    let mut min_max = MinMax {
        min: init,
        max: init,
    };

    for x in data {
        min_max = MinMax {
            min: if x < min_max.min { x } else { min_max.min },
            max: if x > min_max.max { x } else { min_max.max },
        };
    }

    Some(min_max)
}
