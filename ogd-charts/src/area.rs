//! Area chart: a thin plotters wrapper over adapter-produced series, with a
//! category x-axis that keeps the series' point order.

use crate::adapters::AreaSeries;
use crate::palette::PALETTE;
use plotters::prelude::*;
use plotters::series::AreaSeries as AreaSeriesElement;

#[derive(Debug, Clone)]
pub struct AreaChartOptions {
    pub width: u32,
    pub height: u32,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Palette index of the first series; later series advance from it.
    pub color_index: usize,
}

impl Default for AreaChartOptions {
    fn default() -> Self {
        Self {
            width: 700,
            height: 350,
            x_axis_title: String::new(),
            y_axis_title: String::new(),
            color_index: 0,
        }
    }
}

/// Draw the series into an SVG string. An empty series list draws nothing
/// and leaves the string untouched.
pub fn render_svg(series: &[AreaSeries], options: &AreaChartOptions, svg_inner_string: &mut String) {
    if series.is_empty() || series.iter().all(|s| s.points.is_empty()) {
        return;
    }
    let point_count = series.iter().map(|s| s.points.len()).max().unwrap_or(0);
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.y))
        .fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    let x_max = (point_count - 1).max(1) as f64;

    let size = (options.width, options.height);
    let backend = SVGBackend::with_string(svg_inner_string, size);
    let drawing_area = backend.into_drawing_area();
    drawing_area.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&drawing_area)
        .margin(20i32)
        .x_label_area_size(40u32)
        .y_label_area_size(40u32)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .unwrap();

    // Category axis: positions are point indices, labelled with the series'
    // own x values in their stored order, never resorted.
    let labels = &series[0].points;
    chart
        .configure_mesh()
        .x_labels(point_count)
        .x_label_formatter(&|position| {
            let index = position.round() as usize;
            match labels.get(index) {
                Some(point) => point.x.to_string(),
                None => String::new(),
            }
        })
        .x_desc(options.x_axis_title.clone())
        .y_desc(options.y_axis_title.clone())
        .draw()
        .unwrap();

    for (series_index, entry) in series.iter().enumerate() {
        let color = PALETTE[(options.color_index + series_index) % PALETTE.len()];
        let points: Vec<(f64, f64)> = entry
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| (index as f64, point.y))
            .collect();
        chart
            .draw_series(AreaSeriesElement::new(points.clone(), 0.0, color.mix(0.4)))
            .unwrap()
            .label(entry.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .unwrap();
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .unwrap();
    drawing_area.present().unwrap();
}
