//! Circular proportion chart: explicit slice geometry, external labels with
//! leader lines, and the hover/click interaction model.
//!
//! Angle convention: 0 at 12 o'clock, increasing clockwise, so the point at
//! angle `a` and radius `r` about the center is `(sin a * r, -cos a * r)`
//! in screen coordinates (y grows downward).

use crate::adapters::ChartSlice;
use crate::palette::ColorScale;
use plotters::element::Polygon;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::{PI, TAU};

/// Gutter reserved around the circle for the external labels.
const LABEL_MARGIN: f64 = 80.0;
/// Leader lines start just outside the arc.
const LEADER_GAP: f64 = 5.0;
/// The guide circle the leader elbow sits on, as a fraction of the radius.
const GUIDE_RADIUS_FACTOR: f64 = 1.1;
/// Horizontal offset of the leader end, as a fraction of the radius.
const LEADER_END_FACTOR: f64 = 1.25;
/// Horizontal offset of the label anchor, as a fraction of the radius.
const LABEL_FACTOR: f64 = 1.3;

const LEADER_COLOR: RGBColor = RGBColor(0x33, 0x33, 0x33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Left-aligned text, used on the right half of the circle.
    Start,
    /// Right-aligned text, used on the left half.
    End,
}

/// Everything computed for one slice: arc span, color, leader polyline and
/// label placement.
#[derive(Debug, Clone)]
pub struct SliceGeometry {
    pub label: String,
    pub value: f64,
    pub correlation_id: Option<u32>,
    pub color: RGBColor,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Three points: just outside the arc, on the guide circle, and at the
    /// horizontal offset the label hangs from.
    pub leader: [(f64, f64); 3],
    pub label_pos: (f64, f64),
    pub anchor: LabelAnchor,
}

impl SliceGeometry {
    pub fn angular_width(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// The full layout for one render: shared circle metrics plus per-slice
/// geometry. Discarded wholesale on every data change.
#[derive(Debug, Clone)]
pub struct PieLayout {
    pub center: (f64, f64),
    pub radius: f64,
    pub inner_radius: f64,
    pub slices: Vec<SliceGeometry>,
}

#[derive(Debug, Clone)]
pub struct PieChartOptions {
    pub width: u32,
    pub height: u32,
    /// Donut hole as a fraction of the outer radius; 0 for a full pie.
    pub inner_radius_fraction: f64,
    /// Unit suffix shown after the value in the tooltip, e.g. "medals".
    pub tooltip_suffix: String,
}

impl Default for PieChartOptions {
    fn default() -> Self {
        Self {
            width: 700,
            height: 400,
            inner_radius_fraction: 0.0,
            tooltip_suffix: String::new(),
        }
    }
}

/// Transient hover feedback; never part of the persisted layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub label: String,
    pub value: f64,
    pub suffix: String,
    pub x: f64,
    pub y: f64,
}

enum PieState {
    Empty,
    Rendered(PieLayout),
}

/// The circular chart renderer and its interaction state machine.
///
/// `Empty` until data with a positive total arrives, then `Rendered`;
/// every [`PieChart::set_data`] discards the previous layout entirely
/// before computing the next one, so no stale geometry survives.
pub struct PieChart {
    options: PieChartOptions,
    colors: ColorScale,
    state: PieState,
    tooltip: Option<Tooltip>,
}

impl PieChart {
    pub fn new(options: PieChartOptions) -> Self {
        Self {
            options,
            colors: ColorScale::new(),
            state: PieState::Empty,
            tooltip: None,
        }
    }

    pub fn layout(&self) -> Option<&PieLayout> {
        match &self.state {
            PieState::Empty => None,
            PieState::Rendered(layout) => Some(layout),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layout().is_none()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Recompute the layout from scratch. No data, or a zero total, moves
    /// the chart to `Empty`. Slices are laid out as contiguous clockwise
    /// arcs in input order; a zero-value slice keeps a zero-width arc but
    /// stays in the leader/label pass.
    pub fn set_data(&mut self, slices: &[ChartSlice]) {
        self.state = PieState::Empty;
        self.tooltip = None;

        let total: f64 = slices.iter().map(|s| s.value).sum();
        if slices.is_empty() || total <= 0.0 {
            return;
        }

        let width = f64::from(self.options.width);
        let height = f64::from(self.options.height);
        let center = (width / 2.0, height / 2.0);
        let radius = width.min(height) / 2.0 - LABEL_MARGIN;
        let inner_radius = radius * self.options.inner_radius_fraction.clamp(0.0, 1.0);

        let mut geometry = Vec::with_capacity(slices.len());
        let mut angle = 0.0f64;
        for slice in slices {
            let start_angle = angle;
            let end_angle = angle + TAU * slice.value / total;
            angle = end_angle;
            let mid_angle = start_angle + (end_angle - start_angle) / 2.0;

            // Left-half slices hang their labels to the left, right-half to
            // the right, all horizontally aligned per side.
            let side = if mid_angle < PI { 1.0 } else { -1.0 };
            let arc_exit = point_at(center, mid_angle, radius + LEADER_GAP);
            let elbow = point_at(center, mid_angle, radius * GUIDE_RADIUS_FACTOR);
            let leader_end = (center.0 + radius * LEADER_END_FACTOR * side, elbow.1);
            let label_pos = (center.0 + radius * LABEL_FACTOR * side, elbow.1);

            geometry.push(SliceGeometry {
                label: slice.label.clone(),
                value: slice.value,
                correlation_id: slice.correlation_id,
                color: self.colors.color_for(&slice.label),
                start_angle,
                end_angle,
                mid_angle,
                leader: [arc_exit, elbow, leader_end],
                label_pos,
                anchor: if side > 0.0 {
                    LabelAnchor::Start
                } else {
                    LabelAnchor::End
                },
            });
        }

        self.state = PieState::Rendered(PieLayout {
            center,
            radius,
            inner_radius,
            slices: geometry,
        });
    }

    /// Index of the slice under the pointer, if any. Zero-width slices are
    /// never hit.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let layout = self.layout()?;
        let dx = x - layout.center.0;
        let dy = y - layout.center.1;
        let distance = dx.hypot(dy);
        if distance > layout.radius || distance < layout.inner_radius {
            return None;
        }
        let mut theta = dx.atan2(-dy);
        if theta < 0.0 {
            theta += TAU;
        }
        let hit = layout.slices.iter().position(|slice| {
            slice.angular_width() > 0.0
                && theta >= slice.start_angle
                && theta < slice.end_angle
        });
        // Floating-point residue can leave a sliver between the last arc's
        // end and a full turn.
        hit.or_else(|| {
            let last_end = layout.slices.last().map(|s| s.end_angle)?;
            if theta >= last_end {
                layout.slices.iter().rposition(|s| s.angular_width() > 0.0)
            } else {
                None
            }
        })
    }

    /// Pointer entered the chart area: show the tooltip when over a slice.
    pub fn pointer_over(&mut self, x: f64, y: f64) {
        self.tooltip = self.hit_test(x, y).and_then(|index| {
            let slice = &self.layout()?.slices[index];
            Some(Tooltip {
                label: slice.label.clone(),
                value: slice.value,
                suffix: self.options.tooltip_suffix.clone(),
                x: x + 10.0,
                y: y - 10.0,
            })
        });
    }

    /// Pointer moved: reposition the tooltip near the cursor, or hide it
    /// when the pointer leaves every slice.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer_over(x, y);
    }

    /// Pointer left the chart: hide the tooltip.
    pub fn pointer_out(&mut self) {
        self.tooltip = None;
    }

    /// Click on a slice emits its correlation id; slices without one are
    /// not clickable.
    pub fn click(&self, x: f64, y: f64) -> Option<u32> {
        let index = self.hit_test(x, y)?;
        self.layout()?.slices[index].correlation_id
    }

    /// Draw the current layout into an SVG string. `Empty` draws nothing
    /// and leaves the string untouched.
    pub fn render_svg(&self, svg_inner_string: &mut String) {
        let layout = match &self.state {
            PieState::Empty => return,
            PieState::Rendered(layout) => layout,
        };
        let size = (self.options.width, self.options.height);
        let backend = SVGBackend::with_string(svg_inner_string, size);
        let drawing_area = backend.into_drawing_area();
        drawing_area.fill(&WHITE).unwrap();

        for slice in &layout.slices {
            if slice.angular_width() > 0.0 {
                let outline = arc_outline(layout, slice);
                drawing_area
                    .draw(&Polygon::new(outline.clone(), slice.color.filled()))
                    .unwrap();
                let mut border = outline;
                border.push(border[0]);
                drawing_area
                    .draw(&PathElement::new(border, WHITE.stroke_width(2)))
                    .unwrap();
            }

            // Zero-width slices keep their leader line and label.
            let leader: Vec<(i32, i32)> = slice.leader.iter().map(|p| to_pixel(*p)).collect();
            drawing_area
                .draw(&PathElement::new(leader, LEADER_COLOR.stroke_width(1)))
                .unwrap();

            let h_pos = match slice.anchor {
                LabelAnchor::Start => HPos::Left,
                LabelAnchor::End => HPos::Right,
            };
            let style = ("sans-serif", 12)
                .into_font()
                .color(&LEADER_COLOR)
                .pos(Pos::new(h_pos, VPos::Center));
            drawing_area
                .draw(&Text::new(
                    slice.label.clone(),
                    to_pixel(slice.label_pos),
                    style,
                ))
                .unwrap();
        }
        drawing_area.present().unwrap();
    }
}

fn point_at(center: (f64, f64), angle: f64, radius: f64) -> (f64, f64) {
    (
        center.0 + angle.sin() * radius,
        center.1 - angle.cos() * radius,
    )
}

fn to_pixel(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

/// Closed outline of a slice's arc, sampled roughly every degree. A full
/// pie fans out from the center; a donut walks the outer arc forward and
/// the inner arc back.
fn arc_outline(layout: &PieLayout, slice: &SliceGeometry) -> Vec<(i32, i32)> {
    let steps = ((slice.angular_width() / PI * 180.0).ceil() as usize).max(2);
    let sample = |radius: f64, step: usize| {
        let angle = slice.start_angle + slice.angular_width() * step as f64 / steps as f64;
        to_pixel(point_at(layout.center, angle, radius))
    };

    let mut points = Vec::with_capacity(steps + 2);
    if layout.inner_radius > 0.0 {
        for step in 0..=steps {
            points.push(sample(layout.radius, step));
        }
        for step in (0..=steps).rev() {
            points.push(sample(layout.inner_radius, step));
        }
    } else {
        points.push(to_pixel(layout.center));
        for step in 0..=steps {
            points.push(sample(layout.radius, step));
        }
    }
    points
}
