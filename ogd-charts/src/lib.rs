//! Chart layer for the Olympic dashboard:
//! - `adapters`: domain records to renderer input shapes
//! - `palette`: the fixed color palette with label-keyed assignment
//! - `pie`: circular proportion chart geometry and interaction
//! - `area`: plotters-backed area chart

pub mod adapters;
pub mod area;
pub mod palette;
pub mod pie;

pub use adapters::{to_area_series, to_chart_slices, AreaPoint, AreaSeries, ChartSlice};
pub use pie::{PieChart, PieChartOptions};
