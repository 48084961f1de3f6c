use plotters::style::RGBColor;
use std::collections::HashMap;

/// Fixed slice palette, cycled with wraparound when there are more labels
/// than entries.
pub const PALETTE: [RGBColor; 5] = [
    RGBColor(0x95, 0x60, 0x65),
    RGBColor(0x79, 0x3D, 0x52),
    RGBColor(0x89, 0xA1, 0xDB),
    RGBColor(0x97, 0x80, 0xA1),
    RGBColor(0xBF, 0xE0, 0xF1),
];

/// Ordinal color scale keyed by label identity, not draw order. A label
/// keeps its palette slot for the lifetime of the scale, so re-sorted data
/// renders with the same colors.
#[derive(Debug, Default)]
pub struct ColorScale {
    assigned: HashMap<String, usize>,
}

impl ColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette index for this label, assigned first-seen with wraparound.
    pub fn index_for(&mut self, label: &str) -> usize {
        let next = self.assigned.len() % PALETTE.len();
        *self.assigned.entry(label.to_string()).or_insert(next)
    }

    pub fn color_for(&mut self, label: &str) -> RGBColor {
        PALETTE[self.index_for(label)]
    }
}
