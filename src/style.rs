//! Style definitions for palettes, markers, and line patterns.
pub mod cycle;
pub(crate) mod defaults;
pub mod marker;
pub mod palette;

pub use cycle::PropCycle;
pub use marker::MarkerShape;
pub use palette::Palette;

/// Dash pattern for dashed lines
///
/// A dash pattern is a sequence of lengths that specify the lengths of
/// alternating dashes and gaps, relative to the line width.
#[derive(Debug, Clone, PartialEq)]
pub struct Dash(pub Vec<f32>);

impl Default for Dash {
    fn default() -> Self {
        Dash(vec![5.0, 5.0])
    }
}

/// Line pattern defines how a line is drawn
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LinePattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(Dash),
    /// Dotted line. Equivalent to Dash(1.0, 1.0)
    Dot,
}

impl From<Dash> for LinePattern {
    fn from(dash: Dash) -> Self {
        LinePattern::Dash(dash)
    }
}
