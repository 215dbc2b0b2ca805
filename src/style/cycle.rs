/*!
 * The per-series property cycle.
 *
 * Successive plotted series draw their color and marker from the cycle in
 * turn, so that a figure stays readable without per-series styling.
 */
use crate::ColorU8;
use crate::style::marker::{self, MarkerShape};
use crate::style::palette;

/// Properties assigned to one plotted series by the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesProps {
    /// Series color
    pub color: ColorU8,
    /// Series marker shape
    pub marker: MarkerShape,
}

/// An ordered sequence of colors paired positionally with marker shapes
///
/// Colors and markers wrap around independently, so the two sequences do not
/// need to have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct PropCycle {
    colors: Vec<ColorU8>,
    markers: Vec<MarkerShape>,
}

impl PropCycle {
    /// Build a cycle from a color sequence and a marker sequence
    pub fn new(colors: Vec<ColorU8>, markers: Vec<MarkerShape>) -> Self {
        PropCycle { colors, markers }
    }

    /// The color sequence
    pub fn colors(&self) -> &[ColorU8] {
        &self.colors
    }

    /// The marker sequence
    pub fn markers(&self) -> &[MarkerShape] {
        &self.markers
    }

    /// Get the properties for the series at `idx`, wrapping around
    pub fn get(&self, idx: usize) -> SeriesProps {
        SeriesProps {
            color: self.colors[idx % self.colors.len()],
            marker: self.markers[idx % self.markers.len()],
        }
    }

    /// Iterate over series properties, endlessly
    pub fn iter(&self) -> impl Iterator<Item = SeriesProps> + '_ {
        (0..).map(move |idx| self.get(idx))
    }
}

impl Default for PropCycle {
    fn default() -> Self {
        PropCycle {
            colors: palette::TOL_BRIGHT.to_vec(),
            markers: marker::DEFAULT_SET.to_vec(),
        }
    }
}
