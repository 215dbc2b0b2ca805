/*!
 * Marker shapes cycled through by successive data series.
 */
use std::fmt;

/// Shape of a series marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// Circle marker (the default)
    #[default]
    Circle,
    /// Square marker
    Square,
    /// Upward pointing triangle marker
    TriangleUp,
    /// Downward pointing triangle marker
    TriangleDown,
    /// Diamond marker
    Diamond,
    /// Plus marker
    Plus,
    /// Cross marker
    Cross,
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Square => "square",
            MarkerShape::TriangleUp => "triangle-up",
            MarkerShape::TriangleDown => "triangle-down",
            MarkerShape::Diamond => "diamond",
            MarkerShape::Plus => "plus",
            MarkerShape::Cross => "cross",
        };
        f.write_str(name)
    }
}

/// The default marker set, paired positionally with the default palette
pub const DEFAULT_SET: &[MarkerShape] = &[
    MarkerShape::Circle,
    MarkerShape::Square,
    MarkerShape::TriangleUp,
    MarkerShape::TriangleDown,
    MarkerShape::Diamond,
    MarkerShape::Plus,
    MarkerShape::Cross,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set() {
        assert_eq!(DEFAULT_SET.len(), 7);
        assert_eq!(DEFAULT_SET[0], MarkerShape::default());
        assert_eq!(DEFAULT_SET[6].to_string(), "cross");
    }
}
