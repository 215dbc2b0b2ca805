/*!
 * Rendering preset for error bars.
 *
 * The preset is a plain value meant to be merged into the caller's
 * error-bar drawing call. The dimensions are tuned for the default
 * 3.5 in by 3.5 in figure.
 */
use crate::color::{self, ColorU8};
use crate::style::LinePattern;

/// Rendering options for plotting points with uncertainty bars
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBarStyle {
    /// Marker size in points
    pub marker_size: f32,
    /// Marker edge color
    pub marker_edge_color: ColorU8,
    /// Marker edge width in points
    pub marker_edge_width: f32,
    /// Color of the bars and caps
    pub bar_color: ColorU8,
    /// Length of the caps at bar ends, in points
    pub cap_size: f32,
    /// Line width of the caps, in points
    pub cap_thickness: f32,
    /// Line width of the bars, in points
    pub bar_width: f32,
    /// Opacity of the whole glyph (0.0 to 1.0), for layering
    pub opacity: f32,
    /// Draw order relative to other artists; higher draws on top
    pub z_order: i32,
    /// Pattern of the line connecting data points, or `None` to leave
    /// points unconnected
    pub connect: Option<LinePattern>,
}

impl ErrorBarStyle {
    /// The canonical journal preset
    pub const CANONICAL: ErrorBarStyle = ErrorBarStyle {
        marker_size: 3.0,
        marker_edge_color: color::BLACK,
        marker_edge_width: 0.2,
        bar_color: color::BLACK,
        cap_size: 1.25,
        cap_thickness: 0.2,
        bar_width: 0.2,
        opacity: 0.9,
        z_order: 2,
        connect: None,
    };

    /// Set the marker size, returning self for chaining
    pub fn with_marker_size(self, marker_size: f32) -> Self {
        ErrorBarStyle {
            marker_size,
            ..self
        }
    }

    /// Set the opacity (0.0 to 1.0), returning self for chaining
    pub fn with_opacity(self, opacity: f32) -> Self {
        ErrorBarStyle { opacity, ..self }
    }

    /// Set the connecting line pattern, returning self for chaining
    pub fn with_connect(self, pattern: LinePattern) -> Self {
        ErrorBarStyle {
            connect: Some(pattern),
            ..self
        }
    }
}

impl Default for ErrorBarStyle {
    fn default() -> Self {
        Self::CANONICAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_preset() {
        let style = ErrorBarStyle::default();
        assert_eq!(style, ErrorBarStyle::CANONICAL);
        assert_eq!(style.marker_size, 3.0);
        assert_eq!(style.marker_edge_color, color::BLACK);
        assert_eq!(style.cap_size, 1.25);
        assert_eq!(style.cap_thickness, 0.2);
        assert_eq!(style.bar_width, 0.2);
        assert_eq!(style.opacity, 0.9);
        assert_eq!(style.z_order, 2);
        assert_eq!(style.connect, None);
    }

    #[test]
    fn chained_overrides() {
        let style = ErrorBarStyle::default()
            .with_marker_size(4.0)
            .with_connect(LinePattern::Dot);
        assert_eq!(style.marker_size, 4.0);
        assert_eq!(style.connect, Some(LinePattern::Dot));
        // untouched fields keep the canonical values
        assert_eq!(style.bar_color, color::BLACK);
    }
}
