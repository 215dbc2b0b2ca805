/*!
 * The resolved styling parameters.
 *
 * [`RcParams`] is the value a plot library reads its default visual
 * properties from. Instead of mutating a process-wide registry, the
 * configurator returns an owned `RcParams` snapshot and the caller passes it
 * to each plotting call. Two calls with the same options produce equal
 * snapshots.
 */
use std::env;
use std::fmt::Write;

use crate::geom;
use crate::style::{PropCycle, defaults};

/// Font family used for figure text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Family {
    #[default]
    /// Serif family, used when text is typeset with LaTeX (the default)
    Serif,
    /// Sans-serif family, the built-in fallback
    SansSerif,
    /// Monospace family
    Monospace,
}

/// Font set used for math text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathFont {
    #[default]
    /// STIX fonts, designed to blend with Times-like serif text
    Stix,
    /// The DejaVu Sans fonts
    DejaVuSans,
    /// Computer Modern, the TeX default
    ComputerModern,
}

/// Direction of axis tick marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickDirection {
    #[default]
    /// Ticks point into the plot area
    In,
    /// Ticks point out of the plot area
    Out,
    /// Ticks span both sides of the spine
    InOut,
}

/// Font parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Base font size in points
    pub size: f32,
    /// Font family for figure text
    pub family: Family,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            size: defaults::FONT_SIZE,
            family: Family::default(),
        }
    }
}

/// Text rendering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Whether text rendering delegates to an external LaTeX engine
    pub usetex: bool,
    /// Preamble prepended to every LaTeX document when `usetex` is on
    pub latex_preamble: String,
    /// Font set for math text
    pub math_font: MathFont,
}

impl Default for Text {
    fn default() -> Self {
        Text {
            usetex: true,
            latex_preamble: defaults::LATEX_PREAMBLE.to_string(),
            math_font: MathFont::default(),
        }
    }
}

/// Figure parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    /// Figure size in inches
    pub size: geom::Size,
    /// Display resolution in dots per inch
    pub dpi: u32,
}

impl Default for Figure {
    fn default() -> Self {
        Figure {
            size: defaults::FIG_SIZE,
            dpi: defaults::FIG_DPI,
        }
    }
}

/// Size and width of one tick class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDim {
    /// Tick length in points
    pub size: f32,
    /// Tick line width in points
    pub width: f32,
}

/// Tick parameters for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticks {
    /// Direction of the tick marks
    pub direction: TickDirection,
    /// Major tick dimensions
    pub major: TickDim,
    /// Minor tick dimensions
    pub minor: TickDim,
    /// Whether minor ticks are drawn
    pub minor_visible: bool,
    /// Whether ticks are repeated on the opposite spine
    /// (top for the x axis, right for the y axis)
    pub mirror: bool,
}

impl Default for Ticks {
    fn default() -> Self {
        Ticks {
            direction: TickDirection::In,
            major: TickDim {
                size: defaults::MAJOR_TICK_SIZE,
                width: defaults::MAJOR_TICK_WIDTH,
            },
            minor: TickDim {
                size: defaults::MINOR_TICK_SIZE,
                width: defaults::MINOR_TICK_WIDTH,
            },
            minor_visible: true,
            mirror: true,
        }
    }
}

/// Axes parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    /// Spine line width in points
    pub line_width: f32,
    /// The per-series property cycle
    pub prop_cycle: PropCycle,
}

impl Default for Axes {
    fn default() -> Self {
        Axes {
            line_width: defaults::AXES_LINE_WIDTH,
            prop_cycle: PropCycle::default(),
        }
    }
}

/// Grid parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Grid line width in points
    pub line_width: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            line_width: defaults::GRID_LINE_WIDTH,
        }
    }
}

/// Default line parameters for plotted series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lines {
    /// Line width in points
    pub width: f32,
}

impl Default for Lines {
    fn default() -> Self {
        Lines {
            width: defaults::SERIES_LINE_WIDTH,
        }
    }
}

/// Legend parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legend {
    /// Whether the legend is drawn with a border box
    pub frame: bool,
    /// Length of the legend handles, in font-size units
    pub handle_length: f32,
    /// Padding between a handle and its label, in font-size units
    pub handle_text_pad: f32,
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            frame: false,
            handle_length: defaults::LEGEND_HANDLE_LENGTH,
            handle_text_pad: defaults::LEGEND_HANDLE_TEXT_PAD,
        }
    }
}

/// Bounding box used when saving a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BBox {
    /// The figure's nominal bounding box
    Standard,
    #[default]
    /// A bounding box fitted tightly around the figure content
    Tight,
}

/// Figure saving parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveFig {
    /// Bounding box mode
    pub bbox: BBox,
    /// Padding around the tight bounding box, in inches
    pub pad_inches: f32,
    /// Save resolution in dots per inch
    pub dpi: u32,
}

impl Default for SaveFig {
    fn default() -> Self {
        SaveFig {
            bbox: BBox::Tight,
            pad_inches: defaults::SAVE_PAD_INCHES,
            dpi: defaults::SAVE_DPI,
        }
    }
}

/// A complete snapshot of styling defaults
///
/// `RcParams::default()` is the fully-resolved journal style; every field can
/// be overridden afterwards, or resolved from a
/// [`StyleOptions`](crate::StyleOptions) record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RcParams {
    /// Font parameters
    pub font: Font,
    /// Text rendering parameters
    pub text: Text,
    /// Figure parameters
    pub figure: Figure,
    /// Tick parameters for the x axis
    pub xtick: Ticks,
    /// Tick parameters for the y axis
    pub ytick: Ticks,
    /// Axes parameters
    pub axes: Axes,
    /// Grid parameters
    pub grid: Grid,
    /// Default line parameters
    pub lines: Lines,
    /// Legend parameters
    pub legend: Legend,
    /// Figure saving parameters
    pub savefig: SaveFig,
}

impl RcParams {
    /// A human-readable summary of the resolved style
    ///
    /// This is what [`StyleOptions::configure`](crate::StyleOptions::configure)
    /// prints to standard output once the style is loaded.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Hi {}, plot styling is loaded.",
            username().as_deref().unwrap_or("there")
        );
        let _ = writeln!(
            out,
            "  figsize: {} for column figures",
            self.figure.size
        );
        let _ = writeln!(out, "  fontsize: {}", self.font.size);
        let mut colors = String::new();
        for c in self.axes.prop_cycle.colors() {
            if !colors.is_empty() {
                colors.push(' ');
            }
            colors.push_str(&c.html());
        }
        let _ = writeln!(out, "  palette: {colors}");
        let mut markers = String::new();
        for m in self.axes.prop_cycle.markers() {
            if !markers.is_empty() {
                markers.push(' ');
            }
            let _ = write!(markers, "{m}");
        }
        let _ = writeln!(out, "  markers: {markers}");
        let _ = writeln!(
            out,
            "  latex: {}",
            if self.text.usetex { "on" } else { "off" }
        );
        out.push_str("Cheers!");
        out
    }
}

fn username() -> Option<String> {
    env::var("USER").or_else(|_| env::var("USERNAME")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let rc = RcParams::default();

        assert_eq!(rc.font.size, 10.0);
        assert_eq!(rc.figure.size, geom::Size::new(3.5, 3.5));
        assert_eq!(rc.figure.dpi, 175);
        assert_eq!(rc.savefig.dpi, 300);
        assert_eq!(rc.savefig.bbox, BBox::Tight);
        assert_eq!(rc.savefig.pad_inches, 0.05);

        for ticks in [&rc.xtick, &rc.ytick] {
            assert_eq!(ticks.direction, TickDirection::In);
            assert_eq!(ticks.major.size, 5.0);
            assert_eq!(ticks.minor.size, 2.5);
            assert_eq!(ticks.major.size, 2.0 * ticks.minor.size);
            assert_eq!(ticks.major.width, 0.5);
            assert_eq!(ticks.minor.width, 0.5);
            assert!(ticks.minor_visible);
            assert!(ticks.mirror);
        }

        assert_eq!(rc.axes.line_width, 0.5);
        assert_eq!(rc.grid.line_width, 0.5);
        assert_eq!(rc.lines.width, 0.75);

        assert!(!rc.legend.frame);
        assert_eq!(rc.legend.handle_length, 1.25);
        assert_eq!(rc.legend.handle_text_pad, 0.5);
    }

    #[test]
    fn summary_reports_resolved_values() {
        let rc = RcParams::default();
        let summary = rc.summary();
        assert!(summary.contains("figsize: (3.5, 3.5)"));
        assert!(summary.contains("fontsize: 10"));
        assert!(summary.contains("#4477aa"));
        assert!(summary.contains("circle"));
        assert!(summary.contains("latex: on"));
    }
}
