/*!
 * Style options and their resolution into [`RcParams`].
 *
 * [`StyleOptions`] is the single entry point of the crate: a small record of
 * overrides that [`StyleOptions::configure`] resolves into a complete
 * [`RcParams`] snapshot. Unset options fall back to the journal defaults,
 * never to empty containers.
 */
use crate::display::{FigureFormat, InlineDisplay, NoopDisplay};
use crate::rc::{Family, Font, RcParams};
use crate::style::marker::{self, MarkerShape};
use crate::style::{Palette, PropCycle, defaults, palette};
use crate::{ColorU8, geom, rc};

/// Options for the journal plotting style
///
/// ```
/// use plotdecor::StyleOptions;
///
/// let rc = StyleOptions::new()
///     .with_fontsize(12.0)
///     .with_figsize((7.0, 5.0).into())
///     .configure();
/// assert_eq!(rc.font.size, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOptions {
    fontsize: f32,
    figsize: geom::Size,
    dpi: u32,
    colors: Option<Vec<ColorU8>>,
    markers: Option<Vec<MarkerShape>>,
    use_tex: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            fontsize: defaults::FONT_SIZE,
            figsize: defaults::FIG_SIZE,
            dpi: defaults::FIG_DPI,
            colors: None,
            markers: None,
            use_tex: true,
        }
    }
}

impl StyleOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the base font size in points, returning self for chaining
    pub fn with_fontsize(self, fontsize: f32) -> Self {
        StyleOptions { fontsize, ..self }
    }

    /// Set the figure size in inches, returning self for chaining
    pub fn with_figsize(self, figsize: geom::Size) -> Self {
        StyleOptions { figsize, ..self }
    }

    /// Set the display resolution, returning self for chaining
    ///
    /// This only affects on-screen rendering; figures are always saved at
    /// 300 dpi.
    pub fn with_dpi(self, dpi: u32) -> Self {
        StyleOptions { dpi, ..self }
    }

    /// Set the series colors, returning self for chaining
    pub fn with_colors(self, colors: Vec<ColorU8>) -> Self {
        StyleOptions {
            colors: Some(colors),
            ..self
        }
    }

    /// Set the series colors from a built-in palette, returning self for chaining
    pub fn with_palette(self, palette: palette::Builtin) -> Self {
        StyleOptions {
            colors: Some(palette.to_custom().0),
            ..self
        }
    }

    /// Set the series marker shapes, returning self for chaining
    pub fn with_markers(self, markers: Vec<MarkerShape>) -> Self {
        StyleOptions {
            markers: Some(markers),
            ..self
        }
    }

    /// Enable or disable LaTeX text rendering, returning self for chaining
    ///
    /// When enabled, text is typeset with an external LaTeX engine using a
    /// serif family and a preamble providing `textgreek` and `amsmath`. When
    /// disabled, the built-in sans-serif fonts are used instead.
    pub fn with_use_tex(self, use_tex: bool) -> Self {
        StyleOptions { use_tex, ..self }
    }

    /// Resolve the options into a complete [`RcParams`] snapshot
    ///
    /// This is the pure part of [`configure`](Self::configure): no output is
    /// printed and no display hook is invoked. The mapping is deterministic,
    /// so equal options resolve to equal snapshots.
    pub fn rc_params(&self) -> RcParams {
        let colors = self
            .colors
            .clone()
            .unwrap_or_else(|| palette::Builtin::TolBright.to_custom().0);
        let markers = self
            .markers
            .clone()
            .unwrap_or_else(|| marker::DEFAULT_SET.to_vec());

        let family = if self.use_tex {
            Family::Serif
        } else {
            Family::SansSerif
        };

        RcParams {
            font: Font {
                size: self.fontsize,
                family,
            },
            text: rc::Text {
                usetex: self.use_tex,
                ..Default::default()
            },
            figure: rc::Figure {
                size: self.figsize,
                dpi: self.dpi,
            },
            axes: rc::Axes {
                prop_cycle: PropCycle::new(colors, markers),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Resolve the options and load the style
    ///
    /// Besides returning the snapshot, this requests high-fidelity inline
    /// rendering through a no-op display capability and prints a confirmation
    /// summary to standard output. Use
    /// [`configure_with`](Self::configure_with) to supply a real front-end.
    pub fn configure(&self) -> RcParams {
        self.configure_with(&mut NoopDisplay)
    }

    /// Resolve the options and load the style through the given front-end
    ///
    /// The display capability receives a request for retina-quality inline
    /// figures. Implementations that have no notion of inline figures simply
    /// ignore it; the request never fails.
    pub fn configure_with<D: InlineDisplay>(&self, display: &mut D) -> RcParams {
        let rc = self.rc_params();

        display.set_figure_format(FigureFormat::Retina);
        log::debug!("requested {} inline figures", FigureFormat::Retina);

        println!("{}", rc.summary());
        rc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::{BBox, TickDirection};

    #[test]
    fn defaults_resolve_to_default_params() {
        assert_eq!(StyleOptions::new().rc_params(), RcParams::default());
    }

    #[test]
    fn default_palette_when_colors_unset() {
        let rc = StyleOptions::new().rc_params();
        let colors = rc.axes.prop_cycle.colors();
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0], ColorU8::from_html(b"#4477AA"));
        assert_eq!(colors[6], ColorU8::from_html(b"#BBBBBB"));
    }

    #[test]
    fn use_tex_toggle() {
        let rc = StyleOptions::new().rc_params();
        assert!(rc.text.usetex);
        assert_eq!(rc.font.family, Family::Serif);
        assert_eq!(rc.text.latex_preamble, defaults::LATEX_PREAMBLE);

        let rc = StyleOptions::new().with_use_tex(false).rc_params();
        assert!(!rc.text.usetex);
        assert_eq!(rc.font.family, Family::SansSerif);
        // font size applies directly, without the LaTeX engine
        assert_eq!(rc.font.size, 10.0);
    }

    #[test]
    fn overrides_leave_other_fields_at_defaults() {
        let rc = StyleOptions::new()
            .with_fontsize(12.0)
            .with_figsize((7.0, 5.0).into())
            .with_colors(vec![crate::color::BLACK, crate::color::WHITE])
            .rc_params();

        assert_eq!(rc.font.size, 12.0);
        assert_eq!(rc.figure.size, geom::Size::new(7.0, 5.0));
        assert_eq!(rc.axes.prop_cycle.colors().len(), 2);
        assert_eq!(rc.axes.prop_cycle.colors()[0], crate::color::BLACK);

        // everything else keeps the documented defaults
        assert_eq!(rc.figure.dpi, 175);
        assert_eq!(rc.savefig.dpi, 300);
        assert_eq!(rc.savefig.bbox, BBox::Tight);
        assert_eq!(rc.xtick.direction, TickDirection::In);
        assert!(rc.ytick.mirror);
        assert_eq!(rc.legend.handle_length, 1.25);
        assert_eq!(rc.axes.prop_cycle.markers(), marker::DEFAULT_SET);
    }

    #[test]
    fn configure_is_idempotent() {
        let options = StyleOptions::new()
            .with_dpi(100)
            .with_palette(palette::Builtin::OkabeIto);
        assert_eq!(options.configure(), options.configure());
    }

    #[test]
    fn configure_survives_absent_front_end() {
        // NoopDisplay stands in for a session without any notebook attached
        let rc = StyleOptions::new().configure();
        assert_eq!(rc, RcParams::default());
    }

    #[test]
    fn recording_front_end_receives_request() {
        #[derive(Default)]
        struct Recording(Vec<FigureFormat>);

        impl InlineDisplay for Recording {
            fn set_figure_format(&mut self, format: FigureFormat) {
                self.0.push(format);
            }
        }

        let mut display = Recording::default();
        StyleOptions::new().configure_with(&mut display);
        assert_eq!(display.0, vec![FigureFormat::Retina]);
    }
}
