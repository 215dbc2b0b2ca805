#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # plotdecor
 * _journal-ready plot styling_. Styling defaults for scientific figures,
 * resolved once and handed to your plotting calls.
 *
 * Journals want small serif figures with inward ticks, thin lines and a
 * colorblind-safe palette. plotdecor gathers those conventions into a single
 * [`StyleOptions`] record and resolves it into an explicit [`rc::RcParams`]
 * snapshot, so there is no hidden global state: configure once, then pass
 * the value wherever a plot is drawn.
 *
 * ## Get started
 *
 * ```
 * use plotdecor::StyleOptions;
 *
 * // all defaults: 10 pt LaTeX serif text, 3.5 in column figure,
 * // Paul Tol's bright palette cycled together with 7 marker shapes
 * let rc = StyleOptions::new().configure();
 *
 * // successive series take their color and marker from the cycle
 * let first = rc.axes.prop_cycle.get(0);
 * println!("series 0 uses {} with a {}", first.color.html(), first.marker);
 * ```
 *
 * Options override individual defaults and chain in builder style:
 *
 * ```
 * use plotdecor::StyleOptions;
 * use plotdecor::style::palette;
 *
 * let rc = StyleOptions::new()
 *     .with_fontsize(12.0)
 *     .with_figsize((7.0, 5.0).into())
 *     .with_palette(palette::Builtin::OkabeIto)
 *     .with_use_tex(false)
 *     .configure();
 * assert_eq!(rc.figure.dpi, 175);
 * ```
 *
 * Error bars come with their own preset, meant to be merged into the
 * caller's drawing call:
 *
 * ```
 * use plotdecor::ErrorBarStyle;
 *
 * let eb = ErrorBarStyle::default();
 * assert_eq!(eb.marker_size, 3.0);
 * ```
 *
 * ## Notes about plotdecor's design
 *
 * The crate draws nothing. It resolves names and numbers that a plotting
 * layer reads at draw time, which keeps it independent of any particular
 * rendering stack. The only side effects of [`StyleOptions::configure`] are
 * a confirmation summary on standard output and a best-effort request for
 * high-fidelity inline figures, routed through the injectable
 * [`display::InlineDisplay`] capability so that sessions without a notebook
 * front-end skip it silently.
 */
// plotdecor is released under the MIT License

pub mod color;
pub mod display;
pub mod errorbar;
pub mod geom;
pub mod options;
pub mod rc;
pub mod style;

pub use color::ColorU8;
pub use errorbar::ErrorBarStyle;
pub use options::StyleOptions;
pub use rc::RcParams;
pub use style::{MarkerShape, PropCycle};
