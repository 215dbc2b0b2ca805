/*!
 * Best-effort display quality for notebook front-ends.
 *
 * Loading the style may run inside an interactive kernel whose front-end can
 * be asked for higher-fidelity inline figures. The capability is injected:
 * callers with a real front-end implement [`InlineDisplay`], everyone else
 * gets [`NoopDisplay`] and the request goes nowhere, which is never an error.
 */
use std::env;
use std::fmt;

/// Inline figure format of a notebook front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureFormat {
    /// Raster graphics at display resolution
    Png,
    /// Vector graphics
    Svg,
    #[default]
    /// Raster graphics at twice the display resolution
    Retina,
}

impl fmt::Display for FigureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FigureFormat::Png => "png",
            FigureFormat::Svg => "svg",
            FigureFormat::Retina => "retina",
        };
        f.write_str(name)
    }
}

/// A front-end capable of adjusting its inline figure rendering
pub trait InlineDisplay {
    /// Request inline figures in the given format
    ///
    /// Implementations are free to ignore the request; it must not fail.
    fn set_figure_format(&mut self, format: FigureFormat);
}

/// The display used when no front-end is attached; ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDisplay;

impl InlineDisplay for NoopDisplay {
    fn set_figure_format(&mut self, _format: FigureFormat) {}
}

/// Check whether the process runs under a Jupyter-style kernel
///
/// Useful to decide whether wiring a real [`InlineDisplay`] is worth it.
/// The probe only reads environment variables set by the kernel launcher.
pub fn in_notebook() -> bool {
    env::var("JPY_PARENT_PID").is_ok() || env::var("JUPYTER_RUNTIME_DIR").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_display_ignores_requests() {
        let mut display = NoopDisplay;
        display.set_figure_format(FigureFormat::Retina);
        display.set_figure_format(FigureFormat::Svg);
    }

    #[test]
    fn notebook_probe_reads_kernel_env() {
        // drop any inherited kernel variables first
        unsafe {
            env::remove_var("JPY_PARENT_PID");
            env::remove_var("JUPYTER_RUNTIME_DIR");
        }
        assert!(!in_notebook());

        unsafe {
            env::set_var("JPY_PARENT_PID", "1234");
        }
        assert!(in_notebook());

        unsafe {
            env::remove_var("JPY_PARENT_PID");
        }
    }
}
