/*!
 * This module deals with the colors assigned to data series.
 */
use crate::ColorU8;

/// A trait for assigning colors to data series
pub trait Palette {
    /// Get the number of colors in the palette before repeating
    fn len(&self) -> usize;

    /// Check whether the palette has no color at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a color from the palette by series index, wrapping around
    fn get(&self, idx: usize) -> ColorU8;

    /// Collect the palette colors into a `Custom` palette
    fn to_custom(&self) -> Custom {
        let mut colors = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            colors.push(self.get(i));
        }
        Custom(colors)
    }
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Builtin {
    /// Black monochrome palette
    /// If you use this with multiple series, distinguish them by marker shape
    Black,
    #[default]
    /// Paul Tol's bright colorblind-safe palette
    TolBright,
    /// Okabe & Ito colorblind-safe palette
    OkabeIto,
}

impl Palette for Builtin {
    fn len(&self) -> usize {
        match self {
            Builtin::Black => BLACK.len(),
            Builtin::TolBright => TOL_BRIGHT.len(),
            Builtin::OkabeIto => OKABE_ITO.len(),
        }
    }

    fn get(&self, idx: usize) -> ColorU8 {
        match self {
            Builtin::Black => BLACK[idx % BLACK.len()],
            Builtin::TolBright => TOL_BRIGHT[idx % TOL_BRIGHT.len()],
            Builtin::OkabeIto => OKABE_ITO[idx % OKABE_ITO.len()],
        }
    }
}

/// A custom palette
#[derive(Debug, Clone, PartialEq)]
pub struct Custom(pub Vec<ColorU8>);

impl Palette for Custom {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, idx: usize) -> ColorU8 {
        self.0[idx % self.0.len()]
    }
}

pub(crate) const BLACK: &[ColorU8] = &[ColorU8::from_html(b"#000000")];

/// Paul Tol's bright palette, the default.
/// See <https://personal.sron.nl/~pault> for the underlying color theory.
pub(crate) const TOL_BRIGHT: &[ColorU8] = &[
    ColorU8::from_html(b"#4477AA"), // blue
    ColorU8::from_html(b"#EE6677"), // red
    ColorU8::from_html(b"#228833"), // green
    ColorU8::from_html(b"#CCBB44"), // yellow
    ColorU8::from_html(b"#66CCEE"), // cyan
    ColorU8::from_html(b"#AA3377"), // purple
    ColorU8::from_html(b"#BBBBBB"), // gray
];

pub(crate) const OKABE_ITO: &[ColorU8] = &[
    ColorU8::from_html(b"#E69F00"), // orange
    ColorU8::from_html(b"#56B4E9"), // sky blue
    ColorU8::from_html(b"#009E73"), // bluish green
    ColorU8::from_html(b"#F0E442"), // yellow
    ColorU8::from_html(b"#0072B2"), // blue
    ColorU8::from_html(b"#D55E00"), // vermillion
    ColorU8::from_html(b"#CC79A7"), // reddish purple
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_entries() {
        let palette = Builtin::default();
        assert_eq!(palette, Builtin::TolBright);
        assert_eq!(palette.len(), 7);
        assert_eq!(palette.get(0), ColorU8::from_html(b"#4477AA"));
        assert_eq!(palette.get(6), ColorU8::from_html(b"#BBBBBB"));
        // wraps around past the end
        assert_eq!(palette.get(7), palette.get(0));
    }

    #[test]
    fn custom_palette_wraps() {
        let palette = Custom(vec![crate::color::BLACK, crate::color::WHITE]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(3), crate::color::WHITE);
    }

    #[test]
    fn builtin_to_custom() {
        let custom = Builtin::OkabeIto.to_custom();
        assert_eq!(custom.len(), 7);
        assert_eq!(custom.get(0), ColorU8::from_html(b"#E69F00"));
    }
}
