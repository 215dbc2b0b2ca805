/*!
 * RGBA color support for palettes and presets.
 *
 * Colors are commonly written as HTML hex strings in journal style sheets,
 * so parsing and formatting both default to that form.
 */

use std::str::FromStr;
use std::{error, fmt};

/// Opaque black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
/// Opaque white
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);

/// An RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    /// Build an opaque color from red, green and blue channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from red, green, blue and alpha channels
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from an HTML hex string such as `#4477AA`
    ///
    /// Supports `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` forms.
    /// Panics on any other input, which makes it suited to palette constants.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex[0] != b'#' {
            panic!("Invalid hex color");
        }
        match hex.len() {
            4 | 5 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                let a = if hex.len() == 5 { hex_to_u8(hex[4]) } else { 0x0f };
                ColorU8::from_rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)
            }
            7 | 9 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                let a = if hex.len() == 9 {
                    hex_to_u8(hex[7]) << 4 | hex_to_u8(hex[8])
                } else {
                    255
                };
                ColorU8::from_rgba(r, g, b, a)
            }
            _ => panic!("Invalid hex color"),
        }
    }

    /// The red, green and blue channels
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The red, green, blue and alpha channels
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The alpha channel
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// Format as an HTML hex string (alpha omitted when opaque)
    pub fn html(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Scale the alpha channel by `opacity` (0.0 to 1.0)
    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

/// Parsing error for [`ColorU8`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not one of the recognized color forms
    InvalidFormat,
    /// A red, green or blue component is out of range
    InvalidComponent,
    /// The alpha component is out of range
    InvalidAlphaComponent,
    /// The hex string has an invalid length or digit
    InvalidHex,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_component(s: &str) -> Result<u8, ParseError> {
    let v: i32 = s.trim().parse().map_err(|_| ParseError::InvalidComponent)?;
    if !(0..=255).contains(&v) {
        return Err(ParseError::InvalidComponent);
    }
    Ok(v as u8)
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let f: f32 = s
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidAlphaComponent)?;
    if !(0.0..=1.0).contains(&f) {
        return Err(ParseError::InvalidAlphaComponent);
    }
    Ok((f * 255.0).round() as u8)
}

fn parse_hex_digit(hex: u8) -> Result<u8, ParseError> {
    match hex {
        b'0'..=b'9' => Ok(hex - b'0'),
        b'a'..=b'f' => Ok(hex - b'a' + 10),
        b'A'..=b'F' => Ok(hex - b'A' + 10),
        _ => Err(ParseError::InvalidHex),
    }
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        if let Some(hex) = raw.strip_prefix('#') {
            let bytes = hex.as_bytes();
            // validate before delegating to the panicking const parser
            if !matches!(bytes.len(), 3 | 4 | 6 | 8) {
                return Err(ParseError::InvalidHex);
            }
            for b in bytes {
                parse_hex_digit(*b)?;
            }
            Ok(ColorU8::from_html(raw.as_bytes()))
        } else if let Some(inner) = raw
            .strip_prefix("rgba(")
            .and_then(|r| r.strip_suffix(')'))
        {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 4 {
                return Err(ParseError::InvalidFormat);
            }
            let r = parse_component(parts[0])?;
            let g = parse_component(parts[1])?;
            let b = parse_component(parts[2])?;
            let a = parse_alpha(parts[3])?;
            Ok(ColorU8::from_rgba(r, g, b, a))
        } else if let Some(inner) = raw.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat);
            }
            let r = parse_component(parts[0])?;
            let g = parse_component(parts[1])?;
            let b = parse_component(parts[2])?;
            Ok(ColorU8::from_rgb(r, g, b))
        } else {
            Err(ParseError::InvalidFormat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        assert_eq!("#ff0000".parse::<ColorU8>().unwrap(), ColorU8::from_rgb(255, 0, 0));
        assert_eq!("#f00".parse::<ColorU8>().unwrap(), ColorU8::from_rgb(255, 0, 0));

        let c = "#ff000080".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_rgb_rgba() {
        assert_eq!(
            "rgb(68, 119, 170)".parse::<ColorU8>().unwrap(),
            ColorU8::from_html(b"#4477AA")
        );

        let c = "rgba(255,0,0,0.5)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
        assert_eq!("#12345".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!("#12345g".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!(
            "rgb(300,0,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidComponent)
        );
        assert_eq!(
            "rgba(255,0,0,2.0)".parse::<ColorU8>(),
            Err(ParseError::InvalidAlphaComponent)
        );
        assert_eq!("black".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
    }

    #[test]
    fn html_round_trip() {
        assert_eq!(ColorU8::from_html(b"#4477AA").html(), "#4477aa");
        assert_eq!(BLACK.with_opacity(0.5).html(), "#0000007f");
    }
}
