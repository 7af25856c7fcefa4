//! Reading and writing CSS-like color literals.
//!
//! Recognized literals are `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
//! `rgb()`/`rgba()` and `hsl()`/`hsla()` (comma or space separated,
//! with an optional alpha) and the CSS color keywords.

use lazy_static::lazy_static;
use regex::Regex;
use rgb::RGBA;
use serde::{Deserialize, Serialize};
use crate::{Color, ParseError};
use crate::space::Hsl;

mod names;

/// A successfully recognized color literal, tagged with its syntax.
/// RGB components are in \[0, 255\] and alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CssColor {
    Hex(RGBA<f64>),
    Rgb(RGBA<f64>),
    Hsl(Hsl, f64),
    Named(RGBA<f64>),
}

lazy_static! {
    static ref FUNCTION: Regex =
        Regex::new(r"(?i)^(rgba?|hsla?)\s*\(\s*([^()]*?)\s*\)$").unwrap();
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0' ..= b'9' => Some(c - b'0'),
        b'a' ..= b'f' => Some(c - b'a' + 10),
        b'A' ..= b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse the digits of a hex color (without the leading `#`).
fn parse_hex(hex: &str) -> Result<RGBA<f64>, ParseError> {
    let digits: Option<Vec<u8>> = hex.bytes().map(nibble).collect();
    let d = digits.ok_or_else(|| ParseError::InvalidHex(hex.to_string()))?;
    let short = |x: u8| (17 * x) as f64;
    let long = |hi: u8, lo: u8| (hi << 4 | lo) as f64;
    let rgba = match d.len() {
        3 => RGBA { r: short(d[0]), g: short(d[1]), b: short(d[2]), a: 255. },
        4 => RGBA { r: short(d[0]), g: short(d[1]), b: short(d[2]),
                    a: short(d[3]) },
        6 => RGBA { r: long(d[0], d[1]), g: long(d[2], d[3]),
                    b: long(d[4], d[5]), a: 255. },
        8 => RGBA { r: long(d[0], d[1]), g: long(d[2], d[3]),
                    b: long(d[4], d[5]), a: long(d[6], d[7]) },
        n => return Err(ParseError::InvalidLength(n)),
    };
    Ok(RGBA { a: rgba.a / 255., ..rgba })
}

fn number(s: &str) -> Result<f64, ParseError> {
    match s.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ParseError::InvalidNumber(s.to_string())),
    }
}

/// A number or a percentage of `full`.
fn scaled(s: &str, full: f64) -> Result<f64, ParseError> {
    match s.strip_suffix('%') {
        Some(p) => Ok(number(p)? / 100. * full),
        None => number(s),
    }
}

fn channel(s: &str) -> Result<f64, ParseError> { Ok(scaled(s, 255.)?.clamp(0., 255.)) }

fn alpha(s: &str) -> Result<f64, ParseError> { Ok(scaled(s, 1.)?.clamp(0., 1.)) }

fn percent(s: &str) -> Result<f64, ParseError> {
    Ok(number(s.strip_suffix('%').unwrap_or(s))?.clamp(0., 100.))
}

fn hue(s: &str) -> Result<f64, ParseError> {
    let s = s.trim();
    let h = match s.strip_suffix("deg") {
        Some(d) => number(d)?,
        None => match s.strip_suffix("turn") {
            Some(t) => 360. * number(t)?,
            None => number(s)?,
        },
    };
    Ok(h.rem_euclid(360.))
}

/// Split the arguments of a functional notation into its 3
/// components and optional alpha.
fn arguments<'a>(name: &str, args: &'a str)
                 -> Result<([&'a str; 3], Option<&'a str>), ParseError> {
    let bad = || ParseError::InvalidFunction(name.to_ascii_lowercase());
    let (main, alpha): (Vec<&str>, Option<&str>) = if args.contains(',') {
        let mut v: Vec<&str> = args.split(',').map(str::trim).collect();
        let alpha = if v.len() == 4 { v.pop() } else { None };
        (v, alpha)
    } else {
        let (main, alpha) = match args.split_once('/') {
            Some((m, a)) => (m, Some(a.trim())),
            None => (args, None),
        };
        (main.split_whitespace().collect(), alpha)
    };
    match main[..] {
        [x, y, z] => Ok(([x, y, z], alpha)),
        _ => Err(bad()),
    }
}

/// Recognize a single color literal.  Surrounding whitespace is
/// ignored; comments are not (see [`Codec::parse`]).
pub fn parse_literal(s: &str) -> Result<CssColor, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).map(CssColor::Hex);
    }
    if let Some(caps) = FUNCTION.captures(s) {
        let name = &caps[1];
        let ([x, y, z], a) = arguments(name, caps.get(2).map_or("", |m| m.as_str()))?;
        let a = match a { Some(a) => alpha(a)?, None => 1. };
        return if name.to_ascii_lowercase().starts_with("rgb") {
            Ok(CssColor::Rgb(RGBA { r: channel(x)?, g: channel(y)?, b: channel(z)?,
                                    a }))
        } else {
            Ok(CssColor::Hsl(Hsl { h: hue(x)?, s: percent(y)?, l: percent(z)? }, a))
        };
    }
    names::lookup(s).map(CssColor::Named)
        .ok_or_else(|| ParseError::Unknown(s.to_string()))
}

/// `#rrggbb` when `alpha ≥ 1`, `#rrggbbaa` otherwise.  Components are
/// in \[0, 255\] and `alpha` in \[0, 1\].
pub fn rgb_to_css_string(r: f64, g: f64, b: f64, alpha: f64) -> String {
    let byte = |x: f64| x.round().clamp(0., 255.) as u8;
    if alpha >= 1. {
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b),
                byte(255. * alpha))
    }
}

/// `hsl(Hdeg S% L%)`, or `hsl(Hdeg S% L% / A%)` when `alpha < 1`.
/// The hue is in degrees, the other components in percent and `alpha`
/// in \[0, 1\].
pub fn hsl_to_css_string(h: f64, s: f64, l: f64, alpha: f64) -> String {
    if alpha >= 1. {
        format!("hsl({}deg {}% {}%)", h.round(), s.round(), l.round())
    } else {
        format!("hsl({}deg {}% {}% / {}%)", h.round(), s.round(), l.round(),
                (100. * alpha).round())
    }
}

/// `true` if `s` is a run of 3, 4, 6 or 8 hex digits.
pub fn is_bare_hex(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.bytes().all(|c| c.is_ascii_hexdigit())
}

/// Outline colors drawn around a swatch so that it stands out against
/// a background of its own color.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BorderColors {
    /// Used for swatches lighter than `lightness_threshold`.
    pub dark: String,
    /// Used for the other swatches.
    pub light: String,
    /// HSL lightness in \[0, 1\].
    pub lightness_threshold: f64,
}

impl Default for BorderColors {
    fn default() -> Self {
        BorderColors { dark: "#00000040".to_string(),
                       light: "#ffffff40".to_string(),
                       lightness_threshold: 0.4 }
    }
}

/// Parses colors and computes their canonical and contrast strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Codec {
    borders: BorderColors,
}

impl Codec {
    /// A codec outlining swatches with `borders`.
    pub fn new(borders: BorderColors) -> Self { Codec { borders } }

    /// Load the border configuration from JSON, e.g.
    /// `{"dark": "#000", "lightness_threshold": 0.5}`.  Missing fields
    /// take their default value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Codec::new)
    }

    /// The border configuration in use.
    #[inline]
    pub fn borders(&self) -> &BorderColors { &self.borders }

    /// Parse a color, accepting a bare run of 3, 4, 6 or 8 hex digits
    /// as a hex literal.
    pub fn parse_color(&self, text: &str) -> Result<Color, ParseError> {
        let text = text.trim();
        if is_bare_hex(text) {
            parse_literal(&format!("#{text}")).map(Color::from)
        } else {
            parse_literal(text).map(Color::from)
        }
    }

    /// Parse a color possibly followed by a `// comment`.
    ///
    /// ```
    /// use palette_blend::Codec;
    /// let codec = Codec::default();
    /// let (c, comment) = codec.parse("f00 // warm").unwrap();
    /// assert_eq!(c.to_css(), "#ff0000");
    /// assert_eq!(comment.as_deref(), Some("warm"));
    /// ```
    pub fn parse(&self, line: &str) -> Result<(Color, Option<String>), ParseError> {
        let (text, comment) = crate::palette::split_comment(line);
        let color = self.parse_color(text)?;
        Ok((color, comment.map(str::to_string)))
    }

    /// The border color to outline `c` with.
    pub fn contrast(&self, c: &Color) -> &str {
        if c.hsl().l / 100. > self.borders.lightness_threshold {
            &self.borders.dark
        } else {
            &self.borders.light
        }
    }
}
