//! Color palettes written as text, and 2D color blends.
//!
//! - [`Color`]: an immutable color with its RGB, HSL, L*a*b* and CMYK
//!   coordinates, parsed from CSS-like literals by a [`Codec`].
//! - [`Palette`]: rows of [`Swatch`]es parsed from palette text, with
//!   a perceptual nearest-color search ([`find_closest_match`]).
//! - [`BlendGrid`]: a grid interpolating between up to four corner
//!   colors in a chosen color space, from which rows, columns,
//!   diagonals and corner walks can be [extracted](Selection).
//!
//! ```
//! use palette_blend::{Codec, Palette, find_closest_match};
//! let codec = Codec::default();
//! let palette = Palette::parse(&codec, "red\nblue\n-\ngreen");
//! assert_eq!(palette.rows.len(), 2);
//! let m = find_closest_match(&codec, "#f01010", &palette).unwrap();
//! assert_eq!(m.css, "#ff0000");
//! ```

use std::marker::PhantomData;
use std::str::FromStr;
use rgb::{RGB, RGBA};

pub mod space;
pub mod distance;
pub mod css;
pub mod palette;
pub mod grid;
pub mod select;
mod error;

pub use css::{BorderColors, Codec, CssColor};
pub use distance::delta_e;
pub use error::{BlendError, ParseError};
pub use grid::{is_masked, Blend, BlendGrid, BlendSpec, Channels, Method};
pub use palette::{find_closest_match, parse_line, parse_text_palette};
pub use palette::ty::{BlendBundle, LineKind, Palette, ParsedLine, Swatch};
pub use select::Selection;
use space::{Cmyk, Hsl, Lab};

/// A “continuous” range of values parametrized by reals in \[0, 1\].
pub trait ColorRange<C> {
    /// Returns the value corresponding to `t` ∈ \[0., 1.\].
    fn at(&self, t: f64) -> C;

    /// Return an iterator yielding a uniform sampling of `n` points of
    /// \[0, 1\], both bounds included, together with their values.
    /// The first and last samples are taken at exactly `0.` and `1.`.
    fn samples(self, n: usize) -> Range<Self, C>
    where Self: Sized {
        if n == 0 {
            Range { range: self, value: PhantomData,
                    flast: 0., last: 0, i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, value: PhantomData,
                    flast: (n - 1) as f64, last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `t` ∈ \[0, 1\] together with values.
///
/// Created by [`ColorRange::samples`].
pub struct Range<R, C> {
    range: R,
    value: PhantomData<C>,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, C> Range<R, C> where R: ColorRange<C> {
    /// Return `t` and the value at position `k` (assuming it is in the
    /// range `0 ..= self.last`).
    fn value(&self, k: usize) -> (f64, C) {
        let t = if k == 0 { 0. }
                else if k == self.last { 1. }
                else { k as f64 / self.flast };
        (t, self.range.at(t))
    }
}

impl<R, C> Iterator for Range<R, C>
where R: ColorRange<C> {
    type Item = (f64, C);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.value(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R, C> ExactSizeIterator for Range<R, C>
where R: ColorRange<C> {}

impl<R, C> DoubleEndedIterator for Range<R, C>
where R: ColorRange<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.value(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// The color space a [`Color`] was specified in.  All other
/// coordinates are derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Rgb,
    Hsl,
}

/// An immutable color.
///
/// All coordinates are computed once, when the color is built, from
/// the space it was specified in (see [`Color::origin`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    rgba: RGBA<f64>, // r, g, b ∈ [0, 255], a ∈ [0, 1]
    hsl: Hsl,
    lab: Lab,
    cmyk: Cmyk,
    origin: Origin,
}

impl Color {
    /// Create a color from RGB components in \[0, 255\] and an alpha
    /// in \[0, 1\].  Out of range values are clamped.
    pub fn from_rgba(c: RGBA<f64>) -> Self {
        let rgb = RGB { r: c.r.clamp(0., 255.), g: c.g.clamp(0., 255.),
                        b: c.b.clamp(0., 255.) };
        let (h, s, l) = space::rgb_to_hsl(rgb.r, rgb.g, rgb.b);
        Self::derive(rgb, c.a, Hsl { h: 360. * h, s: 100. * s, l: 100. * l },
                     Origin::Rgb)
    }

    /// Opaque color from RGB components in \[0, 255\].
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba(RGBA { r, g, b, a: 1. })
    }

    /// Create a color from its hue (degrees), saturation and lightness
    /// (percent) and an alpha in \[0, 1\].
    pub fn from_hsla(hsl: Hsl, alpha: f64) -> Self {
        let hsl = Hsl { h: hsl.h.rem_euclid(360.), s: hsl.s.clamp(0., 100.),
                        l: hsl.l.clamp(0., 100.) };
        let rgb = space::hsl_to_rgb(hsl.h / 360., hsl.s / 100., hsl.l / 100.);
        Self::derive(rgb, alpha, hsl, Origin::Hsl)
    }

    fn derive(rgb: RGB<f64>, alpha: f64, hsl: Hsl, origin: Origin) -> Self {
        let a = if alpha.is_nan() { 1. } else { alpha.clamp(0., 1.) };
        Color { rgba: RGBA { r: rgb.r, g: rgb.g, b: rgb.b, a },
                hsl,
                lab: space::rgb_to_lab(rgb),
                cmyk: space::rgb_to_cmyk(rgb.r, rgb.g, rgb.b),
                origin }
    }

    #[inline]
    pub fn rgb(&self) -> RGB<f64> {
        RGB { r: self.rgba.r, g: self.rgba.g, b: self.rgba.b }
    }

    #[inline]
    pub fn rgba(&self) -> RGBA<f64> { self.rgba }

    #[inline]
    pub fn alpha(&self) -> f64 { self.rgba.a }

    #[inline]
    pub fn hsl(&self) -> Hsl { self.hsl }

    #[inline]
    pub fn lab(&self) -> Lab { self.lab }

    #[inline]
    pub fn cmyk(&self) -> Cmyk { self.cmyk }

    #[inline]
    pub fn origin(&self) -> Origin { self.origin }

    /// `[r, g, b]` in \[0, 255\].
    pub fn rgb_values(&self) -> [f64; 3] { [self.rgba.r, self.rgba.g, self.rgba.b] }

    /// `[h, s, l]` in degrees and percent.
    pub fn hsl_values(&self) -> [f64; 3] { [self.hsl.h, self.hsl.s, self.hsl.l] }

    /// The canonical CSS string of the color: `hsl(…)` for colors
    /// specified in HSL, `#rrggbb[aa]` otherwise.
    pub fn to_css(&self) -> String {
        match self.origin {
            Origin::Rgb => css::rgb_to_css_string(
                self.rgba.r, self.rgba.g, self.rgba.b, self.rgba.a),
            Origin::Hsl => css::hsl_to_css_string(
                self.hsl.h, self.hsl.s, self.hsl.l, self.rgba.a),
        }
    }

    /// The `#rrggbb[aa]` form of the color, whatever its origin.
    pub fn to_hex(&self) -> String {
        css::rgb_to_css_string(self.rgba.r, self.rgba.g, self.rgba.b,
                               self.rgba.a)
    }

    /// A literal that parses back to this very color: hex when no
    /// digit is lost, the functional notation of its origin with
    /// every component written in full otherwise.
    ///
    /// ```
    /// use palette_blend::Color;
    /// let c: Color = "rgba(127.5, 0, 0, 0.3)".parse().unwrap();
    /// assert_eq!(c.to_exact_css(), "rgb(127.5 0 0 / 0.3)");
    /// assert_eq!(c.to_exact_css().parse::<Color>().unwrap(), c);
    /// ```
    pub fn to_exact_css(&self) -> String {
        let RGBA { r, g, b, a } = self.rgba;
        let alpha = if a >= 1. { String::new() } else { format!(" / {a}") };
        match self.origin {
            Origin::Rgb => {
                let byte_alpha = (255. * a).round() / 255. == a;
                if [r, g, b].iter().all(|x| x.fract() == 0.) && byte_alpha {
                    self.to_hex()
                } else {
                    format!("rgb({r} {g} {b}{alpha})")
                }
            }
            Origin::Hsl => {
                let Hsl { h, s, l } = self.hsl;
                format!("hsl({h}deg {s}% {l}%{alpha})")
            }
        }
    }
}

impl From<CssColor> for Color {
    fn from(c: CssColor) -> Self {
        match c {
            CssColor::Hex(rgba) | CssColor::Rgb(rgba) | CssColor::Named(rgba) =>
                Color::from_rgba(rgba),
            CssColor::Hsl(hsl, alpha) => Color::from_hsla(hsl, alpha),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        css::parse_literal(s).map(Color::from)
    }
}
