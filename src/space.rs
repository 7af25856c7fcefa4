//! Conversions between sRGB and the HSL, CIE L*a*b* and CMYK color
//! spaces.
//!
//! RGB components are always expressed in \[0, 255\] and may carry a
//! fractional part: rounding happens only when a color is formatted.

use rgb::RGB;

/// HSL triple with the hue in degrees (\[0, 360\[) and the saturation
/// and lightness in percent (\[0, 100\]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CIE L*a*b* color with a D65 reference white.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    /// Green–red axis, roughly ±128.
    pub a: f64,
    /// Blue–yellow axis, roughly ±128.
    pub b: f64,
}

/// Cyan, magenta, yellow and key (black) components, each in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Convert `r`, `g`, `b` ∈ \[0, 255\] to `(h, s, l)`, each in \[0, 1\].
/// Achromatic colors get a hue of `0`.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255., g / 255., b / 255.);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    if max == min {
        return (0., 0., l);
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let h = if max == r { ((g - b) / d).rem_euclid(6.) }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. };
    (h / 6., s, l)
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. { t += 1. }
    if t > 1. { t -= 1. }
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 1. / 2. { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}

/// Convert `h`, `s`, `l` ∈ \[0, 1\] to RGB components in \[0, 255\]
/// (not rounded).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RGB<f64> {
    if s == 0. {
        let v = 255. * l;
        return RGB { r: v, g: v, b: v };
    }
    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;
    RGB { r: 255. * hue_to_rgb(p, q, h + 1. / 3.),
          g: 255. * hue_to_rgb(p, q, h),
          b: 255. * hue_to_rgb(p, q, h - 1. / 3.) }
}

// D65 reference white.
const XN: f64 = 0.95047;
const YN: f64 = 1.;
const ZN: f64 = 1.08883;
const EPS: f64 = 0.008856;
const KAPPA: f64 = 7.787;
const C0: f64 = 16. / 116.;

fn expand_gamma(c: f64) -> f64 {
    if c > 0.04045 { ((c + 0.055) / 1.055).powf(2.4) } else { c / 12.92 }
}

fn compress_gamma(c: f64) -> f64 {
    if c > 0.0031308 { 1.055 * c.powf(1. / 2.4) - 0.055 } else { 12.92 * c }
}

/// Convert an sRGB color (components in \[0, 255\]) to CIE L*a*b*.
pub fn rgb_to_lab(c: RGB<f64>) -> Lab {
    let r = expand_gamma(c.r / 255.);
    let g = expand_gamma(c.g / 255.);
    let b = expand_gamma(c.b / 255.);
    let x = (0.4124 * r + 0.3576 * g + 0.1805 * b) / XN;
    let y = (0.2126 * r + 0.7152 * g + 0.0722 * b) / YN;
    let z = (0.0193 * r + 0.1192 * g + 0.9505 * b) / ZN;
    let f = |t: f64| if t > EPS { t.cbrt() } else { KAPPA * t + C0 };
    let (fx, fy, fz) = (f(x), f(y), f(z));
    Lab { l: 116. * fy - 16., a: 500. * (fx - fy), b: 200. * (fy - fz) }
}

/// Convert a CIE L*a*b* color back to sRGB.  Components are clamped
/// to \[0, 255\] but not rounded.
pub fn lab_to_rgb(lab: Lab) -> RGB<f64> {
    let fy = (lab.l + 16.) / 116.;
    let fx = lab.a / 500. + fy;
    let fz = fy - lab.b / 200.;
    let finv = |t: f64| {
        let t3 = t * t * t;
        if t3 > EPS { t3 } else { (t - C0) / KAPPA }
    };
    let x = XN * finv(fx);
    let y = YN * finv(fy);
    let z = ZN * finv(fz);
    let r = 3.2406 * x - 1.5372 * y - 0.4986 * z;
    let g = -0.9689 * x + 1.8758 * y + 0.0415 * z;
    let b = 0.0557 * x - 0.2040 * y + 1.0570 * z;
    let encode = |c: f64| 255. * compress_gamma(c).clamp(0., 1.);
    RGB { r: encode(r), g: encode(g), b: encode(b) }
}

/// Convert `r`, `g`, `b` ∈ \[0, 255\] to CMYK.  Pure black (`k == 1`)
/// yields `c == m == y == 0`.
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> Cmyk {
    let (r, g, b) = (r / 255., g / 255., b / 255.);
    let k = 1. - r.max(g).max(b);
    // 0/0 when k == 1.
    let ink = |x: f64| {
        let v = (1. - x - k) / (1. - k);
        if v.is_nan() { 0. } else { v.clamp(0., 1.) }
    };
    Cmyk { c: ink(r), m: ink(g), y: ink(b), k: k.clamp(0., 1.) }
}

/// Convert CMYK components in \[0, 1\] to RGB, rounded to integers.
pub fn cmyk_to_rgb(c: Cmyk) -> RGB<f64> {
    let channel = |x: f64| (255. * (1. - x) * (1. - c.k)).round();
    RGB { r: channel(c.c), g: channel(c.m), b: channel(c.y) }
}
