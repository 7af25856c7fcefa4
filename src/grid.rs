//! Two dimensional blends between four corner colors.
//!
//! A grid of size `n` has `n + 2` rows and columns: the corners plus
//! `n` intermediate colors along each side.  Cell `(ix, iy)` is the
//! bilinear interpolation of the corners at `tx = ix / (n + 1)`,
//! `ty = iy / (n + 1)`, computed in the color space of a [`Method`].

use std::fmt;
use std::str::FromStr;
use rgb::RGBA;
use serde::{Deserialize, Serialize};
use crate::{BlendBundle, BlendError, Codec, Color, ColorRange, Selection, css, space};
use crate::space::{Cmyk, Lab};

/// The color space in which colors are interpolated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Rgb,
    Hsl,
    Lab,
    Cmyk,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Rgb, Method::Hsl, Method::Lab, Method::Cmyk];

    pub fn name(self) -> &'static str {
        match self {
            Method::Rgb => "rgb",
            Method::Hsl => "hsl",
            Method::Lab => "lab",
            Method::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL.into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BlendError::UnknownMethod(s.to_string()))
    }
}

/// The coordinates of a color in the space of a [`Method`], together
/// with its alpha.  Unused trailing values are `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channels {
    pub method: Method,
    /// RGB in \[0, 255\]; HSL in degrees and percent; L*a*b*; CMYK in
    /// \[0, 1\].
    pub values: [f64; 4],
    pub alpha: f64,
}

impl Channels {
    pub fn new(c: &Color, method: Method) -> Self {
        let values = match method {
            Method::Rgb => { let [r, g, b] = c.rgb_values(); [r, g, b, 0.] }
            Method::Hsl => { let [h, s, l] = c.hsl_values(); [h, s, l, 0.] }
            Method::Lab => { let Lab { l, a, b } = c.lab(); [l, a, b, 0.] }
            Method::Cmyk => { let Cmyk { c, m, y, k } = c.cmyk(); [c, m, y, k] }
        };
        Channels { method, values, alpha: c.alpha() }
    }

    /// Linear interpolation of every channel: `t == 0.` gives `self`
    /// and `t == 1.` gives `other`.
    pub fn lerp(&self, other: &Channels, t: f64) -> Channels {
        debug_assert_eq!(self.method, other.method);
        let lerp = |x: f64, y: f64| x + (y - x) * t;
        let mut values = self.values;
        for (v, w) in values.iter_mut().zip(other.values) {
            *v = lerp(*v, w);
        }
        Channels { method: self.method, values, alpha: lerp(self.alpha, other.alpha) }
    }

    /// RGB components in \[0, 255\] (not rounded except for CMYK) and
    /// alpha in \[0, 1\].
    pub fn to_rgba(&self) -> RGBA<f64> {
        let [x, y, z, w] = self.values;
        let rgb = match self.method {
            Method::Rgb => rgb::RGB { r: x, g: y, b: z },
            Method::Hsl => space::hsl_to_rgb(x / 360., y / 100., z / 100.),
            Method::Lab => space::lab_to_rgb(Lab { l: x, a: y, b: z }),
            Method::Cmyk => space::cmyk_to_rgb(Cmyk { c: x, m: y, y: z, k: w }),
        };
        RGBA { r: rgb.r, g: rgb.g, b: rgb.b, a: self.alpha }
    }

    /// Canonical `#rrggbb[aa]` string.
    pub fn to_css(&self) -> String {
        let c = self.to_rgba();
        css::rgb_to_css_string(c.r, c.g, c.b, c.a)
    }
}

/// Interpolation between two [`Channels`].
#[derive(Clone, Copy, Debug)]
pub struct Blend {
    from: Channels,
    to: Channels,
}

impl Blend {
    pub fn new(from: Channels, to: Channels) -> Self { Blend { from, to } }
}

impl ColorRange<Channels> for Blend {
    fn at(&self, t: f64) -> Channels { self.from.lerp(&self.to, t.clamp(0., 1.)) }
}

/// Whether cell `(ix, iy)` of a linked grid of size `n` is a blank
/// spacer, i.e. lies beyond the anti-diagonal joining the top-right
/// and bottom-left corners.
#[inline]
pub fn is_masked(ix: usize, iy: usize, n: usize) -> bool {
    // ix > n - iy + 1, without underflow.
    ix + iy > n + 1
}

/// Validated parameters of a [`BlendGrid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendSpec {
    corners: [Color; 4], // top-left, top-right, bottom-left, bottom-right
    method: Method,
    grid_size: usize,
    linked: bool,
}

impl BlendSpec {
    /// Blend of the corners top-left, top-right, bottom-left and
    /// bottom-right with `grid_size ≥ 1` intermediate colors per side.
    pub fn new(corners: [Color; 4], method: Method, grid_size: usize)
               -> Result<Self, BlendError> {
        if grid_size == 0 {
            return Err(BlendError::GridSize);
        }
        Ok(BlendSpec { corners, method, grid_size, linked: false })
    }

    /// Linked blend: the bottom-right corner is the top-left one and
    /// only the cells up to the anti-diagonal are shown.
    pub fn linked(top_left: Color, top_right: Color, bottom_left: Color,
                  method: Method, grid_size: usize) -> Result<Self, BlendError> {
        let spec = Self::new([top_left, top_right, bottom_left, top_left],
                             method, grid_size)?;
        Ok(BlendSpec { linked: true, ..spec })
    }

    /// Rebuild the blend described by `bundle`; 3 corners make a
    /// linked blend.
    pub fn from_bundle(codec: &Codec, bundle: &BlendBundle) -> Result<Self, BlendError> {
        let corners = bundle.corners.iter().enumerate()
            .map(|(index, c)| codec.parse_color(c)
                 .map_err(|source| BlendError::Corner { index, source }))
            .collect::<Result<Vec<_>, _>>()?;
        let n = bundle.grid_size as usize;
        match corners[..] {
            [a, b, c] => Self::linked(a, b, c, bundle.method, n),
            [a, b, c, d] => Self::new([a, b, c, d], bundle.method, n),
            _ => Err(BlendError::CornerCount(corners.len())),
        }
    }

    /// The bundle describing this blend, for an extraction named
    /// `operation`.  Corners are written so that [`BlendSpec::from_bundle`]
    /// rebuilds the same blend.
    pub fn to_bundle(&self, operation: &str) -> BlendBundle {
        let k = if self.linked { 3 } else { 4 };
        let corners = self.corners[.. k].iter().map(Color::to_exact_css).collect();
        BlendBundle { corners,
                      method: self.method,
                      grid_size: self.grid_size as u32,
                      operation: operation.to_string() }
    }

    /// Top-left, top-right, bottom-left and bottom-right corners.
    #[inline]
    pub fn corners(&self) -> &[Color; 4] { &self.corners }

    /// Color space of the interpolation.
    #[inline]
    pub fn method(&self) -> Method { self.method }

    /// Number of intermediate colors per side.
    #[inline]
    pub fn grid_size(&self) -> usize { self.grid_size }

    /// Whether the bottom-right corner is tied to the top-left one.
    #[inline]
    pub fn is_linked(&self) -> bool { self.linked }

    /// Compute every cell of the grid.  The masking of linked grids is
    /// applied on top (see [`BlendGrid::display_rows`]).
    pub fn generate(&self) -> BlendGrid {
        let side = self.grid_size + 2;
        log::debug!("blending {} grid {side}×{side}{}", self.method,
                    if self.linked { " (linked)" } else { "" });
        let [a, b, c, d] = self.corners.map(|c| Channels::new(&c, self.method));
        let top = Blend::new(a, b).samples(side).map(|(_, x)| x);
        let bottom = Blend::new(c, d).samples(side).map(|(_, x)| x);
        let columns: Vec<Vec<String>> = top.zip(bottom)
            .map(|(t, b)| Blend::new(t, b).samples(side)
                 .map(|(_, x)| x.to_css()).collect())
            .collect();
        let mut rows: Vec<Vec<String>> = (0 .. side)
            .map(|iy| columns.iter().map(|col| col[iy].clone()).collect())
            .collect();
        let last = side - 1;
        for (iy, ix, corner) in [(0, 0, 0), (0, last, 1), (last, 0, 2), (last, last, 3)] {
            rows[iy][ix] = self.corners[corner].to_hex();
        }
        BlendGrid { rows, spec: *self }
    }
}

/// The colors of a blend, row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendGrid {
    rows: Vec<Vec<String>>, // (n + 2) × (n + 2)
    spec: BlendSpec,
}

impl BlendGrid {
    pub fn spec(&self) -> &BlendSpec { &self.spec }

    /// All cells, masked ones included.
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    /// Number of rows (and columns).
    pub fn side(&self) -> usize { self.rows.len() }

    pub fn cell(&self, ix: usize, iy: usize) -> &str { &self.rows[iy][ix] }

    pub fn is_masked(&self, ix: usize, iy: usize) -> bool {
        self.spec.linked && is_masked(ix, iy, self.spec.grid_size)
    }

    /// Rows as displayed: `None` for the spacers of linked grids.
    pub fn display_rows(&self) -> Vec<Vec<Option<&str>>> {
        self.rows.iter().enumerate()
            .map(|(iy, row)| row.iter().enumerate()
                 .map(|(ix, c)| if self.is_masked(ix, iy) { None }
                                else { Some(c.as_str()) })
                 .collect())
            .collect()
    }

    /// The displayed cells along `sel`, spacers skipped.
    pub fn extract(&self, sel: Selection) -> Vec<String> {
        sel.extract(&self.display_rows()).into_iter()
            .flatten().map(str::to_string).collect()
    }

    /// Palette text for the cells along `sel`, the first line carrying
    /// the bundle of this blend.
    pub fn selection_text(&self, sel: Selection) -> String {
        let bundle = self.spec.to_bundle(sel.operation());
        crate::select::to_palette_text(&self.extract(sel), Some(&bundle))
    }

    /// Palette text for the whole grid, one palette row per grid row.
    pub fn to_palette_text(&self) -> String {
        let bundle = self.spec.to_bundle("grid");
        self.display_rows().iter().enumerate()
            .map(|(iy, row)| {
                let cells: Vec<String> = row.iter().flatten().map(|c| c.to_string()).collect();
                crate::select::to_palette_text(&cells, (iy == 0).then_some(&bundle))
            })
            .collect::<Vec<_>>()
            .join("\n-\n")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color(s: &str) -> Color { Codec::default().parse_color(s).unwrap() }

    fn corners() -> [Color; 4] {
        [color("#ff0000"), color("hsl(200deg 50% 40% / 50%)"), color("#0f08"),
         color("black")]
    }

    #[test]
    fn method_names() {
        for m in Method::ALL {
            assert_eq!(m.name().parse::<Method>(), Ok(m));
        }
        assert_eq!("LAB".parse::<Method>(), Ok(Method::Lab));
        assert_eq!("oklab".parse::<Method>(),
                   Err(BlendError::UnknownMethod("oklab".into())));
    }

    #[test]
    fn corners_are_exact() {
        let c = corners();
        for m in Method::ALL {
            for n in 1 ..= 6 {
                let g = BlendSpec::new(c, m, n).unwrap().generate();
                let last = n + 1;
                assert_eq!(g.side(), n + 2);
                assert!(g.rows().iter().all(|r| r.len() == n + 2));
                assert_eq!(g.cell(0, 0), c[0].to_hex());
                assert_eq!(g.cell(last, 0), c[1].to_hex());
                assert_eq!(g.cell(0, last), c[2].to_hex());
                assert_eq!(g.cell(last, last), c[3].to_hex());
            }
        }
    }

    #[test]
    fn grid_size_zero() {
        assert_eq!(BlendSpec::new(corners(), Method::Rgb, 0), Err(BlendError::GridSize));
    }

    #[test]
    fn midpoints() {
        let bw = [color("black"), color("white"), color("black"), color("white")];
        let mid = |m| BlendSpec::new(bw, m, 1).unwrap().generate().cell(1, 1).to_string();
        assert_eq!(mid(Method::Rgb), "#808080");
        assert_eq!(mid(Method::Cmyk), "#808080");
        assert_eq!(mid(Method::Hsl), "#808080");
        let lab = color(&mid(Method::Lab));
        for x in lab.rgb_values() {
            assert!((x - 119.).abs() <= 1., "{:?}", lab.rgb_values());
        }
    }

    #[test]
    fn hsl_hue_is_linear() {
        let rb = [color("red"), color("blue"), color("red"), color("blue")];
        let g = BlendSpec::new(rb, Method::Hsl, 1).unwrap().generate();
        assert_eq!(g.cell(1, 0), "#00ff00");
    }

    #[test]
    fn alpha_is_blended() {
        let c = [color("#ff000000"), color("#ff0000"), color("#ff000000"),
                 color("#ff0000")];
        let g = BlendSpec::new(c, Method::Rgb, 1).unwrap().generate();
        assert_eq!(g.cell(1, 1), "#ff000080");
    }

    #[test]
    fn masking() {
        assert!(!is_masked(0, 0, 4));
        assert!(!is_masked(5, 0, 4));
        assert!(!is_masked(0, 5, 4));
        assert!(!is_masked(2, 3, 4));
        assert!(is_masked(3, 3, 4));
        assert!(is_masked(5, 5, 4));
    }

    #[test]
    fn linked_grid() {
        let spec = BlendSpec::linked(color("red"), color("blue"), color("black"),
                                     Method::Lab, 4).unwrap();
        let g = spec.generate();
        assert_eq!(g.cell(5, 5), "#ff0000");
        let shown = g.display_rows();
        let spacers = shown.iter().flatten().filter(|c| c.is_none()).count();
        assert_eq!(spacers, 15);
        assert_eq!(shown[5][0], Some("#000000"));
        assert_eq!(shown[0][5], Some("#0000ff"));
        assert_eq!(shown[1][5], None);
        let plain = BlendSpec::new(*spec.corners(), Method::Lab, 4).unwrap().generate();
        assert_eq!(g.rows(), plain.rows());
        assert!(plain.display_rows().iter().flatten().all(Option::is_some));
    }

    #[test]
    fn bundle_round_trip() {
        let codec = Codec::default();
        let bundle = BlendBundle::from_comment(
            r#"{"c":["red","blue","black"],"m":"lab","z":4,"op":"swatch"}"#).unwrap();
        let spec = BlendSpec::from_bundle(&codec, &bundle).unwrap();
        assert!(spec.is_linked());
        assert_eq!(spec.grid_size(), 4);
        let back = spec.to_bundle("swatch");
        assert_eq!(back.corners, vec!["#ff0000", "#0000ff", "#000000"]);
        assert_eq!(BlendSpec::from_bundle(&codec, &back), Ok(spec));

        let bad = BlendBundle { corners: vec!["red".into(), "nope".into(), "blue".into()],
                                ..bundle };
        assert!(matches!(BlendSpec::from_bundle(&codec, &bad),
                         Err(BlendError::Corner { index: 1, .. })));
    }

    #[test]
    fn bundle_keeps_exact_corners() {
        let codec = Codec::default();
        let c = [color("hsl(200.5deg 50.5% 40.5%)"), color("rgb(127.5, 0, 0)"),
                 color("rgba(0,0,255,0.3)"), color("black")];
        let spec = BlendSpec::new(c, Method::Hsl, 3).unwrap();
        let bundle = spec.to_bundle("row");
        assert_eq!(bundle.corners, vec!["hsl(200.5deg 50.5% 40.5%)", "rgb(127.5 0 0)",
                                        "rgb(0 0 255 / 0.3)", "#000000"]);
        let text = format!("{bundle}");
        let back = BlendSpec::from_bundle(&codec, &BlendBundle::from_comment(&text).unwrap())
            .unwrap();
        assert_eq!(back, spec);
        assert_eq!(back.generate(), spec.generate());

        let translucent = [color("#0f08"), color("hsl(10deg 20% 30% / 0.25)"),
                           color("rgb(1.25 2 3)"), color("white")];
        let spec = BlendSpec::linked(translucent[0], translucent[1], translucent[2],
                                     Method::Lab, 2).unwrap();
        assert_eq!(spec.to_bundle("grid").corners[0], "#00ff0088");
        assert_eq!(BlendSpec::from_bundle(&codec, &spec.to_bundle("grid")), Ok(spec));
    }

    #[test]
    fn extraction_skips_spacers() {
        let spec = BlendSpec::linked(color("white"), color("black"), color("black"),
                                     Method::Rgb, 1).unwrap();
        let g = spec.generate();
        assert_eq!(g.extract(Selection::Row(1)), vec!["#808080", "#808080"]);
        assert_eq!(g.extract(Selection::DiagonalTopLeft), vec!["#ffffff", "#808080"]);
        assert_eq!(g.extract(Selection::DiagonalTopRight),
                   vec!["#000000", "#808080", "#000000"]);
        let text = g.selection_text(Selection::CornerTopRight);
        let first = text.lines().next().unwrap();
        let (cell, comment) = crate::palette::split_comment(first);
        assert_eq!(cell, "#ffffff");
        let bundle = BlendBundle::from_comment(comment.unwrap()).unwrap();
        assert_eq!(bundle.operation, "corner-tr");
        assert_eq!(BlendSpec::from_bundle(&Codec::default(), &bundle), Ok(spec));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn grid_text() {
        let spec = BlendSpec::linked(color("white"), color("black"), color("black"),
                                     Method::Rgb, 1).unwrap();
        let text = spec.generate().to_palette_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 1 + 2 + 1 + 1);
        assert!(lines[0].starts_with("#ffffff // {\"c\":[\"#ffffff\",\"#000000\",\"#000000\"]"));
        assert!(lines[0].ends_with("\"op\":\"grid\"}"));
        assert_eq!(&lines[1 ..], &["#808080", "#000000", "-", "#808080", "#808080",
                                   "-", "#000000"]);
    }
}
