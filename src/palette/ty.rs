use std::fmt;
use serde::{Deserialize, Serialize};
use crate::{Color, Method};

/// Parameters of a blend, stored as JSON in a palette comment so that
/// the grid a color was picked from can be rebuilt later.
///
/// Encoded as `{"c": [corners…], "m": "lab", "z": 4, "op": "row"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBundle")]
pub struct BlendBundle {
    /// 3 (linked mode) or 4 corner colors: top-left, top-right,
    /// bottom-left and bottom-right.
    #[serde(rename = "c")]
    pub corners: Vec<String>,
    #[serde(rename = "m")]
    pub method: Method,
    /// Number of intermediate colors on each side (≥ 1).
    #[serde(rename = "z")]
    pub grid_size: u32,
    /// What was extracted from the grid (see
    /// [`Selection::operation`](crate::Selection::operation)).
    #[serde(rename = "op")]
    pub operation: String,
}

/// The exact JSON shape accepted for a [`BlendBundle`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBundle {
    c: Vec<String>,
    m: String,
    z: f64,
    op: String,
}

impl TryFrom<RawBundle> for BlendBundle {
    type Error = String;

    fn try_from(raw: RawBundle) -> Result<Self, Self::Error> {
        if !matches!(raw.c.len(), 3 | 4) {
            return Err(format!("{} corners", raw.c.len()));
        }
        let method = raw.m.parse::<Method>().map_err(|e| e.to_string())?;
        if !(raw.z >= 1. && raw.z.fract() == 0. && raw.z <= u32::MAX as f64) {
            return Err(format!("grid size {}", raw.z));
        }
        Ok(BlendBundle { corners: raw.c, method, grid_size: raw.z as u32,
                         operation: raw.op })
    }
}

impl BlendBundle {
    /// Decode a comment holding a bundle.  Anything else, including
    /// JSON of another shape, gives `None`.
    ///
    /// Refused shapes: keys other than exactly `c`, `m`, `z` and `op`,
    /// fewer than 3 or more than 4 corners, a method that is not one of
    /// [`Method::ALL`], and a grid size `z` that is not a whole number
    /// ≥ 1 (`4.0` is accepted).
    pub fn from_comment(comment: &str) -> Option<Self> {
        match serde_json::from_str(comment.trim()) {
            Ok(b) => Some(b),
            Err(e) => {
                log::trace!("comment {comment:?} is not a blend bundle: {e}");
                None
            }
        }
    }
}

impl fmt::Display for BlendBundle {
    /// The JSON encoding of the bundle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// What a line of palette text holds.
#[derive(Clone, Debug, PartialEq)]
pub enum LineKind {
    /// A color with its canonical CSS string and its border color.
    Color { color: Color, css: String, contrast: String },
    /// A row break (line starting with `-`).
    Separator,
    /// Text that is not a color; such lines are skipped.
    Invalid(String),
}

/// One line of palette text.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedLine {
    pub kind: LineKind,
    pub comment: Option<String>,
    /// The bundle held by this line's own comment.
    pub bundle: Option<BlendBundle>,
}

/// A color entry of a [`Palette`].
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub color: Color,
    /// Canonical CSS string.
    pub css: String,
    /// Border color used to outline the swatch.
    pub contrast: String,
    pub comment: Option<String>,
    /// The bundle of the line or, failing that, the one inherited
    /// from a previous line of the same row.
    pub bundle: Option<BlendBundle>,
}

/// Colors of a palette text, by rows and all together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    pub rows: Vec<Vec<Swatch>>,
    pub flat: Vec<Swatch>,
}
