//! Palette text: one color per line, `-` lines break rows, and
//! anything after `//` is a comment that may hold a [`BlendBundle`].
//!
//! ```text
//! #ff0000
//! f80 // orange
//! hsl(60deg 100% 50%) // {"c":["red","blue","black"],"m":"lab","z":4,"op":"row"}
//! -
//! rgb(0, 128, 0)
//! ```

use std::mem;
use crate::{Codec, delta_e};

pub(crate) mod ty;
use ty::*;

/// Split `line` into its color text and the comment following the
/// first `//`, both trimmed.
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    let line = line.trim();
    match line.find("//") {
        Some(i) => (line[.. i].trim_end(), Some(line[i + 2 ..].trim())),
        None => (line, None),
    }
}

/// Classify one line of palette text.  Lines that are neither colors
/// nor separators are [`LineKind::Invalid`], never an error.
pub fn parse_line(codec: &Codec, line: &str) -> ParsedLine {
    let (text, comment) = split_comment(line);
    let bundle = comment.and_then(BlendBundle::from_comment);
    let kind = if text.starts_with('-') {
        LineKind::Separator
    } else {
        match codec.parse_color(text) {
            Ok(color) => LineKind::Color { css: color.to_css(),
                                           contrast: codec.contrast(&color).to_string(),
                                           color },
            Err(e) => {
                if !text.is_empty() {
                    log::debug!("skipping palette line {line:?}: {e}");
                }
                LineKind::Invalid(text.to_string())
            }
        }
    };
    ParsedLine { kind, comment: comment.map(str::to_string), bundle }
}

/// Bundle inheritance along palette lines.  Given the bundle
/// `current` carried so far, return the bundle attached to `line` and
/// the one carried to the next line.
///
/// A color line gets its own bundle or else inherits `current`; its
/// own bundle is then carried on.  A separator clears the carried
/// bundle.  Invalid lines change nothing.
pub fn carry_bundle(current: Option<BlendBundle>, line: &ParsedLine)
                    -> (Option<BlendBundle>, Option<BlendBundle>) {
    match line.kind {
        LineKind::Color { .. } => {
            let next = line.bundle.clone().or(current);
            (next.clone(), next)
        }
        LineKind::Separator => (None, None),
        LineKind::Invalid(_) => (None, current),
    }
}

/// Accumulator of [`parse_text_palette`].
#[derive(Default)]
struct Fold {
    rows: Vec<Vec<Swatch>>,
    row: Vec<Swatch>,
    flat: Vec<Swatch>,
    bundle: Option<BlendBundle>,
}

impl Fold {
    fn push(mut self, line: ParsedLine) -> Self {
        let (attached, carried) = carry_bundle(self.bundle.take(), &line);
        self.bundle = carried;
        match line.kind {
            LineKind::Color { color, css, contrast } => {
                let swatch = Swatch { color, css, contrast,
                                      comment: line.comment, bundle: attached };
                self.flat.push(swatch.clone());
                self.row.push(swatch);
            }
            LineKind::Separator => self.rows.push(mem::take(&mut self.row)),
            LineKind::Invalid(_) => (),
        }
        self
    }

    fn finish(mut self) -> Palette {
        if !self.row.is_empty() {
            self.rows.push(self.row);
        }
        Palette { rows: self.rows, flat: self.flat }
    }
}

/// Parse a whole palette text.  Every separator closes a row, even an
/// empty one; a trailing row without separator is kept if it has
/// colors.
pub fn parse_text_palette(codec: &Codec, text: &str) -> Palette {
    text.lines()
        .map(|l| parse_line(codec, l))
        .fold(Fold::default(), Fold::push)
        .finish()
}

impl Palette {
    /// See [`parse_text_palette`].
    pub fn parse(codec: &Codec, text: &str) -> Self {
        parse_text_palette(codec, text)
    }

    /// Number of colors.
    pub fn len(&self) -> usize { self.flat.len() }

    pub fn is_empty(&self) -> bool { self.flat.is_empty() }
}

/// Return the swatch of `palette` perceptually closest to `target`
/// (by [`delta_e`] from the target), the first one on ties.
///
/// Palettes with fewer than 2 colors never match, and neither does a
/// `target` that is not a color.
pub fn find_closest_match<'a>(codec: &Codec, target: &str, palette: &'a Palette)
                              -> Option<&'a Swatch> {
    let target = codec.parse_color(target).ok()?.lab();
    if palette.flat.len() < 2 {
        return None;
    }
    palette.flat.iter()
        .map(|s| (delta_e(target, s.color.lab()), s))
        .min_by(|(d0, _), (d1, _)| d0.total_cmp(d1))
        .map(|(_, s)| s)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;
    use pretty_assertions::assert_eq;

    const BUNDLE: &str = r#"{"c":["red","blue","black"],"m":"lab","z":4,"op":"swatch"}"#;

    fn bundle() -> BlendBundle {
        BlendBundle { corners: vec!["red".into(), "blue".into(), "black".into()],
                      method: Method::Lab, grid_size: 4,
                      operation: "swatch".into() }
    }

    fn css(row: &[Swatch]) -> Vec<&str> { row.iter().map(|s| s.css.as_str()).collect() }

    #[test]
    fn comments() {
        assert_eq!(split_comment("  red // warm  "), ("red", Some("warm")));
        assert_eq!(split_comment("// only a comment"), ("", Some("only a comment")));
        assert_eq!(split_comment("#fff"), ("#fff", None));
        assert_eq!(split_comment("#fff //"), ("#fff", Some("")));
    }

    #[test]
    fn line_kinds() {
        let codec = Codec::default();
        let l = parse_line(&codec, "f00 // hot");
        match &l.kind {
            LineKind::Color { color, css, contrast } => {
                assert_eq!(color.rgb_values(), [255., 0., 0.]);
                assert_eq!(css, "#ff0000");
                assert_eq!(contrast, "#00000040");
            }
            k => panic!("{k:?}"),
        }
        assert_eq!(l.comment.as_deref(), Some("hot"));
        assert_eq!(l.bundle, None);
        assert_eq!(parse_line(&codec, "--- red").kind, LineKind::Separator);
        assert_eq!(parse_line(&codec, "not a color").kind,
                   LineKind::Invalid("not a color".into()));
        assert_eq!(parse_line(&codec, "").kind, LineKind::Invalid("".into()));
    }

    #[test]
    fn bundle_decoding() {
        assert_eq!(BlendBundle::from_comment(BUNDLE), Some(bundle()));
        let four = r##"{"c":["#000","#fff","red","blue"],"m":"cmyk","z":2.0,"op":"row"}"##;
        assert_eq!(BlendBundle::from_comment(four).map(|b| b.grid_size), Some(2));
        for bad in [r#"{"c":["red"],"m":"lab","z":4,"op":"x"}"#,
                    r#"{"c":["a","b","c"],"m":"oklab","z":4,"op":"x"}"#,
                    r#"{"c":["a","b","c"],"m":"lab","z":0,"op":"x"}"#,
                    r#"{"c":["a","b","c"],"m":"lab","z":1.5,"op":"x"}"#,
                    r#"{"c":["a","b","c"],"m":"lab","z":4}"#,
                    r#"{"c":["a","b","c"],"m":"lab","z":4,"op":"x","q":1}"#,
                    r#"[1, 2]"#, "warm", ""] {
            assert_eq!(BlendBundle::from_comment(bad), None, "{bad}");
        }
    }

    #[test]
    fn bundle_json_round_trip() {
        let b = bundle();
        assert_eq!(b.to_string(), BUNDLE);
        assert_eq!(BlendBundle::from_comment(&b.to_string()), Some(b));
    }

    #[test]
    fn rows_and_separators() {
        let codec = Codec::default();
        let p = parse_text_palette(&codec, "red\nblue\n-\ngreen");
        assert_eq!(p.rows.len(), 2);
        assert_eq!(css(&p.rows[0]), vec!["#ff0000", "#0000ff"]);
        assert_eq!(css(&p.rows[1]), vec!["#008000"]);
        assert_eq!(css(&p.flat), vec!["#ff0000", "#0000ff", "#008000"]);
    }

    #[test]
    fn invalid_lines_are_skipped() {
        let codec = Codec::default();
        let p = parse_text_palette(&codec, "red\n\nwhatever\n// note\r\nfff\n-\n-\n");
        assert_eq!(p.rows.len(), 2);
        assert_eq!(css(&p.rows[0]), vec!["#ff0000", "#ffffff"]);
        assert!(p.rows[1].is_empty());
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn bundles_carry_until_separator() {
        let codec = Codec::default();
        let text = format!("white\nred // {BUNDLE}\nblue\njunk\n#000 // plain\n-\ngreen");
        let p = parse_text_palette(&codec, &text);
        let bundles: Vec<_> = p.flat.iter().map(|s| s.bundle.is_some()).collect();
        assert_eq!(bundles, vec![false, true, true, true, false]);
        assert_eq!(p.flat[2].bundle, Some(bundle()));
        assert_eq!(p.flat[3].comment.as_deref(), Some("plain"));
    }

    #[test]
    fn newer_bundle_wins() {
        let codec = Codec::default();
        let other = BlendBundle { method: Method::Rgb, ..bundle() };
        let text = format!("red // {BUNDLE}\nblue // {other}\ngreen");
        let p = parse_text_palette(&codec, &text);
        assert_eq!(p.flat[0].bundle, Some(bundle()));
        assert_eq!(p.flat[1].bundle, Some(other.clone()));
        assert_eq!(p.flat[2].bundle, Some(other));
    }

    #[test]
    fn carry_rule() {
        let codec = Codec::default();
        let own = parse_line(&codec, &format!("red // {BUNDLE}"));
        let plain = parse_line(&codec, "blue");
        let sep = parse_line(&codec, "-");
        let junk = parse_line(&codec, &format!("junk // {BUNDLE}"));
        let b = Some(bundle());
        assert_eq!(carry_bundle(None, &own), (b.clone(), b.clone()));
        assert_eq!(carry_bundle(b.clone(), &plain), (b.clone(), b.clone()));
        assert_eq!(carry_bundle(None, &plain), (None, None));
        assert_eq!(carry_bundle(b.clone(), &sep), (None, None));
        assert_eq!(carry_bundle(None, &junk), (None, None));
        assert_eq!(carry_bundle(b.clone(), &junk), (None, b));
    }

    #[test]
    fn closest_match() {
        let codec = Codec::default();
        let p = Palette::parse(&codec, "red\nblue\n-\ngreen\nwhite");
        let m = find_closest_match(&codec, "#e01008", &p).unwrap();
        assert_eq!(m.css, "#ff0000");
        let m = find_closest_match(&codec, "hsl(120 100% 20%)", &p).unwrap();
        assert_eq!(m.css, "#008000");
        assert_eq!(find_closest_match(&codec, "nope", &p), None);
    }

    #[test]
    fn closest_match_needs_two_colors() {
        let codec = Codec::default();
        let one = Palette::parse(&codec, "red");
        assert_eq!(find_closest_match(&codec, "red", &one), None);
        assert_eq!(find_closest_match(&codec, "red", &Palette::default()), None);
    }

    #[test]
    fn closest_match_ties_keep_first() {
        let codec = Codec::default();
        let p = Palette::parse(&codec, "red // first\n#f00 // second\nblue");
        let m = find_closest_match(&codec, "red", &p).unwrap();
        assert_eq!(m.comment.as_deref(), Some("first"));
    }
}
