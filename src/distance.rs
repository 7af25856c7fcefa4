//! Perceptual distance between L*a*b* colors.

use crate::space::Lab;

/// CIE94-style color difference between `lab1` and `lab2` (graphic
/// arts weights, `kL = kC = kH = 1`).
///
/// The chroma and hue scale factors are derived from `lab1` only, so
/// `delta_e(x, y)` and `delta_e(y, x)` may differ slightly.  The result
/// is never negative.
pub fn delta_e(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let dc = c1 - c2;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    let dh = (da * da + db * db - dc * dc).max(0.).sqrt();
    let sc = 1. + 0.045 * c1;
    let sh = 1. + 0.015 * c1;
    let dcs = dc / sc;
    let dhs = dh / sh;
    (dl * dl + dcs * dcs + dhs * dhs).max(0.).sqrt()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::rgb_to_lab;
    use rgb::RGB;

    fn lab(r: f64, g: f64, b: f64) -> Lab { rgb_to_lab(RGB { r, g, b }) }

    #[test]
    fn identical_colors() {
        for c in [lab(255., 0., 0.), lab(0., 0., 0.), lab(17., 230., 99.),
                  Lab { l: 50., a: -128., b: 127. }] {
            assert_eq!(delta_e(c, c), 0.);
        }
    }

    #[test]
    fn lightness_only() {
        let d = delta_e(Lab { l: 40., a: 0., b: 0. },
                        Lab { l: 50., a: 0., b: 0. });
        assert!((d - 10.).abs() < 1e-12, "{d}");
    }

    #[test]
    fn non_negative_and_ordered() {
        let red = lab(255., 0., 0.);
        let dark_red = lab(200., 0., 0.);
        let blue = lab(0., 0., 255.);
        let near = delta_e(red, dark_red);
        let far = delta_e(red, blue);
        assert!(near > 0. && far > near, "{near} {far}");
    }

    #[test]
    fn asymmetric_in_chroma() {
        let grey = Lab { l: 50., a: 0., b: 0. };
        let vivid = Lab { l: 50., a: 60., b: 0. };
        assert!(delta_e(grey, vivid) > delta_e(vivid, grey));
    }
}
