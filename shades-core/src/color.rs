//! Conversion between color strings and the hue/saturation/lightness model.
//!
//! `hsl()` and `hsla()` strings are read directly so that the lightness a
//! token was written with survives unchanged. Every other CSS color form is
//! handed to `csscolorparser` and converted through sRGB.

use std::{fmt, str::FromStr};

use palette::{FromColor, Srgba};

use crate::error::ParseError;

/// Hue in degrees, saturation, lightness and alpha as ratios
pub type Hsla = palette::Hsla<palette::encoding::Srgb, f64>;

pub fn parse_color(s: &str) -> Result<Hsla, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let lower = s.to_ascii_lowercase();
    let args = lower
        .strip_prefix("hsla(")
        .or_else(|| lower.strip_prefix("hsl("))
        .and_then(|v| v.strip_suffix(')'));

    if let Some(color) = args.and_then(parse_css_hsl) {
        return Ok(color);
    }

    let color = csscolorparser::parse(s).map_err(|e| ParseError::Unrecognized {
        input: s.into(),
        reason: e.to_string(),
    })?;

    let rgba = Srgba::new(color.r, color.g, color.b, color.a);
    Ok(Hsla::from_color(rgba))
}

/// Parse the arguments of a css hsl function with degree hues and percentage
/// saturation and lightness.
///
/// Accepts both the legacy comma separated form `hsl(262, 100%, 68%)` and the
/// space separated form `hsl(262deg 100% 68% / 0.5)`.
///
/// Returns `None` for any other form, which is left to `csscolorparser`.
fn parse_css_hsl(args: &str) -> Option<Hsla> {
    let parts = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>();

    let (hue, saturation, lightness, alpha) = match parts[..] {
        [h, s, l] => (h, s, l, None),
        [h, s, l, a] => (h, s, l, Some(a)),
        _ => return None,
    };

    let hue = number(hue.strip_suffix("deg").unwrap_or(hue))?.rem_euclid(360.0);
    let saturation = percentage(saturation)?;
    let lightness = percentage(lightness)?;
    let alpha = match alpha {
        Some(a) => match a.strip_suffix('%') {
            Some(a) => number(a)? / 100.0,
            None => number(a)?,
        },
        None => 1.0,
    };

    Some(Hsla::new(
        hue,
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
        alpha.clamp(0.0, 1.0),
    ))
}

fn number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn percentage(s: &str) -> Option<f64> {
    Some(number(s.strip_suffix('%')?)? / 100.0)
}

/// Encode a color as a css hsl string, rounding each component to a whole
/// degree or percent.
///
/// Opaque colors use `hsl(h, s%, l%)`, translucent ones `hsla(h, s%, l%, a)`.
pub fn to_hsl_string(color: &Hsla) -> String {
    let h = round_half_up(color.hue.into_positive_degrees());
    let s = round_half_up(color.saturation * 100.0);
    let l = round_half_up(color.lightness * 100.0);

    let a = round_half_up(color.alpha * 100.0) / 100.0;
    if a >= 1.0 {
        format!("hsl({h}, {s}%, {l}%)")
    } else {
        format!("hsla({h}, {s}%, {l}%, {a})")
    }
}

/// Half rounds towards positive infinity, unlike `f64::round`
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// A color which displays as its css hsl string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor(pub Hsla);

impl HslColor {
    pub fn with_lightness(self, lightness: f64) -> Self {
        let mut color = self.0;
        color.lightness = lightness;
        Self(color)
    }

    pub fn lightness(&self) -> f64 {
        self.0.lightness
    }
}

impl FromStr for HslColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).map(Self)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hsl_string(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn hsl_keeps_exact_lightness() {
        let color = parse_color("hsl(262, 100%, 68%)").unwrap();
        assert_eq!(color.hue.into_positive_degrees(), 262.0);
        assert_eq!(color.saturation, 1.0);
        assert_eq!(color.lightness, 0.68);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn hsl_modern_syntax() {
        let color = parse_color("HSL(90deg 50% 25% / 0.5)").unwrap();
        assert_eq!(color.hue.into_positive_degrees(), 90.0);
        assert_eq!(color.saturation, 0.5);
        assert_eq!(color.lightness, 0.25);
        assert_eq!(color.alpha, 0.5);

        let color = parse_color("hsla(-90, 50%, 25%, 40%)").unwrap();
        assert_eq!(color.hue.into_positive_degrees(), 270.0);
        assert_eq!(color.alpha, 0.4);
    }

    #[test]
    fn other_css_forms() {
        let red = parse_color("#ff0000").unwrap();
        assert_close(red.hue.into_positive_degrees(), 0.0);
        assert_close(red.saturation, 1.0);
        assert_close(red.lightness, 0.5);

        let gray = parse_color("rgb(204, 204, 204)").unwrap();
        assert_close(gray.saturation, 0.0);
        assert_close(gray.lightness, 0.8);

        let named = parse_color("white").unwrap();
        assert_close(named.lightness, 1.0);
    }

    #[test]
    fn invalid_colors() {
        assert_eq!(parse_color("  "), Err(ParseError::Empty));
        assert!(matches!(
            parse_color("not-a-color"),
            Err(ParseError::Unrecognized { .. })
        ));
        assert!(matches!(
            parse_color("hsl(1, 2%)"),
            Err(ParseError::Unrecognized { .. })
        ));
        assert!(matches!(
            parse_color("hsl(red, 2%, 3%)"),
            Err(ParseError::Unrecognized { .. })
        ));
    }

    #[test]
    fn hsl_forms_left_to_csscolorparser() {
        let unitless = parse_color("hsl(262, 100, 68)").unwrap();
        assert_close(unitless.hue.into_positive_degrees(), 262.0);

        let turn = parse_color("hsl(0.5turn, 100%, 68%)").unwrap();
        assert_close(turn.hue.into_positive_degrees(), 180.0);
        assert_close(turn.saturation, 1.0);
        assert_close(turn.lightness, 0.68);
    }

    #[test]
    fn format() {
        let color = Hsla::new(262.0, 1.0, 0.98000000000001, 1.0);
        assert_eq!(to_hsl_string(&color), "hsl(262, 100%, 98%)");

        let color = Hsla::new(10.5, 0.125, 0.0751, 0.333);
        assert_eq!(to_hsl_string(&color), "hsla(11, 13%, 8%, 0.33)");

        let color: HslColor = "hsl(262, 100%, 68%)".parse().unwrap();
        assert_eq!(
            color.with_lightness(0.78).to_string(),
            "hsl(262, 100%, 78%)"
        );
    }

    proptest! {
        #[test]
        fn format_is_idempotent(h in 0u32..360, s in 0u32..=100, l in 0u32..=100) {
            let input = format!("hsl({h}, {s}%, {l}%)");
            let color: HslColor = input.parse().unwrap();
            prop_assert_eq!(color.to_string(), input.clone());

            let again: HslColor = color.to_string().parse().unwrap();
            prop_assert_eq!(again.to_string(), input);
        }
    }
}
