//! Walking the lightness axis and naming the shades found along it.

use serde::{Deserialize, Serialize};

use crate::error::InvalidOffset;

/// Quotients are snapped to this resolution before rounding up.
const SNAP: f64 = 1e9;

/// Distance between two consecutive shades on the lightness axis
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Offset(f64);

impl Offset {
    /// Steps of ten percentage points
    pub const DEFAULT: Self = Self(0.1);

    /// Smaller steps would round several shades to the same whole percentage
    pub const MIN: f64 = 0.01;

    /// Accepts offsets in `[0.01, 1)`
    pub fn new(offset: f64) -> Result<Self, InvalidOffset> {
        if (Self::MIN..1.0).contains(&offset) {
            Ok(Self(offset))
        } else {
            Err(InvalidOffset(offset))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Offset {
    type Error = InvalidOffset;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Offset> for f64 {
    fn from(value: Offset) -> Self {
        value.0
    }
}

/// Round `lightness` up to the next multiple of `offset`.
///
/// `0.60` stays `0.60`, while `0.61` becomes `0.70`.
pub fn round_up(lightness: f64, offset: Offset) -> f64 {
    let steps = lightness / offset.get();
    // 0.3 + 3 * 0.1 lands on 6.000000000000001 steps
    let steps = (steps * SNAP).round() / SNAP;

    steps.ceil() * offset.get()
}

/// Translate a lightness ratio to a whole percentage
pub fn as_percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

/// Appends the rounded lightness percentage to `key`.
///
/// `primary` at a lightness of `0.68` becomes `primary-70`.
pub fn shade_key(key: &str, lightness: f64, offset: Offset, separator: &str) -> String {
    let percent = as_percent(round_up(lightness, offset));
    format!("{key}{separator}{percent}")
}

/// Lightness of each lighter shade, stopping before white is reached
pub fn lighter_steps(base: f64, offset: Offset) -> impl Iterator<Item = f64> {
    (1u32..)
        .map(move |n| base + n as f64 * offset.get())
        .take_while(|&l| l < 1.0)
}

/// Lightness of each darker shade, stopping before black is reached
pub fn darker_steps(base: f64, offset: Offset) -> impl Iterator<Item = f64> {
    (1u32..)
        .map(move |n| base - n as f64 * offset.get())
        .take_while(|&l| l > 0.0)
}
