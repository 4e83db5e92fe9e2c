//! Tonal shade generation.
//!
//! Base colors are expanded into lighter and darker variants by stepping
//! along the lightness axis of their hue/saturation/lightness representation.

pub mod color;
pub mod error;
pub mod expand;
pub mod lightness;
pub mod property;

pub use color::{parse_color, to_hsl_string, HslColor, Hsla};
pub use error::{InvalidOffset, ParseError, ShadeError};
pub use expand::{ExpandOptions, ShadeExpander};
pub use lightness::{as_percent, round_up, shade_key, Offset};
pub use property::{Property, PropertyMap, ShadeMapping};
