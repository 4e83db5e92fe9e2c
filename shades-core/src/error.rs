use thiserror::Error;

/// A color string could not be interpreted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color {input:?}: {reason}")]
    Unrecognized { input: String, reason: String },
}

/// A base color failed to expand into shades
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to expand base color {key:?}")]
pub struct ShadeError {
    pub key: String,
    #[source]
    pub source: ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("lightness offset must lie at least 0.01 and below 1, got {0}")]
pub struct InvalidOffset(pub f64);
