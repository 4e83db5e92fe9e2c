pub use palette;
pub use shades_build as build;
pub use shades_core as core;
