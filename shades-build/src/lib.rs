//! Feeds generated shades into a design token build.

pub mod error;
pub mod naming;
pub mod pipeline;
pub mod step;
pub mod tree;

pub use error::TreeError;
pub use naming::{token_name, NameCase};
pub use pipeline::ShadePipeline;
pub use step::{BuildStep, JsonExport, Recorder};
pub use tree::{SlotPath, Token, TokenTree};
