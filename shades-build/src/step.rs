use std::io::Write;

use anyhow::Context;
use indexmap::IndexMap;
use serde_json::Value;

use crate::{naming::NameCase, tree::TokenTree};

/// Turns a finished token tree into platform artifacts
pub trait BuildStep {
    fn build_all_platforms(&mut self, tokens: &TokenTree) -> anyhow::Result<()>;
}

impl<T: BuildStep + ?Sized> BuildStep for &mut T {
    fn build_all_platforms(&mut self, tokens: &TokenTree) -> anyhow::Result<()> {
        (**self).build_all_platforms(tokens)
    }
}

/// Keeps the named tokens of the last build in memory
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    case: NameCase,
    tokens: IndexMap<String, Value>,
    builds: usize,
}

impl Recorder {
    pub fn new(case: NameCase) -> Self {
        Self {
            case,
            ..Default::default()
        }
    }

    pub fn tokens(&self) -> &IndexMap<String, Value> {
        &self.tokens
    }

    /// Number of times a build was requested
    pub fn builds(&self) -> usize {
        self.builds
    }
}

impl BuildStep for Recorder {
    fn build_all_platforms(&mut self, tokens: &TokenTree) -> anyhow::Result<()> {
        self.builds += 1;
        self.tokens = tokens
            .tokens()
            .into_iter()
            .map(|token| (token.name(self.case), token.value))
            .collect();

        tracing::debug!(count = self.tokens.len(), "recorded tokens");
        Ok(())
    }
}

/// Writes the finished tree as pretty printed json
pub struct JsonExport<W> {
    writer: W,
}

impl<W: Write> JsonExport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BuildStep for JsonExport<W> {
    fn build_all_platforms(&mut self, tokens: &TokenTree) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, tokens)
            .context("Failed to serialize tokens")?;

        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .context("Failed to write tokens")?;

        Ok(())
    }
}
