use anyhow::Context;
use serde::{Deserialize, Serialize};
use shades_core::{ExpandOptions, ShadeExpander};

use crate::{
    step::BuildStep,
    tree::{SlotPath, TokenTree},
};

/// Replaces the base colors in a slot of the token tree with their shades,
/// then hands the tree to a build step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadePipeline {
    /// Where base colors are read from and shades are written to
    pub slot: SlotPath,
    pub options: ExpandOptions,
}

impl ShadePipeline {
    pub fn new(slot: SlotPath, options: ExpandOptions) -> Self {
        Self { slot, options }
    }

    /// Expand the slot in place, returning the number of shades written.
    ///
    /// The tree is left untouched on failure.
    pub fn apply(&self, tree: &mut TokenTree) -> anyhow::Result<usize> {
        let _span = tracing::info_span!("apply", slot = %self.slot).entered();

        let base = tree
            .properties_at(&self.slot)
            .with_context(|| format!("Failed to read base colors from {}", self.slot))?;

        let shades = ShadeExpander::new(self.options.clone())
            .expand(&base)
            .context("Failed to generate shades")?;

        tree.replace_slot(&self.slot, &shades)
            .with_context(|| format!("Failed to write shades to {}", self.slot))?;

        tracing::info!(
            base_colors = base.len(),
            shades = shades.len(),
            "replaced base colors"
        );

        Ok(shades.len())
    }

    /// Expand the slot and build all platforms from the resulting tree.
    ///
    /// The build step is not invoked if expansion fails.
    pub fn run(&self, mut tree: TokenTree, mut step: impl BuildStep) -> anyhow::Result<TokenTree> {
        self.apply(&mut tree)?;

        step.build_all_platforms(&tree)
            .context("Failed to build platforms")?;

        Ok(tree)
    }
}
