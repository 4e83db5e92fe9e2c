use std::iter;

use serde::{Deserialize, Serialize};

use crate::{
    color::HslColor,
    error::ShadeError,
    lightness::{darker_steps, lighter_steps, shade_key, Offset},
    property::{Property, PropertyMap, ShadeMapping},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    /// Lightness distance between shades
    pub offset: Offset,
    /// Placed between the base key and the shade percentage
    pub separator: String,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            offset: Offset::DEFAULT,
            separator: "-".into(),
        }
    }
}

impl ExpandOptions {
    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Expands base colors into a family of lighter and darker shades.
///
/// Each base color is walked along its lightness axis in `offset` sized
/// steps, in both directions, until either end of the axis would be reached.
/// Every step produces a shade keyed by the lightness rounded up to the next
/// step, while the stored color keeps the exact lightness reached.
#[derive(Debug, Clone, Default)]
pub struct ShadeExpander {
    options: ExpandOptions,
}

impl ShadeExpander {
    pub fn new(options: ExpandOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExpandOptions {
        &self.options
    }

    /// Expand every base color.
    ///
    /// Fails on the first value which is not a color, in which case no shades
    /// are returned at all.
    pub fn expand(&self, properties: &PropertyMap) -> Result<ShadeMapping, ShadeError> {
        let mut shades = ShadeMapping::new();

        for (key, property) in properties {
            self.expand_property(key, property, &mut shades)?;
        }

        tracing::info!(
            base_colors = properties.len(),
            shades = shades.len(),
            "expanded base colors"
        );

        Ok(shades)
    }

    /// Insert the shades of a single base color into `shades`.
    ///
    /// Returns the number of shades generated.
    pub fn expand_property(
        &self,
        key: &str,
        property: &Property,
        shades: &mut ShadeMapping,
    ) -> Result<usize, ShadeError> {
        let _span = tracing::debug_span!("expand_property", key).entered();

        let color: HslColor = property.value.parse().map_err(|source| ShadeError {
            key: key.into(),
            source,
        })?;

        let offset = self.options.offset;
        let base = color.lightness();

        let walk = iter::once(base)
            .chain(lighter_steps(base, offset))
            .chain(darker_steps(base, offset));

        let mut count = 0;
        for lightness in walk {
            let name = shade_key(key, lightness, offset, &self.options.separator);
            let value = color.with_lightness(lightness).to_string();

            tracing::debug!(%name, %value, lightness, "shade");
            if shades.insert(name, property.with_value(value)).is_some() {
                tracing::debug!("replaced shade with the same key");
            }

            count += 1;
        }

        Ok(count)
    }
}
