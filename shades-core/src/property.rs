use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named design token entry.
///
/// Everything besides `value` is carried along untouched when shades are
/// derived from the property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub value: String,
    #[serde(flatten)]
    pub metadata: IndexMap<String, Value>,
}

impl Property {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            metadata: IndexMap::new(),
        }
    }

    /// Set an extra metadata field
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Clone the property with a different value
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Base colors keyed by name
pub type PropertyMap = IndexMap<String, Property>;

/// Generated shades keyed by their synthesized shade key
pub type ShadeMapping = IndexMap<String, Property>;
