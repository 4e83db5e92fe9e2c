use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shades_core::{PropertyMap, ShadeMapping};

use crate::{
    error::TreeError,
    naming::{token_name, NameCase},
};

/// Dot separated location of a group of properties inside a [`TokenTree`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotPath(Vec<String>);

impl SlotPath {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    fn prefix(&self, len: usize) -> Self {
        Self(self.0[..len].to_vec())
    }
}

impl Default for SlotPath {
    fn default() -> Self {
        Self::new(["color", "background", "page"])
    }
}

impl FromStr for SlotPath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s.split('.').map(str::trim).collect_vec();
        if segments.iter().any(|v| v.is_empty()) {
            return Err(TreeError::InvalidSlotPath(s.into()));
        }

        Ok(Self::new(segments))
    }
}

impl TryFrom<String> for SlotPath {
    type Error = TreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotPath> for String {
    fn from(value: SlotPath) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format("."))
    }
}

/// A single named design token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub path: Vec<String>,
    pub value: Value,
    pub metadata: Map<String, Value>,
}

impl Token {
    pub fn name(&self, case: NameCase) -> String {
        token_name(&self.path, case)
    }
}

/// Nested design token definitions.
///
/// Any object holding a `value` field is a token, every other object is a
/// group of tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTree(Map<String, Value>);

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self, TreeError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    pub fn from_value(value: Value) -> Result<Self, TreeError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(TreeError::RootNotAnObject),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn slot(&self, path: &SlotPath) -> Result<&Map<String, Value>, TreeError> {
        let mut current = &self.0;
        for (i, segment) in path.segments().iter().enumerate() {
            current = match current.get(segment) {
                Some(Value::Object(map)) => map,
                Some(_) => return Err(TreeError::NotAnObject(path.prefix(i + 1))),
                None => return Err(TreeError::MissingSlot(path.prefix(i + 1))),
            };
        }

        Ok(current)
    }

    fn slot_mut(&mut self, path: &SlotPath) -> Result<&mut Map<String, Value>, TreeError> {
        let mut current = &mut self.0;
        for (i, segment) in path.segments().iter().enumerate() {
            current = match current.get_mut(segment) {
                Some(Value::Object(map)) => map,
                Some(_) => return Err(TreeError::NotAnObject(path.prefix(i + 1))),
                None => return Err(TreeError::MissingSlot(path.prefix(i + 1))),
            };
        }

        Ok(current)
    }

    /// Read the color properties stored in a slot
    pub fn properties_at(&self, path: &SlotPath) -> Result<PropertyMap, TreeError> {
        let slot = self.slot(path)?;

        serde_json::from_value(Value::Object(slot.clone())).map_err(|source| {
            TreeError::InvalidProperties {
                slot: path.clone(),
                source,
            }
        })
    }

    /// Replace everything in an existing slot with the given shades
    pub fn replace_slot(&mut self, path: &SlotPath, shades: &ShadeMapping) -> Result<(), TreeError> {
        let Value::Object(shades) = serde_json::to_value(shades)? else {
            return Err(TreeError::NotAnObject(path.clone()));
        };

        *self.slot_mut(path)? = shades;
        Ok(())
    }

    /// Flatten the tree into its tokens, in definition order
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        collect_tokens(&self.0, &mut Vec::new(), &mut tokens);
        tokens
    }
}

fn collect_tokens(map: &Map<String, Value>, path: &mut Vec<String>, tokens: &mut Vec<Token>) {
    for (key, value) in map {
        let Value::Object(child) = value else {
            continue;
        };

        path.push(key.clone());

        if let Some(value) = child.get("value") {
            let metadata = child
                .iter()
                .filter(|(k, _)| *k != "value")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();

            tokens.push(Token {
                path: path.clone(),
                value: value.clone(),
                metadata,
            });
        } else {
            collect_tokens(child, path, tokens);
        }

        path.pop();
    }
}
