//! Call-time arguments for a single tool invocation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::plan::ArgumentError;

/// Flat mapping from parameter name to JSON value.
///
/// Supplied by the caller for one invocation and dropped afterwards. A key
/// whose value is `null` is treated as absent by the planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallArguments(Map<String, Value>);

impl CallArguments {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert or replace an argument, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Remove an argument.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Get an argument value, treating `null` as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// Whether a non-null value is present for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all arguments, including `null` ones.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert back into a JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for CallArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<CallArguments> for Value {
    fn from(args: CallArguments) -> Self {
        Self::Object(args.0)
    }
}

impl TryFrom<Value> for CallArguments {
    type Error = ArgumentError;

    /// Accepts a JSON object, or `null` as an empty argument set.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            Value::Bool(_) => Err(ArgumentError::NotAnObject("boolean")),
            Value::Number(_) => Err(ArgumentError::NotAnObject("number")),
            Value::String(_) => Err(ArgumentError::NotAnObject("string")),
            Value::Array(_) => Err(ArgumentError::NotAnObject("array")),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for CallArguments {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
