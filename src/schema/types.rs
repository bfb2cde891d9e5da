//! Inferred class model types

use crate::classify::PrimitiveKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Access level assigned to generated class properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Private,
    Protected,
    Public,
}

/// Access levels accepted for generated source
pub const ALLOWED_ACCESS_LEVELS: &[&str] = &["private", "protected", "public"];

impl AccessLevel {
    /// Parse a requested access level against the allow-list
    pub fn parse(level: &str) -> Result<Self> {
        match level {
            "private" => Ok(AccessLevel::Private),
            "protected" => Ok(AccessLevel::Protected),
            "public" => Ok(AccessLevel::Public),
            other => Err(Error::invalid_access_level(other, ALLOWED_ACCESS_LEVELS)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::Protected => "protected",
            AccessLevel::Public => "public",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One inferred property of a synthesized class
///
/// Serialized field names are the contract with the templating layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Property name, sanitized (`$` and `-` removed)
    pub name: String,

    /// Access level, assigned from the configured default
    pub access_level: AccessLevel,

    /// Raw detected shape of the value
    pub kind: PrimitiveKind,

    /// True when the value was an object
    pub is_custom_type: bool,

    /// Type label used at reference sites: a mapped primitive name, or the
    /// referenced class's qualified name for object values
    pub param_type: String,

    /// Serialization-safe default: `"[]"` for arrays, escaped string for
    /// strings, raw literal for numbers and bools, null otherwise
    pub literal_value: Value,

    /// Qualified name of the synthesized element class, set only when the
    /// value was a non-empty array whose first element is an object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_element_class_key: Option<String>,

    /// Namespace of the declaring class (not necessarily the referenced type's)
    pub namespace: String,
}

/// The inferred structural record for one synthesized class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDescriptor {
    /// Unique lookup key within one inference run; may carry a collision
    /// suffix (`Foo_1`) and then differs from `name`
    pub key: String,

    /// Simple class name
    pub name: String,

    /// Synthesized namespace prefix, backslash-delimited
    #[serde(rename = "classNamespace")]
    pub namespace: String,

    /// Properties in source-document field order
    pub properties: Vec<PropertyDescriptor>,
}

impl ClassDescriptor {
    /// Namespace-qualified name, or the bare name when the namespace is empty
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}\\{}", self.namespace, self.name)
        }
    }
}

/// Ordered collection of class descriptors produced by one inference run
///
/// Iteration order is creation order; keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassModel {
    classes: Vec<ClassDescriptor>,
}

impl ClassModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor; the caller guarantees key uniqueness
    pub fn insert(&mut self, descriptor: ClassDescriptor) {
        debug_assert!(!self.contains_key(&descriptor.key));
        self.classes.push(descriptor);
    }

    /// Look up a descriptor by key
    pub fn get(&self, key: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.key == key)
    }

    /// Check whether a key is already taken
    pub fn contains_key(&self, key: &str) -> bool {
        self.classes.iter().any(|c| c.key == key)
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the model holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate descriptors in creation order
    pub fn iter(&self) -> std::slice::Iter<'_, ClassDescriptor> {
        self.classes.iter()
    }

    /// Iterate descriptor keys in creation order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.key.as_str())
    }

    /// Serialize the model as pretty JSON
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a ClassModel {
    type Item = &'a ClassDescriptor;
    type IntoIter = std::slice::Iter<'a, ClassDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
