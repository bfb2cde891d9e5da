//! Class model inference from JSON documents
//!
//! Walks a parsed JSON object depth-first and derives one [`ClassDescriptor`]
//! per encountered object shape. Nested objects and arrays of objects get
//! their own classes under a synthesized child namespace; name collisions
//! across the run are resolved by the [`NameAllocator`].

use super::allocator::NameAllocator;
use super::types::{AccessLevel, ClassDescriptor, ClassModel, PropertyDescriptor};
use crate::classify::{self, PrimitiveKind};
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::debug;

/// Grammar for a usable class name
static CLASS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Grammar for a usable namespace (backslash-delimited segments)
static NAMESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9\\]*[A-Za-z]?$").unwrap());

/// Check a class name against the identifier grammar
pub fn validate_class_name(name: &str) -> Result<()> {
    if CLASS_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(Error::invalid_class_name(name))
    }
}

/// Check a namespace against the identifier grammar; empty is allowed
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() || NAMESPACE_REGEX.is_match(namespace) {
        Ok(())
    } else {
        Err(Error::invalid_namespace(namespace))
    }
}

/// Decode a JSON document into the root object to infer from
///
/// Accepts a JSON object, or a JSON array whose first element is an object
/// (only that element is used). Anything else is a decode failure.
pub fn parse_document(input: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(input).map_err(|_| Error::bad_json(input))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Array(items) => match items.into_iter().next() {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(Error::bad_json(input)),
        },
        _ => Err(Error::bad_json(input)),
    }
}

/// Schema inferencer with configuration options
#[derive(Debug, Clone)]
pub struct SchemaInferencer {
    /// Access level stamped on every inferred property
    access_level: AccessLevel,
    /// Prefix inserted before a class name when synthesizing child namespaces
    namespace_prefix: String,
    /// How many levels of nested objects to descend into
    recursion_limit: usize,
}

impl Default for SchemaInferencer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferencer {
    /// Create an inferencer with default settings
    pub fn new() -> Self {
        Self {
            access_level: AccessLevel::default(),
            namespace_prefix: "N".to_string(),
            recursion_limit: 3,
        }
    }

    /// Set the default access level for inferred properties
    #[must_use]
    pub fn with_access_level(mut self, level: AccessLevel) -> Self {
        self.access_level = level;
        self
    }

    /// Set the access level from its string form, validated against the allow-list
    pub fn with_access_level_str(self, level: &str) -> Result<Self> {
        Ok(self.with_access_level(AccessLevel::parse(level)?))
    }

    /// Set the prefix added to synthesized child namespaces
    #[must_use]
    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    /// Set how many levels deep to descend into nested objects
    #[must_use]
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Infer the class model for a root object
    ///
    /// `class_name` must match `^[A-Za-z][A-Za-z0-9_]*$`; `namespace` is
    /// empty or a backslash-delimited identifier. Fields nested at or beyond
    /// the recursion limit are dropped silently.
    pub fn infer(
        &self,
        root: &Map<String, Value>,
        class_name: &str,
        namespace: &str,
    ) -> Result<ClassModel> {
        validate_class_name(class_name)?;
        validate_namespace(namespace)?;

        let mut model = ClassModel::new();
        let mut allocator = NameAllocator::new();
        self.parse_object(
            root,
            class_name,
            namespace,
            0,
            &mut model,
            &mut allocator,
        );

        Ok(model)
    }

    /// Walk one object's fields, appending descriptors for it and anything nested
    ///
    /// Returns the allocated key when the object contributed a class. The
    /// depth check happens before descending, so an object sitting exactly at
    /// the limit loses all of its fields.
    fn parse_object(
        &self,
        fields: &Map<String, Value>,
        class_name: &str,
        namespace: &str,
        depth: usize,
        model: &mut ClassModel,
        allocator: &mut NameAllocator,
    ) -> Option<String> {
        if depth >= self.recursion_limit {
            debug!(class = class_name, depth, "recursion limit reached, dropping fields");
            return None;
        }

        // Unique namespace for anything nested one level deeper; keeps
        // same-named classes from colliding across branches.
        let child_namespace = format!("{}\\{}{}", namespace, self.namespace_prefix, class_name);

        let mut properties = Vec::with_capacity(fields.len());

        for (field, value) in fields {
            let mut property = self.parse_property(field, value, namespace, &child_namespace);

            // Array of objects: only the first element is sampled.
            let nested = if property.array_element_class_key.is_some() {
                value.as_array().and_then(|a| a.first()).and_then(Value::as_object)
            } else {
                value.as_object()
            };

            if let Some(object) = nested {
                if !object.is_empty() {
                    let nested_name = capitalize(field);
                    let nested_key = self.parse_object(
                        object,
                        &nested_name,
                        &child_namespace,
                        depth + 1,
                        model,
                        allocator,
                    );

                    // Point the reference at the key the nested class actually
                    // got, so it stays resolvable after collision suffixing.
                    if let Some(key) = nested_key {
                        let qualified = qualify(&child_namespace, &key);
                        if property.array_element_class_key.is_some() {
                            property.array_element_class_key = Some(qualified);
                        } else {
                            property.param_type = qualified;
                        }
                    }
                }
            }

            properties.push(property);
        }

        if properties.is_empty() {
            return None;
        }

        let key = allocator.allocate(class_name);
        debug!(
            key = %key,
            namespace = %namespace,
            depth,
            properties = properties.len(),
            "class inferred"
        );
        model.insert(ClassDescriptor {
            key: key.clone(),
            name: class_name.to_string(),
            namespace: namespace.to_string(),
            properties,
        });

        Some(key)
    }

    /// Build the property descriptor for one field
    fn parse_property(
        &self,
        field: &str,
        value: &Value,
        namespace: &str,
        child_namespace: &str,
    ) -> PropertyDescriptor {
        let kind = classify::classify(value);
        let is_custom_type = kind == PrimitiveKind::Object;

        let param_type = if is_custom_type {
            qualify(child_namespace, &capitalize(field))
        } else {
            kind.param_type().to_string()
        };

        let array_element_class_key = match value {
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                Some(qualify(child_namespace, &capitalize(field)))
            }
            _ => None,
        };

        PropertyDescriptor {
            name: sanitize_name(field),
            access_level: self.access_level,
            kind,
            is_custom_type,
            param_type,
            literal_value: classify::literal(value),
            array_element_class_key,
            namespace: namespace.to_string(),
        }
    }
}

/// Uppercase the first character of a field name
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip characters that are not usable in a generated property name
fn sanitize_name(name: &str) -> String {
    name.replace(['$', '-'], "")
}

/// Join a namespace and simple name, or return the bare name for an empty namespace
fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}\\{name}")
    }
}
