//! Post-inference rename pass
//!
//! Rewrites class names, namespaces, and property names/types through a flat
//! user-supplied dictionary, consistently at declarations and every
//! reference site.

use crate::error::Result;
use crate::schema::{ClassDescriptor, ClassModel};
use std::collections::HashMap;

/// Namespace separator used in qualified type references
const NS_SEPARATOR: char = '\\';

/// Rename filter over inferred descriptors
///
/// One dictionary addresses three things at once:
/// classes by their key (`Location_1`), properties by a composite key
/// (`Location_1::$first_name`), and namespaces by their literal value.
/// Entries that match nothing are ignored; descriptors whose parts are all
/// absent pass through unchanged. Applying the filter is pure and idempotent
/// as long as the mapped values are not themselves dictionary keys.
#[derive(Debug, Clone, Default)]
pub struct RemapFilter {
    map: HashMap<String, String>,
}

impl RemapFilter {
    /// Create a filter from a name dictionary
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    /// Load a filter from a JSON object of old-name to new-name pairs
    pub fn from_json(input: &str) -> Result<Self> {
        let map: HashMap<String, String> = serde_json::from_str(input)?;
        Ok(Self::new(map))
    }

    /// Whether the dictionary holds no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rewrite one descriptor, leaving the input untouched
    ///
    /// `class_key` is the descriptor's lookup key, which is the dictionary's
    /// addressing scheme for the class and its properties (the key carries
    /// the collision suffix; the display name may not).
    pub fn remap(&self, class_key: &str, descriptor: &ClassDescriptor) -> ClassDescriptor {
        let mut out = descriptor.clone();

        if let Some(renamed) = self.map.get(class_key) {
            out.name = renamed.clone();
        }
        out.namespace = self.mapped(&out.namespace);

        for property in &mut out.properties {
            let composite = format!("{class_key}::${}", property.name);
            if let Some(renamed) = self.map.get(&composite) {
                property.name = renamed.clone();
            }

            if property.is_custom_type {
                property.param_type = self.remap_reference(&property.param_type);
            }
            if let Some(reference) = &property.array_element_class_key {
                property.array_element_class_key = Some(self.remap_reference(reference));
            }

            property.namespace = self.mapped(&property.namespace);
        }

        out
    }

    /// Rewrite every descriptor in a model
    pub fn remap_model(&self, model: &ClassModel) -> ClassModel {
        let mut out = ClassModel::new();
        for descriptor in model {
            out.insert(self.remap(&descriptor.key, descriptor));
        }
        out
    }

    /// Look a name up, passing it through unchanged when absent
    fn mapped(&self, name: &str) -> String {
        self.map.get(name).cloned().unwrap_or_else(|| name.to_string())
    }

    /// Rewrite a qualified type reference
    ///
    /// The namespace half and the simple-name half are remapped
    /// independently, so a referenced type can be renamed without renaming
    /// the namespace it was declared in, and vice versa.
    fn remap_reference(&self, reference: &str) -> String {
        match reference.rsplit_once(NS_SEPARATOR) {
            Some((namespace, simple)) => {
                format!("{}{}{}", self.mapped(namespace), NS_SEPARATOR, self.mapped(simple))
            }
            None => self.mapped(reference),
        }
    }
}
