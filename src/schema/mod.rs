//! Schema inference module
//!
//! Derives a normalized, acyclic, multi-class type model from a single JSON
//! document: one descriptor per object shape, child namespaces for nested
//! types, array-of-object flattening, and collision-suffixed class keys.

mod allocator;
mod inference;
mod types;

pub use allocator::NameAllocator;
pub use inference::{
    parse_document, validate_class_name, validate_namespace, SchemaInferencer,
};
pub use types::{
    AccessLevel, ClassDescriptor, ClassModel, PropertyDescriptor, ALLOWED_ACCESS_LEVELS,
};

#[cfg(test)]
mod tests;
