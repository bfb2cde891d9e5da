//! Descriptor renaming module
//!
//! Optional post-processing pass that renames class names, namespaces, and
//! properties through a flat dictionary without touching inference.

mod filter;

pub use filter::RemapFilter;
