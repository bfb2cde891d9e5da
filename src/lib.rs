//! # Typesmith
//!
//! Infers a set of class definitions (name, namespace, properties, types)
//! from an arbitrary JSON document, then renders those definitions through
//! templates into source code and matching unit-test files.
//!
//! ## Quick Start
//!
//! ```rust
//! use typesmith::{Converter, Result};
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new();
//!     let rendered = converter.generate(r#"{"id": 1, "name": "Ada"}"#, "User", "App")?;
//!     assert_eq!(rendered[0].name, "User");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! JSON text ─▶ parse_document ─▶ SchemaInferencer ─▶ ClassModel
//!                                                       │
//!                               RemapFilter (optional) ◀┘
//!                                                       │
//!                         RenderPipeline ─▶ RenderedClass[] ─▶ Emitter
//! ```
//!
//! Inference walks the document depth-first: each object shape becomes a
//! [`schema::ClassDescriptor`] under a synthesized child namespace, arrays
//! of objects are flattened through their first element, and class-name
//! collisions get `_1`, `_2`, ... suffixes.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Raw JSON value classification
pub mod classify;

/// Class model inference
pub mod schema;

/// Descriptor renaming
pub mod remap;

/// Template rendering
pub mod render;

/// Source file persistence
pub mod output;

/// End-to-end conversion facade
pub mod converter;

/// Generator configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GeneratorConfig;
pub use converter::Converter;
pub use error::{Error, Result};
pub use remap::RemapFilter;
pub use schema::{ClassModel, SchemaInferencer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
