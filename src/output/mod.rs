//! Output module
//!
//! The I/O boundary: persists rendered sources into a namespace-mirroring
//! directory tree.

mod emitter;

pub use emitter::Emitter;
