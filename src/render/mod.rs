//! Template rendering module
//!
//! The renderer seam is opaque: the pipeline hands each class's data record
//! to `render(template_id, data)` and collects source strings. A
//! handlebars-backed implementation with built-in templates is provided.

mod pipeline;
mod renderer;

pub use pipeline::{RenderHook, RenderPipeline, RenderTarget, RenderedClass};
pub use renderer::{HandlebarsRenderer, TemplateRenderer, CLASS_TEMPLATE, TEST_TEMPLATE};
