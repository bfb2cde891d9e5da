//! End-to-end conversion facade
//!
//! Ties the pieces together: decode the document, infer the class model,
//! render it (optionally remapped), and save the sources.

use crate::error::Result;
use crate::output::Emitter;
use crate::remap::RemapFilter;
use crate::render::{HandlebarsRenderer, RenderHook, RenderPipeline, RenderedClass, TemplateRenderer};
use crate::schema::{parse_document, ClassModel, SchemaInferencer};
use std::path::{Path, PathBuf};

/// JSON-to-source converter
pub struct Converter<R = HandlebarsRenderer> {
    inferencer: SchemaInferencer,
    pipeline: RenderPipeline<R>,
    emitter: Emitter,
}

impl Default for Converter<HandlebarsRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<HandlebarsRenderer> {
    /// Create a converter with the built-in handlebars renderer
    pub fn new() -> Self {
        Self::with_renderer(HandlebarsRenderer::new())
    }
}

impl<R: TemplateRenderer> Converter<R> {
    /// Create a converter over a custom template renderer
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            inferencer: SchemaInferencer::new(),
            pipeline: RenderPipeline::new(renderer),
            emitter: Emitter::new(),
        }
    }

    /// Replace the configured inferencer
    #[must_use]
    pub fn with_inferencer(mut self, inferencer: SchemaInferencer) -> Self {
        self.inferencer = inferencer;
        self
    }

    /// Install a remap filter applied before rendering
    #[must_use]
    pub fn with_remap(mut self, remap: RemapFilter) -> Self {
        self.pipeline = self.pipeline.with_remap(remap);
        self
    }

    /// Install a pre-render hook
    #[must_use]
    pub fn with_hook(mut self, hook: Box<dyn RenderHook>) -> Self {
        self.pipeline = self.pipeline.with_hook(hook);
        self
    }

    /// Turn unit-test generation on or off
    #[must_use]
    pub fn with_tests(mut self, enabled: bool) -> Self {
        self.pipeline = self.pipeline.with_tests(enabled);
        self
    }

    /// Set the file extension for generated files
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.emitter = self.emitter.with_extension(extension);
        self
    }

    /// Infer the class model for a JSON document
    pub fn infer_model(&self, json: &str, class_name: &str, namespace: &str) -> Result<ClassModel> {
        let root = parse_document(json)?;
        self.inferencer.infer(&root, class_name, namespace)
    }

    /// Infer and render every class for a JSON document
    pub fn generate(
        &self,
        json: &str,
        class_name: &str,
        namespace: &str,
    ) -> Result<Vec<RenderedClass>> {
        let model = self.infer_model(json, class_name, namespace)?;
        self.pipeline.render_model(&model)
    }

    /// Save rendered sources under an output directory
    pub fn save(
        &self,
        rendered: &[RenderedClass],
        out_dir: impl AsRef<Path>,
        test_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        self.emitter.save(rendered, out_dir, test_dir)
    }
}
