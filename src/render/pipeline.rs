//! Render pipeline
//!
//! Turns each class descriptor into rendered source text: build the
//! render-data record, optionally pass it through the remap filter and a
//! pre-render hook, then hand it to the template renderer.

use super::renderer::{TemplateRenderer, CLASS_TEMPLATE, TEST_TEMPLATE};
use crate::error::Result;
use crate::remap::RemapFilter;
use crate::schema::{ClassDescriptor, ClassModel};
use serde_json::{json, Value};
use tracing::debug;

/// Which output a pre-render hook is transforming data for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// The class source body
    Class,
    /// The unit-test source body
    Test,
}

/// Pre-render data transformation hook
///
/// Called once per class body and once more for the test body; the target
/// says which one.
pub trait RenderHook {
    /// Transform the render-data record for one class
    fn transform(&self, class_key: &str, data: Value, target: RenderTarget) -> Value;
}

/// Rendered output for one class
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedClass {
    /// Descriptor key the output was rendered from
    pub key: String,
    /// Final class name (after any remapping)
    pub name: String,
    /// Final namespace (after any remapping)
    pub namespace: String,
    /// Rendered class source
    pub source: String,
    /// Rendered test source, when a test template is configured
    pub test_source: Option<String>,
}

/// Renders a class model through a template renderer
pub struct RenderPipeline<R> {
    renderer: R,
    remap: Option<RemapFilter>,
    hook: Option<Box<dyn RenderHook>>,
    generate_tests: bool,
}

impl<R: TemplateRenderer> RenderPipeline<R> {
    /// Create a pipeline over a renderer
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            remap: None,
            hook: None,
            generate_tests: true,
        }
    }

    /// Install a remap filter applied to every descriptor before rendering
    #[must_use]
    pub fn with_remap(mut self, remap: RemapFilter) -> Self {
        self.remap = Some(remap);
        self
    }

    /// Install a pre-render hook
    #[must_use]
    pub fn with_hook(mut self, hook: Box<dyn RenderHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Turn unit-test generation on or off
    #[must_use]
    pub fn with_tests(mut self, enabled: bool) -> Self {
        self.generate_tests = enabled;
        self
    }

    /// Render every class in the model, in model order
    pub fn render_model(&self, model: &ClassModel) -> Result<Vec<RenderedClass>> {
        model.iter().map(|d| self.render_class(d)).collect()
    }

    /// Render one class (and its test, when a test template is registered)
    pub fn render_class(&self, descriptor: &ClassDescriptor) -> Result<RenderedClass> {
        let descriptor = match &self.remap {
            Some(filter) => filter.remap(&descriptor.key, descriptor),
            None => descriptor.clone(),
        };

        let source = self.render_target(&descriptor, RenderTarget::Class)?;

        // No test template configured means no test output, not an error.
        let test_source = if self.generate_tests && self.renderer.has_template(TEST_TEMPLATE) {
            Some(self.render_target(&descriptor, RenderTarget::Test)?)
        } else {
            None
        };

        debug!(key = %descriptor.key, class = %descriptor.name, test = test_source.is_some(), "class rendered");

        Ok(RenderedClass {
            key: descriptor.key.clone(),
            name: descriptor.name.clone(),
            namespace: descriptor.namespace.clone(),
            source,
            test_source,
        })
    }

    fn render_target(&self, descriptor: &ClassDescriptor, target: RenderTarget) -> Result<String> {
        let mut data = class_data(descriptor);
        if let Some(hook) = &self.hook {
            data = hook.transform(&descriptor.key, data, target);
        }
        let template_id = match target {
            RenderTarget::Class => CLASS_TEMPLATE,
            RenderTarget::Test => TEST_TEMPLATE,
        };
        self.renderer.render(template_id, &data)
    }
}

/// Build the render-data record handed to templates
fn class_data(descriptor: &ClassDescriptor) -> Value {
    json!({
        "name": descriptor.name,
        "classNamespace": descriptor.namespace,
        "fullName": descriptor.full_name(),
        "properties": descriptor.properties,
    })
}
