//! Handlebars-backed template renderer

use crate::error::Result;
use handlebars::Handlebars;
use serde_json::Value;
use std::path::Path;

/// Template id for class source
pub const CLASS_TEMPLATE: &str = "class";

/// Template id for unit-test source
pub const TEST_TEMPLATE: &str = "test";

/// Opaque template engine seam
///
/// The pipeline only knows `render(template_id, data) -> source`; which
/// engine sits behind it is the caller's business.
pub trait TemplateRenderer {
    /// Render the template registered under `template_id` with the class data
    fn render(&self, template_id: &str, data: &Value) -> Result<String>;

    /// Whether a template is registered under `template_id`
    fn has_template(&self, template_id: &str) -> bool;
}

/// Built-in default template for class source
const DEFAULT_CLASS_TEMPLATE: &str = "\
<?php
{{#if classNamespace}}namespace {{classNamespace}};

{{/if}}class {{name}}
{
{{#each properties}}    {{accessLevel}} ${{name}};
{{/each}}}
";

/// Built-in default template for unit-test source
const DEFAULT_TEST_TEMPLATE: &str = "\
<?php
{{#if classNamespace}}namespace {{classNamespace}};

{{/if}}class {{name}}Test extends \\PHPUnit\\Framework\\TestCase
{
    public function testCanBeConstructed()
    {
        $subject = new {{name}}();
        $this->assertInstanceOf('{{fullName}}', $subject);
    }
}
";

/// Template renderer backed by handlebars
///
/// Ships with built-in `class` and `test` templates; user template files
/// override them per id.
#[derive(Debug)]
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        let mut handlebars = Handlebars::new();
        // Generated output is source code, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);

        // Built-in templates are static and known-good.
        handlebars
            .register_template_string(CLASS_TEMPLATE, DEFAULT_CLASS_TEMPLATE)
            .expect("built-in class template must parse");
        handlebars
            .register_template_string(TEST_TEMPLATE, DEFAULT_TEST_TEMPLATE)
            .expect("built-in test template must parse");

        Self { handlebars }
    }
}

impl HandlebarsRenderer {
    /// Create a renderer with the built-in templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with no templates registered at all
    pub fn bare() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Register a template string under an id, replacing any previous one
    pub fn with_template_str(mut self, template_id: &str, template: &str) -> Result<Self> {
        self.handlebars
            .register_template_string(template_id, template)?;
        Ok(self)
    }

    /// Register a template loaded from a file, replacing any previous one
    pub fn with_template_file(mut self, template_id: &str, path: impl AsRef<Path>) -> Result<Self> {
        self.handlebars
            .register_template_file(template_id, path.as_ref())?;
        Ok(self)
    }

    /// Drop a registered template
    pub fn without_template(mut self, template_id: &str) -> Self {
        self.handlebars.unregister_template(template_id);
        self
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template_id: &str, data: &Value) -> Result<String> {
        Ok(self.handlebars.render(template_id, data)?)
    }

    fn has_template(&self, template_id: &str) -> bool {
        self.handlebars.get_templates().contains_key(template_id)
    }
}
