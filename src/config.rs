//! Generator configuration
//!
//! Options for a conversion run, loadable from a YAML file. CLI flags
//! override file values field by field.

use crate::converter::Converter;
use crate::error::Result;
use crate::remap::RemapFilter;
use crate::render::{HandlebarsRenderer, CLASS_TEMPLATE, TEST_TEMPLATE};
use crate::schema::SchemaInferencer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root namespace for generated classes
    #[serde(default)]
    pub namespace: String,

    /// Prefix for synthesized child namespaces
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,

    /// How many levels of nested objects to descend into
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,

    /// Default access level for generated properties
    #[serde(default = "default_access_level")]
    pub access_level: String,

    /// File extension for generated sources
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether to generate unit-test files
    #[serde(default = "default_generate_tests")]
    pub generate_tests: bool,

    /// Custom class template file (overrides the built-in)
    #[serde(default)]
    pub class_template: Option<PathBuf>,

    /// Custom unit-test template file (overrides the built-in)
    #[serde(default)]
    pub test_template: Option<PathBuf>,

    /// JSON dictionary of old-name to new-name pairs
    #[serde(default)]
    pub remap_file: Option<PathBuf>,

    /// Separate root for generated unit-test files
    #[serde(default)]
    pub test_output_dir: Option<PathBuf>,
}

fn default_namespace_prefix() -> String {
    "N".to_string()
}

fn default_recursion_limit() -> usize {
    20
}

fn default_access_level() -> String {
    "private".to_string()
}

fn default_extension() -> String {
    "php".to_string()
}

fn default_generate_tests() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            namespace_prefix: default_namespace_prefix(),
            recursion_limit: default_recursion_limit(),
            access_level: default_access_level(),
            extension: default_extension(),
            generate_tests: default_generate_tests(),
            class_template: None,
            test_template: None,
            remap_file: None,
            test_output_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Assemble a converter from this configuration
    pub fn build_converter(&self) -> Result<Converter> {
        let inferencer = SchemaInferencer::new()
            .with_access_level_str(&self.access_level)?
            .with_namespace_prefix(self.namespace_prefix.as_str())
            .with_recursion_limit(self.recursion_limit);

        let mut renderer = HandlebarsRenderer::new();
        if let Some(path) = &self.class_template {
            renderer = renderer.with_template_file(CLASS_TEMPLATE, path)?;
        }
        if let Some(path) = &self.test_template {
            renderer = renderer.with_template_file(TEST_TEMPLATE, path)?;
        }

        let mut converter = Converter::with_renderer(renderer)
            .with_inferencer(inferencer)
            .with_tests(self.generate_tests)
            .with_extension(self.extension.as_str());

        if let Some(path) = &self.remap_file {
            let dictionary = fs::read_to_string(path)?;
            converter = converter.with_remap(RemapFilter::from_json(&dictionary)?);
        }

        Ok(converter)
    }
}
