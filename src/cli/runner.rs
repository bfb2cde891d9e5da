//! CLI command dispatch

use super::commands::{Cli, Commands};
use crate::config::GeneratorConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Generate {
                json_file,
                class_name,
                output,
                namespace,
                test_output,
                access_level,
                recursion_limit,
                namespace_prefix,
                extension,
                class_template,
                test_template,
                remap,
                no_tests,
            } => {
                let mut config = config;
                if let Some(namespace) = namespace {
                    config.namespace = namespace.clone();
                }
                if let Some(level) = access_level {
                    config.access_level = level.clone();
                }
                if let Some(limit) = recursion_limit {
                    config.recursion_limit = *limit;
                }
                if let Some(prefix) = namespace_prefix {
                    config.namespace_prefix = prefix.clone();
                }
                if let Some(extension) = extension {
                    config.extension = extension.clone();
                }
                if let Some(path) = class_template {
                    config.class_template = Some(path.clone());
                }
                if let Some(path) = test_template {
                    config.test_template = Some(path.clone());
                }
                if let Some(path) = remap {
                    config.remap_file = Some(path.clone());
                }
                if let Some(dir) = test_output {
                    config.test_output_dir = Some(dir.clone());
                }
                if *no_tests {
                    config.generate_tests = false;
                }

                self.generate(&config, json_file, class_name, output)
            }

            Commands::Inspect {
                json_file,
                class_name,
                namespace,
                recursion_limit,
                namespace_prefix,
            } => {
                let mut config = config;
                if let Some(namespace) = namespace {
                    config.namespace = namespace.clone();
                }
                if let Some(limit) = recursion_limit {
                    config.recursion_limit = *limit;
                }
                if let Some(prefix) = namespace_prefix {
                    config.namespace_prefix = prefix.clone();
                }

                self.inspect(&config, json_file, class_name)
            }
        }
    }

    fn load_config(&self) -> Result<GeneratorConfig> {
        match &self.cli.config {
            Some(path) => GeneratorConfig::from_yaml_file(path),
            None => Ok(GeneratorConfig::default()),
        }
    }

    fn generate(
        &self,
        config: &GeneratorConfig,
        json_file: &Path,
        class_name: &str,
        output: &Path,
    ) -> Result<()> {
        let json = fs::read_to_string(json_file)?;
        let converter = config.build_converter()?;

        let rendered = converter.generate(&json, class_name, &config.namespace)?;
        info!(classes = rendered.len(), "model rendered");

        let written = converter.save(&rendered, output, config.test_output_dir.as_deref())?;
        for path in &written {
            println!("{}", path.display());
        }
        println!("Done: {} file(s) written", written.len());

        Ok(())
    }

    fn inspect(
        &self,
        config: &GeneratorConfig,
        json_file: &Path,
        class_name: &str,
    ) -> Result<()> {
        let json = fs::read_to_string(json_file)?;
        let converter = config.build_converter()?;

        let model = converter.infer_model(&json, class_name, &config.namespace)?;
        println!("{}", model.to_json_pretty());

        Ok(())
    }
}
