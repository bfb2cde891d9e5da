//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Typesmith: JSON to class source generator
#[derive(Parser, Debug)]
#[command(name = "typesmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generator configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate class sources (and tests) from a JSON document
    Generate {
        /// JSON file to infer classes from
        json_file: PathBuf,

        /// Name for the root class
        class_name: String,

        /// Directory to save generated files into
        output: PathBuf,

        /// Root namespace for generated classes
        #[arg(short, long)]
        namespace: Option<String>,

        /// Separate directory for generated unit-test files
        #[arg(short = 'u', long)]
        test_output: Option<PathBuf>,

        /// Default access level for properties (private, protected, public)
        #[arg(short, long)]
        access_level: Option<String>,

        /// How many levels of nested objects to descend into
        #[arg(short, long)]
        recursion_limit: Option<usize>,

        /// Prefix for synthesized child namespaces
        #[arg(long)]
        namespace_prefix: Option<String>,

        /// File extension for generated files
        #[arg(short, long)]
        extension: Option<String>,

        /// Custom class template file (handlebars)
        #[arg(long)]
        class_template: Option<PathBuf>,

        /// Custom unit-test template file (handlebars)
        #[arg(long)]
        test_template: Option<PathBuf>,

        /// JSON dictionary of old-name to new-name pairs applied before rendering
        #[arg(long)]
        remap: Option<PathBuf>,

        /// Skip unit-test generation
        #[arg(long)]
        no_tests: bool,
    },

    /// Print the inferred class model as JSON without writing files
    Inspect {
        /// JSON file to infer classes from
        json_file: PathBuf,

        /// Name for the root class
        class_name: String,

        /// Root namespace for generated classes
        #[arg(short, long)]
        namespace: Option<String>,

        /// How many levels of nested objects to descend into
        #[arg(short, long)]
        recursion_limit: Option<usize>,

        /// Prefix for synthesized child namespaces
        #[arg(long)]
        namespace_prefix: Option<String>,
    },
}
