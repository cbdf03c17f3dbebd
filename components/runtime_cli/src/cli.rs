//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use class_loader::{ConfigError, LoaderConfig};
use core_types::ImportsTable;

/// Load classes and inspect bytecode artifacts
#[derive(Debug, Parser)]
#[command(name = "zs-runtime", version, about = "Class loader and object runtime")]
pub struct Cli {
    /// Class path root, overriding the config file
    #[arg(long, global = true)]
    pub classpath: Option<PathBuf>,

    /// Config file (defaults to ./zs-runtime.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Compiler program for source-only classes, overriding the config file
    #[arg(long, global = true)]
    pub compiler: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a class and print its descriptor
    Load {
        /// Class name, resolved through --import aliases
        class: String,

        /// Import alias as ALIAS=QUALIFIED.NAME
        #[arg(long = "import", value_name = "ALIAS=FQCN", value_parser = parse_import)]
        imports: Vec<(String, String)>,
    },

    /// Construct an instance of a class and print it
    New {
        /// Class name, resolved through --import aliases
        class: String,

        /// Import alias as ALIAS=QUALIFIED.NAME
        #[arg(long = "import", value_name = "ALIAS=FQCN", value_parser = parse_import)]
        imports: Vec<(String, String)>,
    },

    /// Decode a symbol table file and print its slots
    Symbols {
        /// File holding an encoded symbol table
        file: PathBuf,
    },
}

impl Cli {
    /// Loader configuration: the config file with command-line overrides applied.
    pub fn loader_config(&self) -> Result<LoaderConfig, ConfigError> {
        let mut config = LoaderConfig::load_or_default(self.config.as_deref())?;
        if let Some(class_path) = &self.classpath {
            config.class_path = class_path.clone();
        }
        if let Some(compiler) = &self.compiler {
            config.compiler = Some(compiler.clone());
        }
        Ok(config)
    }
}

/// Build an imports table from parsed `--import` pairs, `None` when empty.
pub fn imports_table(imports: &[(String, String)]) -> Option<ImportsTable> {
    if imports.is_empty() {
        return None;
    }
    Some(imports.iter().cloned().collect())
}

fn parse_import(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((alias, name)) if !alias.is_empty() && !name.is_empty() => {
            Ok((alias.to_string(), name.to_string()))
        }
        _ => Err(format!("expected ALIAS=QUALIFIED.NAME, got '{}'", s)),
    }
}
