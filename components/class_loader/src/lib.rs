//! Class loading for the object runtime
//!
//! This crate turns class names into cached type descriptors:
//! - [`resolve_class_name`] - import alias resolution
//! - [`ClassLoader`] - compiled artifact lookup with a source fallback
//! - [`Compiler`] / [`CommandCompiler`] - the source compiler seam
//! - [`TypeRegistry`] - the load-once cache that runs static constructors
//! - [`LoaderConfig`] - class path and artifact settings
//!
//! # Example
//!
//! ```no_run
//! use class_loader::{ClassLoader, LoaderConfig, TypeRegistry};
//! use interpreter::NullInterpreter;
//!
//! let loader = ClassLoader::new(LoaderConfig::with_class_path("classes"));
//! let registry = TypeRegistry::new(loader);
//!
//! let info = registry
//!     .get_or_load("app.Main", None, &mut NullInterpreter::new())
//!     .unwrap();
//! println!("{} is {} bytes", info.class_name(), info.bytecode_size());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod config;
pub mod imports;
pub mod loader;
pub mod registry;

pub use compiler::{CommandCompiler, Compiler};
pub use config::{ConfigError, LoaderConfig, DEFAULT_CONFIG_FILE};
pub use imports::resolve_class_name;
pub use loader::{ArtifactKind, ClassArtifact, ClassLoader};
pub use registry::TypeRegistry;
