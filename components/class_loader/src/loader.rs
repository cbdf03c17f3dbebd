//! Class path lookup.
//!
//! A class is found by trying `<class_path>/<name>.<compiled-ext>` first and
//! reading it verbatim. When that file is missing and dynamic compilation is
//! built in, `<class_path>/<name>.<source-ext>` is handed to the compiler.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use core_types::{RuntimeError, RuntimeResult};

use crate::compiler::{CommandCompiler, Compiler};
use crate::config::LoaderConfig;

/// Which artifact a class was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Precompiled bytecode read from disk
    Compiled,
    /// Source compiled on demand
    Source,
}

/// Bytecode produced for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassArtifact {
    /// The bytecode
    pub bytecode: Vec<u8>,
    /// Artifact the bytecode came from
    pub kind: ArtifactKind,
    /// Path of that artifact
    pub path: PathBuf,
}

impl ClassArtifact {
    /// Size of the bytecode in bytes.
    pub fn size(&self) -> usize {
        self.bytecode.len()
    }
}

/// Resolves class names to bytecode.
pub struct ClassLoader {
    config: LoaderConfig,
    compiler: Option<Box<dyn Compiler>>,
}

impl ClassLoader {
    /// Loader with no compiler attached.
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            compiler: None,
        }
    }

    /// Loader using the compiler program named in `config`, if any.
    pub fn from_config(config: LoaderConfig) -> Self {
        let compiler = config.compiler.as_ref().map(|program| {
            Box::new(CommandCompiler::new(program).with_args(config.compiler_args.iter().cloned()))
                as Box<dyn Compiler>
        });
        Self { config, compiler }
    }

    /// Attach a compiler for source-only classes.
    pub fn with_compiler(mut self, compiler: impl Compiler + 'static) -> Self {
        self.compiler = Some(Box::new(compiler));
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// True when a compiler is attached.
    pub fn has_compiler(&self) -> bool {
        self.compiler.is_some()
    }

    /// Produce the bytecode for `class_name`.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::ClassNotFound`] if no usable artifact exists
    /// - [`RuntimeError::CompileFailure`] if the source could not be compiled
    /// - [`RuntimeError::Io`] if the compiled artifact exists but is unreadable
    pub fn load(&self, class_name: &str) -> RuntimeResult<ClassArtifact> {
        let path = self.config.compiled_path(class_name);
        match std::fs::read(&path) {
            Ok(bytecode) => {
                tracing::debug!(class = class_name, path = ?path, size = bytecode.len(), "read compiled class");
                Ok(ClassArtifact {
                    bytecode,
                    kind: ArtifactKind::Compiled,
                    path,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => self.load_source(class_name),
            Err(source) => Err(RuntimeError::Io { path, source }),
        }
    }

    #[cfg(feature = "dynamic-compilation")]
    fn load_source(&self, class_name: &str) -> RuntimeResult<ClassArtifact> {
        let path = self.config.source_path(class_name);
        if !path.is_file() {
            return Err(RuntimeError::ClassNotFound {
                name: class_name.to_string(),
            });
        }

        let compiler = self
            .compiler
            .as_ref()
            .ok_or_else(|| RuntimeError::CompileFailure {
                name: class_name.to_string(),
                cause: "no compiler configured".to_string(),
            })?;

        let bytecode = compiler.compile(&path).map_err(|cause| {
            tracing::warn!(class = class_name, path = ?path, %cause, "compilation failed");
            RuntimeError::CompileFailure {
                name: class_name.to_string(),
                cause,
            }
        })?;

        tracing::debug!(class = class_name, path = ?path, size = bytecode.len(), "compiled class from source");
        Ok(ClassArtifact {
            bytecode,
            kind: ArtifactKind::Source,
            path,
        })
    }

    #[cfg(not(feature = "dynamic-compilation"))]
    fn load_source(&self, class_name: &str) -> RuntimeResult<ClassArtifact> {
        Err(RuntimeError::ClassNotFound {
            name: class_name.to_string(),
        })
    }
}

impl fmt::Debug for ClassLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassLoader")
            .field("config", &self.config)
            .field("has_compiler", &self.compiler.is_some())
            .finish()
    }
}
