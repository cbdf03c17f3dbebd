//! Runtime error taxonomy.
//!
//! Every failure the object runtime can report to the interpreter's caller.
//! Loading a class, decoding a symbol table, or invoking a builtin never
//! aborts the process; it returns one of these variants instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the class loading pipeline and the object model.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Neither the compiled nor the source artifact exists on the class path.
    #[error("cannot find class '{name}'")]
    ClassNotFound {
        /// Canonical class name that was searched for
        name: String,
    },

    /// The source artifact exists but could not be compiled.
    #[error("failed to compile class '{name}': {cause}")]
    CompileFailure {
        /// Canonical class name being compiled
        name: String,
        /// Diagnostic reported by the compiler
        cause: String,
    },

    /// A symbol table buffer is inconsistent with its declared count.
    #[error("malformed symbol table: {reason}")]
    MalformedSymbolTable {
        /// What the decoder found wrong
        reason: String,
    },

    /// Resource exhaustion while allocating runtime state.
    #[error("allocation failure")]
    AllocationFailure,

    /// An artifact exists but could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The attached interpreter failed while running bytecode.
    #[error("interpreter error: {message}")]
    Interpreter {
        /// Diagnostic reported by the interpreter
        message: String,
    },

    /// A builtin was invoked on a receiver of the wrong kind.
    #[error("type error: {message}")]
    TypeError {
        /// Description of the mismatch
        message: String,
    },
}

impl RuntimeError {
    /// Shorthand for [`RuntimeError::MalformedSymbolTable`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        RuntimeError::MalformedSymbolTable {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`RuntimeError::Interpreter`].
    pub fn interpreter(message: impl Into<String>) -> Self {
        RuntimeError::Interpreter {
            message: message.into(),
        }
    }

    /// Shorthand for [`RuntimeError::TypeError`].
    pub fn type_error(message: impl Into<String>) -> Self {
        RuntimeError::TypeError {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the runtime.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
