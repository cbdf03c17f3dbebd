//! The source compiler seam.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Turns a class source file into bytecode.
pub trait Compiler {
    /// Compile `source_path`, returning the bytecode or a diagnostic.
    ///
    /// The bytecode size is the length of the returned buffer.
    fn compile(&self, source_path: &Path) -> Result<Vec<u8>, String>;
}

/// Runs an external compiler program.
///
/// The program is invoked as `<program> <args>... <source_path>` and must
/// write the bytecode to stdout. A non-zero exit status is a failure, with
/// stderr as the diagnostic.
#[derive(Debug, Clone)]
pub struct CommandCompiler {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandCompiler {
    /// Compiler invoking `program` with no extra arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the source path.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Program that will be executed.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Compiler for CommandCompiler {
    fn compile(&self, source_path: &Path) -> Result<Vec<u8>, String> {
        tracing::debug!(program = ?self.program, source = ?source_path, "invoking compiler");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(source_path)
            .output()
            .map_err(|e| format!("failed to run {}: {}", self.program.display(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                format!("{} exited with {}", self.program.display(), output.status)
            } else {
                stderr.to_string()
            });
        }

        Ok(output.stdout)
    }
}
