//! Runtime CLI Library
//!
//! Provides the Runtime root and the command implementations behind the
//! `zs-runtime` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runtime;

use std::io::Write;

pub use cli::{Cli, Command};
pub use error::{CliError, CliResult};
pub use runtime::{describe_class, describe_symbols, Runtime};

/// Execute the parsed command, writing its report to `out`
///
/// # Errors
/// Returns `CliError` if the configuration is unusable or the command fails
pub fn run(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    match &cli.command {
        Command::Load { class, imports } => {
            let mut runtime = Runtime::new(cli.loader_config()?);
            let imports = cli::imports_table(imports);
            let info = runtime.load_class(class, imports.as_ref())?;
            write!(out, "{}", describe_class(&info))?;
        }
        Command::New { class, imports } => {
            let mut runtime = Runtime::new(cli.loader_config()?);
            let imports = cli::imports_table(imports);
            let obj = runtime.new_object(class, imports.as_ref())?;
            writeln!(out, "{}", obj.borrow())?;
        }
        Command::Symbols { file } => {
            let table = Runtime::decode_symbols(file)?;
            write!(out, "{}", describe_symbols(&table))?;
        }
    }
    Ok(())
}
