//! # Error Types
//!
//! Errors the launcher can run into before control passes to the debugger.
//!
//! We use `thiserror` to generate the `Error` implementations and messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for launcher operations
///
/// There are only two ways a launch can fail:
///
/// 1. **Usage errors**: `MissingCommand`
/// 2. **Launch failures**: `Launch`, `Wait`
///
/// Log levels and report names are never validated here; the gdb extension
/// decides what to do with them.
#[derive(Error, Debug)]
pub enum TspError
{
    /// No target program was given
    ///
    /// The command line always ends with `--args <program> [args...]`, so at
    /// least one token is required.
    #[error("No target command given: expected a program to run under the debugger")]
    MissingCommand,

    /// The debugger could not be started
    ///
    /// Usually the program is not on `PATH` or is not executable. The
    /// underlying OS error is kept as the source.
    #[error("Failed to launch debugger `{}`: {source}", program.display())]
    Launch
    {
        /// Debugger program that was being started
        program: PathBuf,
        /// Error reported by the operating system
        #[source]
        source: io::Error,
    },

    /// The debugger was started but waiting for it failed
    ///
    /// Only possible with the spawn-and-wait hand-off.
    #[error("Failed to wait for debugger `{}`: {source}", program.display())]
    Wait
    {
        /// Debugger program that was running
        program: PathBuf,
        /// Error reported by the operating system
        #[source]
        source: io::Error,
    },
}

impl TspError
{
    /// Exit code the launcher terminates with for this error.
    ///
    /// Usage errors follow the argument parser's convention (2), everything
    /// else is 1.
    pub fn exit_code(&self) -> i32
    {
        match self {
            TspError::MissingCommand => 2,
            TspError::Launch { .. } | TspError::Wait { .. } => 1,
        }
    }
}

/// Convenience type alias for `Result<T, TspError>`
///
/// ```rust
/// use tsp_core::error::TspResult;
/// fn foo() -> TspResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type TspResult<T> = std::result::Result<T, TspError>;
