//! # tsp-core
//!
//! Command line construction and process hand-off for `track-shared-ptrs`.
//!
//! The launcher runs a program under gdb with the shared_ptr tracking
//! extension loaded:
//!
//! 1. An [`InvocationRequest`] captures the extension log level, the report
//!    destination and the target command.
//! 2. [`DebuggerCommandLine::build`] turns it into gdb's argument vector,
//!    using the debugger and extension from a [`LauncherConfig`].
//! 3. A [`Handoff`] transfers control: process replacement on Unix,
//!    spawn-and-wait elsewhere.
//!
//! The extension itself is not part of this crate. It is loaded by path and
//! must provide the `python-log-level` and `track-shared-ptrs` gdb commands.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tsp_core::{InvocationRequest, Launcher, LauncherConfig};
//!
//! let request = InvocationRequest::new(["./test_0"])?.with_log_level("DEBUG");
//! let mut launcher = Launcher::new(LauncherConfig::default());
//! // Does not return on success
//! let code = launcher.launch(&request)?;
//! std::process::exit(code);
//! # Ok::<(), tsp_core::TspError>(())
//! ```

pub mod command_line;
pub mod config;
pub mod error;
pub mod handoff;
pub mod invocation;
pub mod launcher;

pub use command_line::{DebuggerCommandLine, PreCommand};
pub use config::LauncherConfig;
pub use error::{TspError, TspResult};
pub use handoff::Handoff;
pub use invocation::{InvocationRequest, DEFAULT_LOG_LEVEL, DEFAULT_REPORT};
pub use launcher::Launcher;
