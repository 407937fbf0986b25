//! # Debugger Command Line
//!
//! Turns an [`InvocationRequest`] into the exact argument vector gdb is
//! started with:
//!
//! ```text
//! gdb -batch
//!     -ex "source <extension>"
//!     -ex "python-log-level <log>"
//!     -ex "track-shared-ptrs <report>"
//!     --args <program> [args...]
//! ```
//!
//! Every pre-command is a single argument; values are inserted verbatim,
//! without quoting or escaping.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::invocation::InvocationRequest;

/// Run gdb non-interactively and exit once the target is done.
pub const BATCH_FLAG: &str = "-batch";

/// Flag introducing a pre-command.
pub const EXECUTE_FLAG: &str = "-ex";

/// Everything after this flag is the target program and its arguments.
pub const ARGS_FLAG: &str = "--args";

/// A command gdb runs before the target starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreCommand
{
    /// `source <path>`: load the extension
    Source(PathBuf),
    /// `python-log-level <level>`: extension log verbosity
    PythonLogLevel(String),
    /// `track-shared-ptrs <report>`: install the breakpoints and run
    TrackSharedPtrs(String),
}

impl PreCommand
{
    /// gdb command name.
    pub fn name(&self) -> &'static str
    {
        match self {
            PreCommand::Source(_) => "source",
            PreCommand::PythonLogLevel(_) => "python-log-level",
            PreCommand::TrackSharedPtrs(_) => "track-shared-ptrs",
        }
    }

    fn argument(&self) -> &OsStr
    {
        match self {
            PreCommand::Source(path) => path.as_os_str(),
            PreCommand::PythonLogLevel(value) | PreCommand::TrackSharedPtrs(value) => OsStr::new(value),
        }
    }

    /// The pre-command as one gdb argument, `<name> <argument>`.
    pub fn render(&self) -> OsString
    {
        let mut rendered = OsString::from(self.name());
        rendered.push(" ");
        rendered.push(self.argument());
        rendered
    }
}

impl fmt::Display for PreCommand
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{} {}", self.name(), self.argument().to_string_lossy())
    }
}

/// Full debugger invocation, built once and never modified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebuggerCommandLine
{
    program: PathBuf,
    args: Vec<OsString>,
}

impl DebuggerCommandLine
{
    /// Build the command line for `request` using `config`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tsp_core::{DebuggerCommandLine, InvocationRequest, LauncherConfig};
    ///
    /// let request = InvocationRequest::new(["myprog", "--flag"]).unwrap();
    /// let config = LauncherConfig::new("gdb", "/opt/tsp/track-shared-ptrs.py");
    /// let line = DebuggerCommandLine::build(&request, &config);
    ///
    /// assert!(line.to_string().ends_with("--args myprog --flag"));
    /// ```
    pub fn build(request: &InvocationRequest, config: &LauncherConfig) -> Self
    {
        let pre_commands = [
            PreCommand::Source(config.extension().to_path_buf()),
            PreCommand::PythonLogLevel(request.log_level().to_string()),
            PreCommand::TrackSharedPtrs(request.report().to_string()),
        ];

        let mut args = Vec::with_capacity(2 + pre_commands.len() * 2 + request.command().len());
        args.push(OsString::from(BATCH_FLAG));
        for pre_command in &pre_commands {
            args.push(OsString::from(EXECUTE_FLAG));
            args.push(pre_command.render());
        }
        args.push(OsString::from(ARGS_FLAG));
        args.extend(request.command().iter().map(OsString::from));

        Self {
            program: config.debugger().to_path_buf(),
            args,
        }
    }

    /// Debugger program, `argv[0]`.
    pub fn program(&self) -> &Path
    {
        &self.program
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[OsString]
    {
        &self.args
    }

    /// Pre-commands in the order gdb runs them.
    pub fn pre_commands(&self) -> impl Iterator<Item = &OsStr>
    {
        self.args
            .windows(2)
            .take_while(|pair| pair[0] != ARGS_FLAG)
            .filter(|pair| pair[0] == EXECUTE_FLAG)
            .map(|pair| pair[1].as_os_str())
    }

    /// Target program and arguments, everything after `--args`.
    pub fn target(&self) -> &[OsString]
    {
        let start = self
            .args
            .iter()
            .position(|arg| arg == ARGS_FLAG)
            .map_or(self.args.len(), |index| index + 1);
        &self.args[start..]
    }

    /// Program followed by all arguments, lossily converted to UTF-8.
    pub fn argv_lossy(&self) -> Vec<String>
    {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for DebuggerCommandLine
{
    /// Space-separated argv, unquoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.argv_lossy().join(" "))
    }
}
