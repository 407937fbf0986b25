//! # Process Hand-off
//!
//! The last step of a launch: control passes to the debugger and the
//! launcher is gone.
//!
//! - **Unix**: the launcher's process image is replaced (`execvp`). Same PID,
//!   same file descriptors, same environment. Never returns on success.
//! - **Elsewhere**: the debugger is spawned as a child, the launcher waits for
//!   it and exits with its status.
//!
//! Either way the launcher's exit status ends up being the debugger's.

use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::command_line::DebuggerCommandLine;
use crate::error::{TspError, TspResult};

/// Transfers control to the debugger
pub trait Handoff
{
    /// Hand `command_line` over to the operating system.
    ///
    /// Returns the exit code the launcher should terminate with. Process
    /// replacement never returns on success.
    ///
    /// ## Errors
    ///
    /// Returns [`TspError::Launch`] if the debugger cannot be started.
    fn hand_off(&mut self, command_line: &DebuggerCommandLine) -> TspResult<i32>;
}

fn command_for(command_line: &DebuggerCommandLine) -> Command
{
    let mut command = Command::new(command_line.program());
    command.args(command_line.args());
    command
}

/// Replaces the current process image with the debugger
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecHandoff;

#[cfg(unix)]
impl Handoff for ExecHandoff
{
    fn hand_off(&mut self, command_line: &DebuggerCommandLine) -> TspResult<i32>
    {
        use std::os::unix::process::CommandExt;

        debug!(program = %command_line.program().display(), "replacing process image");

        // Only returns if exec failed
        let source = command_for(command_line).exec();
        Err(TspError::Launch {
            program: command_line.program().to_path_buf(),
            source,
        })
    }
}

/// Spawns the debugger and waits for it to finish
#[derive(Debug, Default, Clone, Copy)]
pub struct SpawnHandoff;

impl Handoff for SpawnHandoff
{
    fn hand_off(&mut self, command_line: &DebuggerCommandLine) -> TspResult<i32>
    {
        let program = command_line.program();
        debug!(program = %program.display(), "spawning debugger");

        let mut child = command_for(command_line).spawn().map_err(|source| TspError::Launch {
            program: program.to_path_buf(),
            source,
        })?;

        let status = child.wait().map_err(|source| TspError::Wait {
            program: program.to_path_buf(),
            source,
        })?;

        debug!(%status, "debugger exited");
        Ok(exit_code(status))
    }
}

/// Map a child's exit status to the code the launcher exits with.
///
/// A child killed by a signal maps to `128 + signal`, the way shells report it.
pub fn exit_code(status: ExitStatus) -> i32
{
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// The hand-off used for real launches on this platform.
#[cfg(unix)]
pub fn default_handoff() -> Box<dyn Handoff>
{
    Box::new(ExecHandoff)
}

/// The hand-off used for real launches on this platform.
#[cfg(not(unix))]
pub fn default_handoff() -> Box<dyn Handoff>
{
    Box::new(SpawnHandoff)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::config::LauncherConfig;
    use crate::invocation::InvocationRequest;

    fn line_for(debugger: &str) -> DebuggerCommandLine
    {
        let request = InvocationRequest::new(["prog"]).unwrap();
        let config = LauncherConfig::new(debugger, "/nonexistent/track-shared-ptrs.py");
        DebuggerCommandLine::build(&request, &config)
    }

    #[test]
    fn test_spawn_missing_debugger_is_launch_error()
    {
        let err = SpawnHandoff
            .hand_off(&line_for("/nonexistent/bin/track-shared-ptrs-gdb"))
            .unwrap_err();
        assert!(matches!(err, TspError::Launch { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/nonexistent/bin/track-shared-ptrs-gdb"));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_propagates_exit_code()
    {
        // `true` and `false` ignore the gdb arguments
        assert_eq!(SpawnHandoff.hand_off(&line_for("true")).unwrap(), 0);
        assert_eq!(SpawnHandoff.hand_off(&line_for("false")).unwrap(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_exit_code()
    {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status for a child killed by SIGKILL
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code(status), 137);

        let status = ExitStatus::from_raw(3 << 8);
        assert_eq!(exit_code(status), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_missing_debugger_returns_error()
    {
        // A failed exec leaves the test process intact
        let err = ExecHandoff
            .hand_off(&line_for("/nonexistent/bin/track-shared-ptrs-gdb"))
            .unwrap_err();
        assert!(matches!(err, TspError::Launch { .. }));
    }
}
