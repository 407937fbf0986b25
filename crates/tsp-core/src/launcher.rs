//! # Launcher
//!
//! Ties a [`LauncherConfig`] to a [`Handoff`]: builds the debugger command
//! line for a request and hands it off.

use tracing::{debug, info, warn};

use crate::command_line::DebuggerCommandLine;
use crate::config::LauncherConfig;
use crate::error::TspResult;
use crate::handoff::{default_handoff, Handoff};
use crate::invocation::InvocationRequest;

pub struct Launcher
{
    config: LauncherConfig,
    handoff: Box<dyn Handoff>,
}

impl Launcher
{
    /// Launcher using the platform's default hand-off.
    pub fn new(config: LauncherConfig) -> Self
    {
        Self::with_handoff(config, default_handoff())
    }

    /// Launcher with a custom hand-off.
    pub fn with_handoff(config: LauncherConfig, handoff: Box<dyn Handoff>) -> Self
    {
        Self { config, handoff }
    }

    pub fn config(&self) -> &LauncherConfig
    {
        &self.config
    }

    /// Build the command line for `request`.
    ///
    /// Warns when the extension file is missing but still builds the line;
    /// gdb is the one that fails on it.
    pub fn prepare(&self, request: &InvocationRequest) -> DebuggerCommandLine
    {
        debug!(
            log_level = request.log_level(),
            report = request.report(),
            program = request.program(),
            "preparing debugger invocation"
        );

        if !self.config.extension_exists() {
            warn!(
                extension = %self.config.extension().display(),
                "extension file not found; gdb will fail to source it"
            );
        }

        let command_line = DebuggerCommandLine::build(request, &self.config);
        info!(command = %command_line, "debugger command line");
        command_line
    }

    /// Hand a prepared command line to the debugger.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::TspError::Launch`] if the debugger cannot be started.
    pub fn hand_off(&mut self, command_line: &DebuggerCommandLine) -> TspResult<i32>
    {
        self.handoff.hand_off(command_line)
    }

    /// [`prepare`](Self::prepare) and [`hand_off`](Self::hand_off) in one go.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::TspError::Launch`] if the debugger cannot be started.
    pub fn launch(&mut self, request: &InvocationRequest) -> TspResult<i32>
    {
        let command_line = self.prepare(request);
        self.hand_off(&command_line)
    }
}

impl std::fmt::Debug for Launcher
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("Launcher").field("config", &self.config).finish_non_exhaustive()
    }
}
