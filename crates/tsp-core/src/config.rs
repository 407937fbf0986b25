//! # Launcher Configuration
//!
//! Which debugger to run and which extension file it should load.
//!
//! The extension path is fixed at build time (see `build.rs`) instead of
//! being derived from where the launcher binary happens to live. Both values
//! can be overridden per run.

use std::path::{Path, PathBuf};

/// Debugger program used when none is configured, looked up on `PATH`.
pub const DEFAULT_DEBUGGER: &str = "gdb";

/// Extension path resolved when this crate was built.
pub const DEFAULT_EXTENSION_PATH: &str = env!("TSP_EXTENSION_PATH");

/// Debugger and extension locations for a launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig
{
    debugger: PathBuf,
    extension: PathBuf,
}

impl Default for LauncherConfig
{
    fn default() -> Self
    {
        Self {
            debugger: PathBuf::from(DEFAULT_DEBUGGER),
            extension: PathBuf::from(DEFAULT_EXTENSION_PATH),
        }
    }
}

impl LauncherConfig
{
    /// Configuration with explicit values.
    pub fn new(debugger: impl Into<PathBuf>, extension: impl Into<PathBuf>) -> Self
    {
        Self {
            debugger: debugger.into(),
            extension: extension.into(),
        }
    }

    /// Replace the debugger program.
    #[must_use]
    pub fn with_debugger(mut self, debugger: impl Into<PathBuf>) -> Self
    {
        self.debugger = debugger.into();
        self
    }

    /// Replace the extension path.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<PathBuf>) -> Self
    {
        self.extension = extension.into();
        self
    }

    pub fn debugger(&self) -> &Path
    {
        &self.debugger
    }

    pub fn extension(&self) -> &Path
    {
        &self.extension
    }

    /// Whether the extension file exists.
    ///
    /// A missing extension does not stop the launch: gdb reports it when it
    /// runs the `source` pre-command.
    pub fn extension_exists(&self) -> bool
    {
        self.extension.is_file()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_default_uses_gdb_and_build_time_extension()
    {
        let config = LauncherConfig::default();
        assert_eq!(config.debugger(), Path::new("gdb"));
        assert_eq!(config.extension(), Path::new(DEFAULT_EXTENSION_PATH));
    }

    #[test]
    fn test_overrides()
    {
        let config = LauncherConfig::default()
            .with_debugger("/opt/gdb/bin/gdb")
            .with_extension("/usr/share/track-shared-ptrs/track-shared-ptrs.py");

        assert_eq!(config.debugger(), Path::new("/opt/gdb/bin/gdb"));
        assert_eq!(
            config.extension(),
            Path::new("/usr/share/track-shared-ptrs/track-shared-ptrs.py")
        );
    }

    #[test]
    fn test_missing_extension_is_reported()
    {
        let config = LauncherConfig::new("gdb", "/nonexistent/track-shared-ptrs.py");
        assert!(!config.extension_exists());
    }
}
