//! # Invocation Request
//!
//! What the user asked for: extension log level, report destination and the
//! program to debug.

use crate::error::{TspError, TspResult};

/// Log level handed to the extension when `--log` is not given.
pub const DEFAULT_LOG_LEVEL: &str = "WARNING";

/// Report destination handed to the extension when `--report` is not given.
pub const DEFAULT_REPORT: &str = "tracked-shared-ptrs";

/// A single launch request.
///
/// Both strings are passed through verbatim. The command is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest
{
    log_level: String,
    report: String,
    command: Vec<String>,
}

impl InvocationRequest
{
    /// Create a request with default log level and report.
    ///
    /// ## Errors
    ///
    /// Returns [`TspError::MissingCommand`] if `command` is empty.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tsp_core::InvocationRequest;
    ///
    /// let request = InvocationRequest::new(["./test_0"]).unwrap();
    /// assert_eq!(request.log_level(), "WARNING");
    /// assert_eq!(request.report(), "tracked-shared-ptrs");
    /// ```
    pub fn new<I, S>(command: I) -> TspResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command: Vec<String> = command.into_iter().map(Into::into).collect();
        if command.is_empty() {
            return Err(TspError::MissingCommand);
        }

        Ok(Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            report: DEFAULT_REPORT.to_string(),
            command,
        })
    }

    /// Set the extension log level.
    #[must_use]
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self
    {
        self.log_level = log_level.into();
        self
    }

    /// Set the report destination.
    #[must_use]
    pub fn with_report(mut self, report: impl Into<String>) -> Self
    {
        self.report = report.into();
        self
    }

    pub fn log_level(&self) -> &str
    {
        &self.log_level
    }

    pub fn report(&self) -> &str
    {
        &self.report
    }

    /// Target program followed by its arguments.
    pub fn command(&self) -> &[String]
    {
        &self.command
    }

    /// The target program.
    pub fn program(&self) -> &str
    {
        // `new` guarantees at least one element
        &self.command[0]
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_empty_command_is_rejected()
    {
        let result = InvocationRequest::new(Vec::<String>::new());
        assert!(matches!(result, Err(TspError::MissingCommand)));
    }

    #[test]
    fn test_values_are_not_interpreted()
    {
        let request = InvocationRequest::new(["prog"])
            .unwrap()
            .with_log_level("not a level")
            .with_report("");

        assert_eq!(request.log_level(), "not a level");
        assert_eq!(request.report(), "");
    }

    #[test]
    fn test_program_is_first_token()
    {
        let request = InvocationRequest::new(["myprog", "--flag", "x"]).unwrap();
        assert_eq!(request.program(), "myprog");
        assert_eq!(request.command(), ["myprog", "--flag", "x"]);
    }
}
