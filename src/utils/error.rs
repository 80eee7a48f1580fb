use std::fmt;
use thiserror::Error;

/// External operations whose failure the CLI reports with a dedicated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOperation {
    ListRemoteBranches,
    ListMergedBranches,
    ShowBranchDetail,
    ShowLog,
    DeleteRemoteBranch,
    Select,
}

impl ToolOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolOperation::ListRemoteBranches => "list remote branches",
            ToolOperation::ListMergedBranches => "list merged branches",
            ToolOperation::ShowBranchDetail => "show branch detail",
            ToolOperation::ShowLog => "show log",
            ToolOperation::DeleteRemoteBranch => "delete remote branch",
            ToolOperation::Select => "select branches",
        }
    }
}

impl fmt::Display for ToolOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Failed to {operation}: {message}")]
    ExternalTool {
        operation: ToolOperation,
        message: String,
        output: String,
    },

    #[error("Required program not found on PATH: {program}")]
    MissingDependency { program: String },

    #[error("Malformed branch reference: {line}")]
    MalformedInput { line: String },

    #[error("Cannot resolve executable path: {message}")]
    ExecutablePath { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn external_tool(
        operation: ToolOperation,
        message: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::ExternalTool {
            operation,
            message: message.into(),
            output: output.into(),
        }
    }

    pub fn missing_dependency(program: impl Into<String>) -> Self {
        Self::MissingDependency {
            program: program.into(),
        }
    }

    pub fn malformed_input(line: impl Into<String>) -> Self {
        Self::MalformedInput { line: line.into() }
    }

    pub fn executable_path(message: impl Into<String>) -> Self {
        Self::ExecutablePath {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Captured process output attached to the error, if any.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            SweepError::ExternalTool { output, .. } if !output.trim().is_empty() => {
                Some(output.as_str())
            }
            _ => None,
        }
    }

    /// The failure description without the operation prefix.
    pub fn reason(&self) -> String {
        match self {
            SweepError::ExternalTool { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn operation(&self) -> Option<ToolOperation> {
        match self {
            SweepError::ExternalTool { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let tool_err = SweepError::external_tool(
            ToolOperation::ListRemoteBranches,
            "exit status: 128",
            "fatal: not a git repository",
        );
        assert!(matches!(tool_err, SweepError::ExternalTool { .. }));
        assert_eq!(
            tool_err.to_string(),
            "Failed to list remote branches: exit status: 128"
        );
        assert_eq!(tool_err.operation(), Some(ToolOperation::ListRemoteBranches));

        let missing = SweepError::missing_dependency("fzf");
        assert_eq!(missing.to_string(), "Required program not found on PATH: fzf");
        assert_eq!(missing.operation(), None);

        let malformed = SweepError::malformed_input("feature");
        assert_eq!(malformed.to_string(), "Malformed branch reference: feature");
    }

    #[test]
    fn test_captured_output_skips_blank_output() {
        let with_output =
            SweepError::external_tool(ToolOperation::DeleteRemoteBranch, "failed", "denied\n");
        assert_eq!(with_output.captured_output(), Some("denied\n"));

        let blank = SweepError::external_tool(ToolOperation::DeleteRemoteBranch, "failed", "  \n");
        assert_eq!(blank.captured_output(), None);

        let config = SweepError::config_error("bad");
        assert_eq!(config.captured_output(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let sweep_err: SweepError = io_err.into();
        assert!(matches!(sweep_err, SweepError::Io(_)));
    }

    #[test]
    fn test_reason_drops_operation_prefix() {
        let tool_err = SweepError::external_tool(
            ToolOperation::DeleteRemoteBranch,
            "git push origin --delete x exited with exit status: 1",
            "error: unable to delete 'x': remote ref does not exist",
        );
        assert_eq!(
            tool_err.reason(),
            "git push origin --delete x exited with exit status: 1"
        );

        let missing = SweepError::missing_dependency("git");
        assert_eq!(missing.reason(), missing.to_string());
    }
}
