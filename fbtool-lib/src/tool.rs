//! Subprocess transport for the external flashing tool.
//!
//! The tool is treated as opaque: the only contract consumed is its process
//! exit status and the `product:<value>` line format of `getvar product`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Outcome of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code of the subprocess, `None` when it was terminated by a signal.
    pub code: Option<i32>,
    /// Captured stdout followed by stderr.
    pub output: String,
}

impl ExecutionResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            output: output.into(),
        }
    }

    pub fn failed(code: i32, output: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// How to launch the flashing tool and capture its output.
pub trait FlashTool {
    /// Run the tool once with `args` and block until it exits.
    fn invoke(&mut self, args: &[String]) -> Result<ExecutionResult>;
}

/// Real implementation backed by `std::process::Command`.
///
/// Arguments are always passed as a vector, never through a shell.
#[derive(Debug)]
pub struct SubprocessTool {
    tool_path: PathBuf,
}

impl SubprocessTool {
    /// Checks once that `tool_path` references an existing, executable file
    /// before any invocation is attempted.
    pub fn new(tool_path: impl Into<PathBuf>) -> Result<Self> {
        let tool_path = tool_path.into();
        if !is_executable(&tool_path) {
            return Err(Error::ToolUnavailable { path: tool_path });
        }
        Ok(Self { tool_path })
    }

    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    true
}

impl FlashTool for SubprocessTool {
    fn invoke(&mut self, args: &[String]) -> Result<ExecutionResult> {
        tracing::debug!("invoking {} {}", self.tool_path.display(), args.join(" "));

        let out = Command::new(&self.tool_path)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ToolUnavailable {
                        path: self.tool_path.clone(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        Ok(ExecutionResult {
            code: out.status.code(),
            output,
        })
    }
}
