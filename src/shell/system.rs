use crate::error::{PublishError, Result};
use crate::shell::{CommandOutput, ShellRunner};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs commands through `sh -c` on the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        SystemShell
    }
}

impl ShellRunner for SystemShell {
    /// Stderr is inherited so tool progress stays visible; stdout is captured
    /// and echoed back once the command finishes.
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandOutput> {
        if let Some(dir) = cwd {
            if !dir.is_dir() {
                return Err(PublishError::shell(format!(
                    "Working directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        tracing::debug!(command, cwd = ?cwd, "shell: running");

        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| PublishError::shell(format!("Failed to execute '{}': {}", command, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !stdout.is_empty() {
            let mut out = std::io::stdout();
            out.write_all(stdout.as_bytes())?;
            out.flush()?;
        }

        // Killed by a signal: no exit code, report a plain failure
        let code = output.status.code().unwrap_or(1);
        tracing::debug!(command, code, "shell: finished");

        Ok(CommandOutput { code, stdout })
    }
}
