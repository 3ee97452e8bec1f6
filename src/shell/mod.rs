//! Shell execution abstraction layer
//!
//! Every external command the publisher runs (`node`, `npm`, `./gradlew`)
//! goes through the [ShellRunner] trait so the release flow can be driven by
//! [mock::MockShell] in tests and [system::SystemShell] in production.

pub mod mock;
pub mod system;

pub use mock::MockShell;
pub use system::SystemShell;

use crate::error::Result;
use std::path::Path;

/// Result of running one shell command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Process exit code (0 on success)
    pub code: i32,
    /// Captured standard output
    pub stdout: String,
}

impl CommandOutput {
    pub fn new(code: i32, stdout: impl Into<String>) -> Self {
        CommandOutput {
            code,
            stdout: stdout.into(),
        }
    }

    /// Successful run with no output
    pub fn success() -> Self {
        Self::new(0, "")
    }

    /// Failed run with no output
    pub fn failure(code: i32) -> Self {
        Self::new(code, "")
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Runs shell command strings
///
/// A non-zero exit code is not an error: callers inspect
/// [CommandOutput::code] and decide. `Err` is reserved for commands that
/// could not be started at all.
pub trait ShellRunner: Send + Sync {
    /// Run `command`, optionally with `cwd` as working directory
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - The command ran (successfully or not)
    /// * `Err` - The command could not be spawned
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandOutput>;
}
