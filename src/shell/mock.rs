use crate::error::Result;
use crate::shell::{CommandOutput, ShellRunner};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded invocation of [MockShell]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub cwd: Option<PathBuf>,
}

/// Mock shell for testing without running anything
///
/// Responses are handed out in the order they were queued. Once the queue
/// is empty every command succeeds with empty output.
#[derive(Debug, Default)]
pub struct MockShell {
    responses: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<RecordedCommand>>,
}

impl MockShell {
    /// Create a new mock shell with no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output for the next unanswered command
    pub fn push_response(&self, output: CommandOutput) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(output);
    }

    /// Builder form of [MockShell::push_response]
    pub fn with_response(self, output: CommandOutput) -> Self {
        self.push_response(output);
        self
    }

    /// Every command run so far, in order
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Just the command strings run so far
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }
}

impl ShellRunner for MockShell {
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCommand {
                command: command.to_string(),
                cwd: cwd.map(Path::to_path_buf),
            });

        let next = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        Ok(next.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shell_records_calls() {
        let shell = MockShell::new();
        shell.run("npm view pkg", None).unwrap();
        shell.run("npm publish", Some(Path::new("pkg"))).unwrap();

        let calls = shell.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].command, "npm view pkg");
        assert_eq!(calls[0].cwd, None);
        assert_eq!(calls[1].cwd, Some(PathBuf::from("pkg")));
    }

    #[test]
    fn test_mock_shell_returns_queued_responses() {
        let shell = MockShell::new()
            .with_response(CommandOutput::new(0, "0.81.0\n"))
            .with_response(CommandOutput::failure(2));

        assert_eq!(shell.run("a", None).unwrap().stdout, "0.81.0\n");
        assert_eq!(shell.run("b", None).unwrap().code, 2);
        assert!(shell.run("c", None).unwrap().is_success());
    }
}
