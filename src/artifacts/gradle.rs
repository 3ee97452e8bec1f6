use crate::artifacts::ArtifactPublisher;
use crate::error::{PublishError, Result};
use crate::shell::ShellRunner;

/// Publishes to Maven Central through the project's Gradle wrapper
pub struct GradleArtifactPublisher<'a, S: ShellRunner> {
    shell: &'a S,
    gradle: String,
}

impl<'a, S: ShellRunner> GradleArtifactPublisher<'a, S> {
    pub fn new(shell: &'a S, gradle: impl Into<String>) -> Self {
        GradleArtifactPublisher {
            shell,
            gradle: gradle.into(),
        }
    }

    /// Gradle invocation for a version, or an error if the version must not
    /// reach Maven Central.
    ///
    /// Only `0.x` stable releases and nightlies are accepted; a `1.x` or
    /// `1000.x` would break semver ordering of the published artifacts.
    pub fn command_for(&self, version: &str, nightly: bool) -> Result<String> {
        if !nightly && version.starts_with("0.") {
            Ok(format!(
                "{} publishAllToSonatype closeAndReleaseSonatypeStagingRepository",
                self.gradle
            ))
        } else if nightly {
            Ok(format!("{} publishAllToSonatype -PisNightly=true", self.gradle))
        } else {
            Err(PublishError::artifact(format!(
                "Refusing to publish {} to Maven Central",
                version
            )))
        }
    }
}

impl<S: ShellRunner> ArtifactPublisher for GradleArtifactPublisher<'_, S> {
    fn publish(&self, version: &str, nightly: bool) -> Result<()> {
        let command = self.command_for(version, nightly)?;
        tracing::info!(version, nightly, "artifacts: publishing to Maven Central");

        let output = self.shell.run(&command, None)?;
        if !output.is_success() {
            return Err(PublishError::artifact(format!(
                "'{}' exited with code {}",
                command, output.code
            )));
        }

        tracing::info!(version, "artifacts: finished publishing Maven artifacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandOutput, MockShell};

    #[test]
    fn test_stable_release_closes_staging_repository() {
        let shell = MockShell::new();
        let publisher = GradleArtifactPublisher::new(&shell, "./gradlew");
        publisher.publish("0.81.1", false).unwrap();
        assert_eq!(
            shell.commands(),
            vec!["./gradlew publishAllToSonatype closeAndReleaseSonatypeStagingRepository"]
        );
    }

    #[test]
    fn test_nightly() {
        let shell = MockShell::new();
        let publisher = GradleArtifactPublisher::new(&shell, "./gradlew");
        publisher
            .publish("0.82.0-nightly-20230420-currentco", true)
            .unwrap();
        assert_eq!(
            shell.commands(),
            vec!["./gradlew publishAllToSonatype -PisNightly=true"]
        );
    }

    #[test]
    fn test_refuses_non_zero_major() {
        let shell = MockShell::new();
        let publisher = GradleArtifactPublisher::new(&shell, "./gradlew");
        let err = publisher.publish("1000.0.0-abc", false).unwrap_err();
        assert!(err.to_string().contains("Refusing to publish 1000.0.0-abc"));
        assert!(shell.calls().is_empty());
    }

    #[test]
    fn test_gradle_failure() {
        let shell = MockShell::new().with_response(CommandOutput::failure(1));
        let publisher = GradleArtifactPublisher::new(&shell, "./gradlew");
        let err = publisher.publish("0.81.1", false).unwrap_err();
        assert!(err.to_string().contains("exited with code 1"));
    }
}
