//! Main publish workflow orchestration logic
//!
//! [PublishDispatcher] runs one publish in the requested [ReleaseMode]. It
//! only talks to the outside world through its three collaborators, so the
//! whole flow is a function of the mode, the captured
//! [ReleaseEnvironment] and what the collaborators answer.

use std::path::{Path, PathBuf};

use crate::artifacts::ArtifactPublisher;
use crate::commands;
use crate::config::Config;
use crate::domain::version::{dry_run_version, nightly_version, short_commit};
use crate::domain::{PublishTag, ReleaseMode, ReleaseVersion};
use crate::environment::ReleaseEnvironment;
use crate::error::{PublishError, Result};
use crate::scm::SourceControl;
use crate::shell::{CommandOutput, ShellRunner};
use crate::ui;

pub const DRY_RUN_MESSAGE: &str = "Skipping `npm publish` because --dry-run is set.";
pub const PUBLISH_FAILED_MESSAGE: &str = "Failed to publish package to npm";
pub const NOT_ON_GIT_MESSAGE: &str = "Not in git. We do not want to publish anything";

/// How a publish run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Dry run: version set, nothing published
    Skipped,
    /// Package (and artifacts) published
    Published,
    /// An external command failed; see the exit code
    Failed,
}

/// Result of a publish run that got as far as running commands
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    /// Exit code the process should terminate with
    pub exit_code: i32,

    /// The computed version, if it got that far
    pub version: Option<String>,

    /// The dist-tag used for `npm publish`, if it got that far
    pub tag: Option<PublishTag>,

    pub status: OutcomeStatus,

    /// Final message shown to the user
    pub message: String,
}

impl PublishOutcome {
    fn skipped(version: String, message: impl Into<String>) -> Self {
        PublishOutcome {
            exit_code: 0,
            version: Some(version),
            tag: None,
            status: OutcomeStatus::Skipped,
            message: message.into(),
        }
    }

    fn published(version: String, tag: PublishTag) -> Self {
        PublishOutcome {
            exit_code: 0,
            message: format!("Published to npm {}", version),
            version: Some(version),
            tag: Some(tag),
            status: OutcomeStatus::Published,
        }
    }

    fn failed(exit_code: i32, message: impl Into<String>) -> Self {
        PublishOutcome {
            exit_code,
            version: None,
            tag: None,
            status: OutcomeStatus::Failed,
            message: message.into(),
        }
    }

    fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    fn with_tag(mut self, tag: PublishTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a publish in one of the three release modes
pub struct PublishDispatcher<'a, S, C, A>
where
    S: ShellRunner,
    C: SourceControl,
    A: ArtifactPublisher,
{
    config: &'a Config,
    shell: &'a S,
    scm: &'a C,
    artifacts: &'a A,
    package_dir: PathBuf,
}

impl<'a, S, C, A> PublishDispatcher<'a, S, C, A>
where
    S: ShellRunner,
    C: SourceControl,
    A: ArtifactPublisher,
{
    pub fn new(config: &'a Config, shell: &'a S, scm: &'a C, artifacts: &'a A) -> Self {
        PublishDispatcher {
            config,
            shell,
            scm,
            artifacts,
            package_dir: config.package.directory.clone(),
        }
    }

    /// Publish from a different package directory than the configured one
    pub fn with_package_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.package_dir = dir.into();
        self
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Run the publish flow for `mode`.
    ///
    /// # Returns
    /// * `Ok(PublishOutcome)` - The run finished; command failures are
    ///   reported through [PublishOutcome::exit_code]
    /// * `Err` - The run was aborted before publishing (invalid or missing
    ///   release tag, git errors, a command that could not be spawned)
    pub fn run(&self, mode: ReleaseMode, env: &ReleaseEnvironment) -> Result<PublishOutcome> {
        tracing::info!(%mode, "publish: start");

        let outcome = match mode {
            ReleaseMode::DryRun => self.dry_run()?,
            ReleaseMode::Nightly => self.nightly(env)?,
            ReleaseMode::Release => self.release(env)?,
        };

        tracing::info!(
            %mode,
            exit_code = outcome.exit_code,
            version = outcome.version.as_deref().unwrap_or("<none>"),
            "publish: finished"
        );
        ui::display_outcome(&outcome);
        Ok(outcome)
    }

    fn short_commit(&self) -> Result<String> {
        let commit = self.scm.current_commit()?;
        Ok(short_commit(&commit, self.config.version.commit_hash_length).to_string())
    }

    fn set_version(&self, version: &str, mode: ReleaseMode) -> Result<CommandOutput> {
        let command = commands::set_version(&self.config.version.set_version_script, version, mode);
        ui::display_status(&format!("Setting version to {}", version));
        self.shell.run(&command, None)
    }

    fn dry_run(&self) -> Result<PublishOutcome> {
        let version = dry_run_version(&self.config.version.dry_run_version, &self.short_commit()?);
        ui::display_plan(&version, None);

        let output = self.set_version(&version, ReleaseMode::DryRun)?;
        if !output.is_success() {
            tracing::warn!(code = output.code, "dry-run: set-version exited non-zero");
        }

        Ok(PublishOutcome::skipped(version, DRY_RUN_MESSAGE))
    }

    fn nightly(&self, env: &ReleaseEnvironment) -> Result<PublishOutcome> {
        let short = self.short_commit()?;

        let view = self.shell.run(
            &commands::view_dist_tag(&self.config.package.name, &PublishTag::Next),
            None,
        )?;
        if !view.is_success() {
            return Ok(PublishOutcome::failed(
                view.code,
                format!(
                    "Failed to query the next dist-tag of {}",
                    self.config.package.name
                ),
            ));
        }

        let version = match nightly_version(&view.stdout, env.today, &short) {
            Ok(version) => version,
            Err(e) => {
                return Ok(PublishOutcome::failed(
                    1,
                    format!("Failed to compute nightly version: {}", e),
                ))
            }
        };
        let tag = PublishTag::Nightly;
        ui::display_plan(&version, Some(tag.to_string().as_str()));

        let output = self.set_version(&version, ReleaseMode::Nightly)?;
        if !output.is_success() {
            return Ok(PublishOutcome::failed(
                output.code,
                format!("Failed to set version number to {}", version),
            )
            .with_version(version));
        }

        let output = self.npm_publish(&tag, None)?;
        self.finish(version, tag, true, output)
    }

    fn release(&self, env: &ReleaseEnvironment) -> Result<PublishOutcome> {
        let tag_var = &self.config.environment.release_tag_var;
        let raw_tag = env
            .release_tag
            .as_deref()
            .ok_or_else(|| PublishError::MissingEnvironment(tag_var.clone()))?;
        let version = ReleaseVersion::parse_for_release(raw_tag)?;

        if !self.scm.is_git_checkout() {
            return Ok(PublishOutcome::failed(1, NOT_ON_GIT_MESSAGE).with_version(version.version));
        }
        let commit = self.scm.current_commit()?;
        let is_latest = self.scm.is_tagged_latest(&commit)?;
        let tag = PublishTag::for_release(&version, is_latest);
        tracing::debug!(%version, is_latest, %tag, "release: selected dist-tag");
        ui::display_plan(&version.version, Some(tag.to_string().as_str()));

        if env.otp.is_none() {
            ui::display_warning(&format!(
                "{} is not set, publishing without --otp",
                self.config.environment.otp_var
            ));
        }

        let output = self.npm_publish(&tag, env.otp.as_deref())?;
        self.finish(version.version, tag, false, output)
    }

    fn npm_publish(&self, tag: &PublishTag, otp: Option<&str>) -> Result<CommandOutput> {
        let command = commands::npm_publish(tag, otp);
        tracing::info!(%tag, dir = %self.package_dir.display(), "npm: publishing");
        self.shell.run(&command, Some(self.package_dir.as_path()))
    }

    /// Artifacts are only published once npm accepted the package
    fn finish(
        &self,
        version: String,
        tag: PublishTag,
        nightly: bool,
        output: CommandOutput,
    ) -> Result<PublishOutcome> {
        if !output.is_success() {
            return Ok(PublishOutcome::failed(output.code, PUBLISH_FAILED_MESSAGE)
                .with_version(version)
                .with_tag(tag));
        }

        if let Err(e) = self.artifacts.publish(&version, nightly) {
            return Ok(PublishOutcome::failed(
                1,
                format!("Failed to publish Maven artifacts: {}", e),
            )
            .with_version(version)
            .with_tag(tag));
        }

        Ok(PublishOutcome::published(version, tag))
    }
}
