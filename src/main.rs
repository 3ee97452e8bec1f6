use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use publish_npm::artifacts::{
    ArtifactPublisher, DisabledArtifactPublisher, GradleArtifactPublisher,
};
use publish_npm::cli::{PublishDispatcher, PublishOutcome};
use publish_npm::config::{self, Config};
use publish_npm::domain::ReleaseMode;
use publish_npm::environment::ReleaseEnvironment;
use publish_npm::scm::Git2SourceControl;
use publish_npm::shell::SystemShell;
use publish_npm::ui;

#[derive(clap::Parser)]
#[command(
    name = "publish-npm",
    version,
    about = "Set the package version and publish it to npm as a dry-run, nightly or release build"
)]
struct Args {
    /// Build type to publish
    #[arg(value_enum)]
    mode: ReleaseMode,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Directory to run `npm publish` in")]
    package_dir: Option<PathBuf>,

    #[arg(short, long, help = "Show debug logging")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch<A: ArtifactPublisher>(
    args: &Args,
    config: &Config,
    env: &ReleaseEnvironment,
    shell: &SystemShell,
    scm: &Git2SourceControl,
    artifacts: &A,
) -> Result<PublishOutcome> {
    let mut dispatcher = PublishDispatcher::new(config, shell, scm, artifacts);
    if let Some(dir) = &args.package_dir {
        dispatcher = dispatcher.with_package_dir(dir.clone());
    }
    Ok(dispatcher.run(args.mode, env)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    let env = ReleaseEnvironment::from_env(&config.environment);

    let shell = SystemShell::new();
    let scm = Git2SourceControl::discover(".");

    let result = if config.artifacts.enabled {
        let artifacts =
            GradleArtifactPublisher::new(&shell, config.artifacts.gradle_command.clone());
        dispatch(&args, &config, &env, &shell, &scm, &artifacts)
    } else {
        dispatch(&args, &config, &env, &shell, &scm, &DisabledArtifactPublisher)
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
