pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod environment;
pub mod error;
pub mod scm;
pub mod shell;
pub mod ui;

pub use error::{PublishError, Result};
