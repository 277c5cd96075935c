//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::command_runner::TokioCommandRunner;
use crate::output::OutputContext;
use crate::server::{self, FeatureToggles, RunError};

/// Manage building, configuring, and starting a WildFly/EAP server
#[derive(Parser)]
#[command(name = "startserver", version)]
pub struct Cli {
    /// The working directory of the server
    pub server_dir: Option<PathBuf>,

    /// Clean and rebuild the server before starting
    #[arg(short = 'c')]
    pub clean: bool,

    /// Set logging level to DEBUG
    #[arg(short = 'L', long = "logging")]
    pub logging: bool,

    /// Enable OpenTelemetry
    #[arg(short = 'O', long = "otel", alias = "opentelemetry")]
    pub otel: bool,

    /// Enable Micrometer
    #[arg(short = 'M', long = "micrometer")]
    pub micrometer: bool,

    /// Start the server using the standalone-microprofile configuration
    #[arg(short = 'm', long = "microprofile")]
    pub microprofile: bool,

    /// Start the server using the standalone-full configuration
    #[arg(short = 'f', long = "full")]
    pub full: bool,

    /// Start the server using the standalone-full-ha configuration
    #[arg(long = "ha")]
    pub ha: bool,

    /// Enable suspend on start for debug
    #[arg(short = 's', long = "suspend")]
    pub suspend: bool,

    /// Don't start the server
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// File(s) with extra management commands to run
    #[arg(long = "file")]
    pub file: Vec<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::BoolishValueParser::new())]
    pub no_color: bool,
}

impl Cli {
    /// Execute the run pipeline and map its outcome to a process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub async fn run(self) -> Result<ExitCode> {
        let out = OutputContext::new(self.no_color, self.quiet);
        let toggles = self.toggles();
        let runner = TokioCommandRunner::new();
        let base_dir = std::env::current_dir().context("determining working directory")?;

        match server::run(&toggles, self.server_dir.clone(), &base_dir, &runner, &out).await {
            Ok(_report) => Ok(ExitCode::SUCCESS),
            Err(RunError::Launch { code }) => {
                out.error(&format!("server exited with status {code}"));
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let code = code.clamp(1, 255) as u8;
                Ok(ExitCode::from(code))
            }
            Err(RunError::Interrupted) => {
                out.warn("interrupted");
                Ok(ExitCode::from(130))
            }
            Err(e) => {
                out.error(&e.to_string());
                Ok(ExitCode::FAILURE)
            }
        }
    }

    /// Collapse the parsed flags into the immutable toggle set consumed by
    /// the pipeline.
    #[must_use]
    pub fn toggles(&self) -> FeatureToggles {
        FeatureToggles {
            clean: self.clean,
            debug_logging: self.logging,
            otel: self.otel,
            micrometer: self.micrometer,
            microprofile: self.microprofile,
            full: self.full,
            ha: self.ha,
            suspend: self.suspend,
            dry_run: self.dry_run,
            command_files: self.file.clone(),
        }
    }
}
