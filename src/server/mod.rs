//! The server lifecycle pipeline.
//!
//! A single linear sequence with no branching back:
//! locate → \[clean → extract\] → debug patch → compose commands →
//! \[apply CLI\] → launch. Every stage either completes or aborts the run
//! with a distinct [`RunError`] variant.

mod batch;
mod clean;
mod config;
mod debug;
mod error;
mod extract;
mod jboss_cli;
mod launch;
mod resolve;

pub use batch::{CommandBatch, compose, load_command_files};
pub use clean::clean_server;
pub use config::{FeatureToggles, ServerConfig};
pub use debug::patch_debug_config;
pub use error::RunError;
pub use extract::extract_server;
pub use jboss_cli::apply_commands;
pub use launch::launch_server;
pub use resolve::{
    CLI_SCRIPT, DEBUG_CONF, Installation, LAUNCHER_SCRIPT, NAME_PREFIXES, SEARCH_ROOTS,
    find_server_archive, find_server_dir,
};

use std::path::{Path, PathBuf};

use crate::command_runner::CommandRunner;
use crate::output::OutputContext;

/// Outcome of a successful run (the server exited cleanly, or the dry run
/// completed without launching).
#[derive(Debug)]
pub struct RunReport {
    pub installation: Installation,
    /// `false` on a dry run.
    pub launched: bool,
}

/// Run the whole pipeline. `server_dir` short-circuits directory location
/// when the caller already knows the installation root; `base_dir` is the
/// directory the search roots are resolved under.
///
/// # Errors
///
/// Returns the [`RunError`] of the first failing stage; later stages never
/// run after a failure.
pub async fn run(
    toggles: &FeatureToggles,
    server_dir: Option<PathBuf>,
    base_dir: &Path,
    runner: &impl CommandRunner,
    out: &OutputContext,
) -> Result<RunReport, RunError> {
    let config = ServerConfig::from_toggles(toggles);

    let mut root = server_dir
        .or_else(|| resolve::find_server_dir(base_dir, &SEARCH_ROOTS, &NAME_PREFIXES));

    if toggles.clean {
        if let Some(dir) = root.take() {
            clean::clean_server(&dir, out);
        }
    }

    let root = match root {
        Some(dir) => dir,
        None => {
            out.info("Extracting server");
            let archive = resolve::find_server_archive(base_dir, &SEARCH_ROOTS, &NAME_PREFIXES)
                .ok_or_else(|| {
                    RunError::Resolution(
                        "no server directory or distribution archive found".to_string(),
                    )
                })?;
            extract::extract_server(&archive, runner, out).await?
        }
    };

    let installation = Installation { root, config };
    installation.validate()?;
    out.kv(
        "Using server directory",
        &installation.root.display().to_string(),
    );

    debug::patch_debug_config(&installation, toggles.suspend)?;

    let extra = batch::load_command_files(&toggles.command_files)?;
    let commands = batch::compose(toggles, config, &extra);
    jboss_cli::apply_commands(&installation, &commands, runner, out).await?;

    let launched = launch::launch_server(&installation, toggles.dry_run, runner, out).await?;
    Ok(RunReport {
        installation,
        launched,
    })
}
