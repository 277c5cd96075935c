//! Starting the server process and streaming its output.

use crate::command_runner::CommandRunner;
use crate::output::OutputContext;

use super::error::RunError;
use super::resolve::Installation;

/// Start `bin/standalone.sh -c <config>` and forward its stdout line by line
/// until it exits. Returns `true` when the server was actually launched,
/// `false` on a dry run.
///
/// Ctrl-C cancels the run: the child future is dropped, `kill_on_drop` reaps
/// the process, and [`RunError::Interrupted`] is surfaced.
///
/// # Errors
///
/// Returns [`RunError::Spawn`] if the launcher cannot be run,
/// [`RunError::Launch`] carrying the child's status when it exits non-zero,
/// and [`RunError::Interrupted`] on cancellation.
pub async fn launch_server(
    installation: &Installation,
    dry_run: bool,
    runner: &impl CommandRunner,
    out: &OutputContext,
) -> Result<bool, RunError> {
    if dry_run {
        out.info("Dry run, not starting server");
        return Ok(false);
    }

    out.info(&format!(
        "Starting server using config: {}",
        installation.config.file_name()
    ));

    let launcher = installation.launcher_script();
    let launcher_arg = launcher.to_string_lossy();
    let args = ["-c", installation.config.file_name()];
    let server = runner.stream(
        launcher_arg.as_ref(),
        &args,
        None,
        |line| out.line(line),
    );

    tokio::select! {
        status = server => {
            let status = status.map_err(|reason| RunError::Spawn {
                program: launcher_arg.to_string(),
                reason,
            })?;
            if !status.success() {
                return Err(RunError::Launch {
                    code: status.code().unwrap_or(1),
                });
            }
            Ok(true)
        }
        _ = tokio::signal::ctrl_c() => Err(RunError::Interrupted),
    }
}
