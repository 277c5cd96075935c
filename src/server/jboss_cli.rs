//! Applying the command batch through an offline management-CLI session.

use crate::command_runner::CommandRunner;
use crate::output::OutputContext;

use super::batch::CommandBatch;
use super::error::RunError;
use super::resolve::Installation;

/// Feed the batch to `bin/jboss-cli.sh` on stdin, one command per line,
/// forwarding the CLI's own output as it arrives.
///
/// A trivial batch (only the `embed-server` preamble) is a no-op: no CLI
/// process is started.
///
/// # Errors
///
/// Returns [`RunError::Spawn`] if the CLI cannot be run and
/// [`RunError::CliApplication`] if it exits non-zero — the server is never
/// launched with a possibly-inconsistent configuration.
pub async fn apply_commands(
    installation: &Installation,
    batch: &CommandBatch,
    runner: &impl CommandRunner,
    out: &OutputContext,
) -> Result<(), RunError> {
    if batch.is_trivial() {
        return Ok(());
    }

    out.info("Configuring the server...");
    for command in &batch.commands()[1..] {
        out.kv("cli", command);
    }

    let cli = installation.cli_script();
    let cli_arg = cli.to_string_lossy();
    let status = runner
        .stream(cli_arg.as_ref(), &[], Some(&batch.as_input()), |line| {
            out.line(line);
        })
        .await
        .map_err(|reason| RunError::Spawn {
            program: cli_arg.to_string(),
            reason,
        })?;

    if !status.success() {
        return Err(RunError::CliApplication {
            code: status.code().unwrap_or(1),
        });
    }
    Ok(())
}
