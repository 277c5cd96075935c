//! Unpacking a located distribution archive.

use std::path::{Path, PathBuf};

use crate::command_runner::CommandRunner;
use crate::output::OutputContext;

use super::error::RunError;

/// Extract `archive` into its parent directory with `unzip -o`, overwriting
/// existing entries, and return the new installation root.
///
/// The root is derived from the archive's own name (the `.zip` suffix
/// stripped) — the filesystem is not re-scanned to discover what the tool
/// produced.
///
/// # Errors
///
/// Returns [`RunError::Spawn`] if `unzip` cannot be run and
/// [`RunError::Extraction`] if it exits non-zero.
pub async fn extract_server(
    archive: &Path,
    runner: &impl CommandRunner,
    out: &OutputContext,
) -> Result<PathBuf, RunError> {
    out.info(&format!("    Found: {}", archive.display()));

    let dest = archive.parent().unwrap_or_else(|| Path::new("."));
    let archive_arg = archive.to_string_lossy();
    let dest_arg = dest.to_string_lossy();

    let output = runner
        .run("unzip", &["-o", archive_arg.as_ref(), "-d", dest_arg.as_ref()])
        .await
        .map_err(|reason| RunError::Spawn {
            program: "unzip".to_string(),
            reason,
        })?;

    if !output.status.success() {
        return Err(RunError::Extraction {
            archive: archive.to_path_buf(),
            code: output.status.code().unwrap_or(1),
        });
    }

    Ok(archive.with_extension(""))
}
