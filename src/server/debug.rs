//! Rewriting `bin/standalone.conf` to toggle remote-debug attachment.

use super::error::RunError;
use super::resolve::Installation;

/// Rewrite the runtime configuration so exactly one debug-agent line is
/// present, with the suspend flag matching `suspend`.
///
/// Any existing `agentlib` line is dropped before the new one is appended,
/// so repeated runs converge on the same file content. The file is written
/// back in full with the agent line on its own line and a single trailing
/// newline.
///
/// # Errors
///
/// Returns [`RunError::ConfigWrite`] if the file cannot be read or written;
/// the server must not be started with an unknown debug state.
pub fn patch_debug_config(installation: &Installation, suspend: bool) -> Result<(), RunError> {
    let path = installation.debug_conf();

    let text = std::fs::read_to_string(&path).map_err(|source| RunError::ConfigWrite {
        path: path.clone(),
        source,
    })?;

    let mut patched = text
        .lines()
        .filter(|line| !line.contains("agentlib"))
        .collect::<Vec<_>>()
        .join("\n");
    if !patched.is_empty() {
        patched.push('\n');
    }
    patched.push_str(&format!(
        "JAVA_OPTS=\"$JAVA_OPTS -agentlib:jdwp=transport=dt_socket,address=8787,server=y,suspend={}\"\n",
        if suspend { "y" } else { "n" }
    ));

    std::fs::write(&path, patched).map_err(|source| RunError::ConfigWrite { path, source })
}
