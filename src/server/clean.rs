//! Best-effort recursive removal of an installation directory.

use std::path::{Path, PathBuf};

use crate::output::OutputContext;

/// Recursively delete `root` and everything under it, deepest paths first
/// so children go before their parents.
///
/// Per-entry failures are logged and do not abort the sweep; residual state
/// surfaces on the next resolution attempt instead.
pub fn clean_server(root: &Path, out: &OutputContext) {
    out.info(&format!("Cleaning server directory: {}", root.display()));

    let mut paths = Vec::new();
    collect(root, &mut paths);
    // Lexicographic order puts every parent before its children; deleting in
    // reverse satisfies filesystem ordering.
    paths.sort();

    for (path, is_dir) in paths.iter().rev() {
        let result = if *is_dir {
            std::fs::remove_dir(path)
        } else {
            std::fs::remove_file(path)
        };
        if let Err(e) = result {
            out.warn(&format!("error deleting {}: {e}", path.display()));
        }
    }
}

/// Record `dir` and everything under it. `file_type()` does not follow
/// symlinks, so a symlinked directory is removed as a link, never traversed.
fn collect(dir: &Path, paths: &mut Vec<(PathBuf, bool)>) {
    paths.push((dir.to_path_buf(), true));
    let Ok(read) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in read.filter_map(Result::ok) {
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            collect(&entry.path(), paths);
        } else {
            paths.push((entry.path(), false));
        }
    }
}
