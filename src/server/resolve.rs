//! Locating an installed server directory or a distribution archive.
//!
//! Both locators are read-only filesystem queries with deterministic
//! precedence: search roots in order, then name prefixes in order, then
//! entry names lexicographically. The first match wins — no scoring.

use std::path::{Path, PathBuf};

use super::config::ServerConfig;
use super::error::RunError;

/// Build-output directories searched for a server, in precedence order.
/// Each is searched one level under its `target/` subdirectory.
pub const SEARCH_ROOTS: [&str; 2] = ["build", "dist"];

/// Accepted distribution name prefixes, in precedence order.
pub const NAME_PREFIXES: [&str; 2] = ["wildfly", "jboss-eap"];

/// Launcher script, relative to an installation root.
pub const LAUNCHER_SCRIPT: &str = "bin/standalone.sh";

/// Management CLI script, relative to an installation root.
pub const CLI_SCRIPT: &str = "bin/jboss-cli.sh";

/// Runtime configuration file holding the debug-agent setting.
pub const DEBUG_CONF: &str = "bin/standalone.conf";

/// A resolved, on-disk server installation ready to configure and launch.
#[derive(Debug, Clone)]
pub struct Installation {
    pub root: PathBuf,
    pub config: ServerConfig,
}

impl Installation {
    #[must_use]
    pub fn launcher_script(&self) -> PathBuf {
        self.root.join(LAUNCHER_SCRIPT)
    }

    #[must_use]
    pub fn cli_script(&self) -> PathBuf {
        self.root.join(CLI_SCRIPT)
    }

    #[must_use]
    pub fn debug_conf(&self) -> PathBuf {
        self.root.join(DEBUG_CONF)
    }

    /// Check the fixed-layout invariant: both executables must exist under
    /// the root once resolution completes.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Resolution`] naming the first missing script.
    pub fn validate(&self) -> Result<(), RunError> {
        for script in [LAUNCHER_SCRIPT, CLI_SCRIPT] {
            if !self.root.join(script).is_file() {
                return Err(RunError::Resolution(format!(
                    "{} is missing {script}",
                    self.root.display()
                )));
            }
        }
        Ok(())
    }
}

/// Find an already-extracted server directory under `<base>/<root>/target`.
///
/// A directory qualifies when its name starts with an accepted prefix and it
/// contains the launcher script. Returns `None` when the search space is
/// absent or exhausted — that is "not found", not an error.
#[must_use]
pub fn find_server_dir(base: &Path, roots: &[&str], prefixes: &[&str]) -> Option<PathBuf> {
    for root in roots {
        let parent = base.join(root).join("target");
        let entries = sorted_entries(&parent);
        for prefix in prefixes {
            for entry in &entries {
                if file_name_starts_with(entry, prefix)
                    && entry.is_dir()
                    && entry.join(LAUNCHER_SCRIPT).is_file()
                {
                    return Some(entry.clone());
                }
            }
        }
    }
    None
}

/// Find a distribution archive (`<prefix>*.zip`) under `<base>/<root>/target`.
#[must_use]
pub fn find_server_archive(base: &Path, roots: &[&str], prefixes: &[&str]) -> Option<PathBuf> {
    for root in roots {
        let parent = base.join(root).join("target");
        let entries = sorted_entries(&parent);
        for prefix in prefixes {
            for entry in &entries {
                if file_name_starts_with(entry, prefix)
                    && entry.extension().is_some_and(|ext| ext == "zip")
                    && entry.is_file()
                {
                    return Some(entry.clone());
                }
            }
        }
    }
    None
}

/// List a directory's entries sorted by file name, so results do not depend
/// on filesystem iteration order. An unreadable or absent directory yields
/// an empty list.
fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let Ok(read) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut entries: Vec<PathBuf> = read.filter_map(Result::ok).map(|e| e.path()).collect();
    entries.sort();
    entries
}

fn file_name_starts_with(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(prefix))
}
