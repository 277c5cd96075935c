//! Tempdir fixture builders shared across unit tests.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

/// Default content written to fixture `standalone.conf` files.
pub const CONF_FIXTURE: &str = "## Defaults\nJAVA_OPTS=\"-Xms64m -Xmx512m\"\n";

/// Create `<base>/<root>/target/<name>` with the launcher script only —
/// enough to satisfy the directory locator.
pub fn make_server_dir(base: &Path, root: &str, name: &str) -> PathBuf {
    let dir = base.join(root).join("target").join(name);
    std::fs::create_dir_all(dir.join("bin")).expect("create server dir");
    std::fs::write(dir.join("bin/standalone.sh"), "#!/bin/sh\n").expect("write launcher");
    dir
}

/// Create a complete installation fixture: launcher, management CLI, and a
/// runtime configuration file.
pub fn make_installation_dir(base: &Path, root: &str, name: &str) -> PathBuf {
    let dir = make_server_dir(base, root, name);
    std::fs::write(dir.join("bin/jboss-cli.sh"), "#!/bin/sh\n").expect("write cli");
    std::fs::write(dir.join("bin/standalone.conf"), CONF_FIXTURE).expect("write conf");
    dir
}

/// Create `<base>/<root>/target/<name>` as a plain file standing in for a
/// distribution archive.
pub fn make_archive(base: &Path, root: &str, name: &str) -> PathBuf {
    let target = base.join(root).join("target");
    std::fs::create_dir_all(&target).expect("create target dir");
    let archive = target.join(name);
    std::fs::write(&archive, b"PK").expect("write archive");
    archive
}
