//! Unit tests for the best-effort installation cleaner.

#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;

use startserver::output::OutputContext;
use startserver::server::clean_server;

fn quiet() -> OutputContext {
    OutputContext::new(true, true)
}

#[test]
fn removes_a_nested_tree_children_first() {
    let base = tempfile::tempdir().expect("tempdir");
    let root = base.path().join("wildfly-30");
    std::fs::create_dir_all(root.join("modules/system/layers")).expect("deep dirs");
    std::fs::write(root.join("modules/system/layers/base.txt"), "x").expect("leaf");
    std::fs::write(root.join("modules/module.xml"), "x").expect("file");
    std::fs::write(root.join("README.txt"), "x").expect("file");

    // remove_dir (not remove_dir_all) is used per entry, so full removal of
    // a depth-3 tree only succeeds when every child went before its parent.
    clean_server(&root, &quiet());
    assert!(!root.exists());
}

/// Root bypasses permission checks, so the write-protected fixture below
/// cannot force a failure for it.
fn running_as_root() -> bool {
    use std::os::unix::fs::MetadataExt;
    std::fs::metadata("/proc/self").is_ok_and(|m| m.uid() == 0)
}

#[test]
fn a_failed_deletion_does_not_stop_the_sweep() {
    if running_as_root() {
        return;
    }
    let base = tempfile::tempdir().expect("tempdir");
    let root = base.path().join("wildfly-30");
    std::fs::create_dir_all(root.join("locked")).expect("dirs");
    std::fs::write(root.join("a.txt"), "x").expect("file");
    std::fs::write(root.join("locked/pinned.txt"), "x").expect("file");
    std::fs::write(root.join("z.txt"), "x").expect("file");

    // A write-protected directory makes its child undeletable.
    let locked = root.join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555))
        .expect("chmod");

    clean_server(&root, &quiet());

    // Both siblings were still attempted and removed.
    assert!(!root.join("a.txt").exists());
    assert!(!root.join("z.txt").exists());
    // The pinned file and its ancestors survive for the next resolution.
    assert!(locked.join("pinned.txt").exists());
    assert!(root.exists());

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
        .expect("chmod back");
}
