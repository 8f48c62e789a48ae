//! Integration tests for the abort-on-first-fault policy

use super::test_utils::write_tree;
use dirsum::tree::TreeSummarizer;
use dirsum::{summarize, SummaryError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    match summarize(&missing) {
        Err(SummaryError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_file_root() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("plain.txt", b"x")]);
    let file = temp_dir.path().join("plain.txt");

    match summarize(&file) {
        Err(SummaryError::NotADirectory { path }) => assert_eq!(path, file),
        other => panic!("expected NotADirectory, got {:?}", other),
    }
}

#[test]
fn test_file_deleted_between_enumeration_and_read() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("keep.txt", b"k"), ("sub/victim.txt", b"v")]);

    let summarizer = TreeSummarizer::default();
    let candidates = summarizer.enumerate(root).unwrap();
    assert_eq!(candidates.len(), 2);
    fs::remove_file(root.join("sub").join("victim.txt")).unwrap();

    let err = summarizer.aggregate(root, &candidates).unwrap_err();
    assert!(matches!(err, SummaryError::FileVanished { .. }));
    assert_eq!(err.path(), root.join("sub").join("victim.txt"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_read_failure() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", b"a"), ("secret.txt", b"s")]);
    let secret = root.join("secret.txt");
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read regardless of mode bits
    if fs::read(&secret).is_ok() {
        return;
    }

    match summarize(root) {
        Err(SummaryError::ReadFailure { path, .. }) => assert_eq!(path, secret),
        other => panic!("expected ReadFailure, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_read_failure() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", b"a")]);
    let link = root.join("loop");
    symlink(&link, &link).unwrap();

    match summarize(root) {
        Err(SummaryError::ReadFailure { path, source }) => {
            assert_eq!(path, link);
            assert_ne!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected ReadFailure, got {:?}", other),
    }
}
