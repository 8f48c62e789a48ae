//! Integration tests for summary determinism

use super::test_utils::write_tree;
use dirsum::summarize;
use dirsum::tree::{compare, TreeSummarizer};
use std::fs;
use tempfile::TempDir;

/// Test that the same filesystem produces the same aggregate
#[test]
fn test_repeated_runs_identical() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[("file1.txt", b"content1"), ("dir1/file2.txt", b"content2")],
    );

    let first = summarize(temp_dir.path()).unwrap();
    let second = summarize(temp_dir.path()).unwrap();

    assert_eq!(first, second);
}

/// Same file set created in opposite orders, in differently named roots
#[test]
fn test_creation_order_does_not_matter() {
    let files: Vec<(String, Vec<u8>)> = (0..50)
        .map(|i| (format!("d{}/f{:02}.txt", i % 5, i), format!("content {}", i).into_bytes()))
        .collect();

    let forward = TempDir::new().unwrap();
    for (name, contents) in &files {
        write_tree(forward.path(), &[(name.as_str(), contents.as_slice())]);
    }

    let backward = TempDir::new().unwrap();
    for (name, contents) in files.iter().rev() {
        write_tree(backward.path(), &[(name.as_str(), contents.as_slice())]);
    }

    let a = summarize(forward.path()).unwrap();
    let b = summarize(backward.path()).unwrap();

    assert_eq!(a.aggregate_digest(), b.aggregate_digest());
    assert!(compare(&a, &b).is_clean());
}

/// Modification times and permissions are not part of the digest
#[test]
fn test_metadata_changes_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("a.txt", b"stable")]);
    let before = summarize(temp_dir.path()).unwrap();

    let path = temp_dir.path().join("a.txt");
    let contents = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    fs::write(&path, contents).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&path, perms).unwrap();

    let after = summarize(temp_dir.path()).unwrap();
    assert_eq!(before.aggregate_digest(), after.aggregate_digest());
}

#[test]
fn test_content_change_changes_aggregate() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("test.txt", b"content1")]);
    let before = summarize(temp_dir.path()).unwrap();

    fs::write(temp_dir.path().join("test.txt"), "content2").unwrap();
    let after = summarize(temp_dir.path()).unwrap();

    assert_ne!(before.aggregate_digest(), after.aggregate_digest());
}

#[test]
fn test_file_addition_changes_aggregate() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("file1.txt", b"content")]);
    let before = summarize(temp_dir.path()).unwrap();

    write_tree(temp_dir.path(), &[("file2.txt", b"content")]);
    let after = summarize(temp_dir.path()).unwrap();

    assert_ne!(before.aggregate_digest(), after.aggregate_digest());
}

/// Empty directories contribute nothing
#[test]
fn test_empty_directory_addition_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("file1.txt", b"content")]);
    let before = summarize(temp_dir.path()).unwrap();

    fs::create_dir_all(temp_dir.path().join("empty").join("nested")).unwrap();
    let after = summarize(temp_dir.path()).unwrap();

    assert_eq!(before, after);
}

/// The aggregate covers contents only: a rename that keeps the sort order
/// leaves it unchanged, while swapping contents between names changes it.
#[test]
fn test_aggregate_covers_contents_not_names() {
    let original = TempDir::new().unwrap();
    write_tree(original.path(), &[("a.txt", b"1"), ("b.txt", b"2")]);

    let renamed = TempDir::new().unwrap();
    write_tree(renamed.path(), &[("first.txt", b"1"), ("second.txt", b"2")]);

    let swapped = TempDir::new().unwrap();
    write_tree(swapped.path(), &[("a.txt", b"2"), ("b.txt", b"1")]);

    let original = summarize(original.path()).unwrap();
    let renamed = summarize(renamed.path()).unwrap();
    let swapped = summarize(swapped.path()).unwrap();

    assert_eq!(original.aggregate_digest(), renamed.aggregate_digest());
    assert_ne!(original.aggregate_digest(), swapped.aggregate_digest());
}

#[test]
fn test_parallel_summary_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..200 {
        write_tree(
            temp_dir.path(),
            &[(
                format!("level{}/sub{}/file{}.dat", i % 4, i % 7, i).as_str(),
                vec![(i % 251) as u8; i * 13].as_slice(),
            )],
        );
    }

    let sequential = TreeSummarizer::default().summarize(temp_dir.path()).unwrap();
    for jobs in [2, 3, 8] {
        let parallel = TreeSummarizer::default()
            .with_jobs(jobs)
            .with_batch_size(17)
            .summarize(temp_dir.path())
            .unwrap();
        assert_eq!(sequential, parallel, "jobs = {}", jobs);
    }
}

/// Names that share a display label still fold in one fixed order
#[cfg(target_os = "linux")]
#[test]
fn test_same_label_names_in_either_creation_order() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let names: [&[u8]; 4] = [
        "caf\u{00e9}".as_bytes(),
        "cafe\u{0301}".as_bytes(),
        b"raw\xff",
        b"raw\xfe",
    ];

    let create = |order: &[&[u8]]| {
        let dir = TempDir::new().unwrap();
        for name in order {
            fs::write(dir.path().join(OsStr::from_bytes(name)), name).unwrap();
        }
        dir
    };

    let mut reversed = names;
    reversed.reverse();
    let forward = create(&names);
    let backward = create(&reversed);

    let a = summarize(forward.path()).unwrap();
    let b = summarize(backward.path()).unwrap();

    assert_eq!(a.file_count(), 4);
    assert_eq!(a.aggregate_digest(), b.aggregate_digest());
    assert!(compare(&a, &b).is_clean());

    let keys: Vec<&[u8]> = a.files().iter().map(|f| f.key()).collect();
    let mut sorted = names.to_vec();
    sorted.sort();
    assert_eq!(keys, sorted);
}
