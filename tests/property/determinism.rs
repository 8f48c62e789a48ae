//! Property-based tests for determinism guarantees

use dirsum::summarize;
use dirsum::tree::{hasher, Accumulator, Algorithm};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    btree_map("[a-e]{1,3}(/[a-e]{1,3})?", vec(any::<u8>(), 0..64), 0..12)
}

/// Drop entries that would need a path to be both a file and a directory.
fn without_conflicts(files: BTreeMap<String, Vec<u8>>) -> BTreeMap<String, Vec<u8>> {
    let dirs: Vec<String> = files
        .keys()
        .filter_map(|k| k.split_once('/').map(|(d, _)| d.to_string()))
        .collect();
    files
        .into_iter()
        .filter(|(k, _)| !dirs.contains(k))
        .collect()
}

fn write_all<'a>(root: &Path, files: impl Iterator<Item = (&'a String, &'a Vec<u8>)>) {
    for (name, contents) in files {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Creation order never leaks into the aggregate
    #[test]
    fn test_aggregate_independent_of_creation_order(files in tree_strategy()) {
        let files = without_conflicts(files);

        let forward = TempDir::new().unwrap();
        write_all(forward.path(), files.iter());
        let backward = TempDir::new().unwrap();
        write_all(backward.path(), files.iter().rev());

        let a = summarize(forward.path()).unwrap();
        let b = summarize(backward.path()).unwrap();

        prop_assert_eq!(a.aggregate_digest(), b.aggregate_digest());
        prop_assert_eq!(a.files().len(), files.len());
    }

    /// The aggregate is the fold of file contents in byte-wise path order
    #[test]
    fn test_aggregate_is_sorted_content_fold(files in tree_strategy()) {
        let files = without_conflicts(files);

        let temp_dir = TempDir::new().unwrap();
        write_all(temp_dir.path(), files.iter());
        let result = summarize(temp_dir.path()).unwrap();

        // BTreeMap<String, _> iterates in byte-wise key order
        let mut acc = Accumulator::new(Algorithm::Sha256);
        for contents in files.values() {
            acc.update(contents);
        }
        prop_assert_eq!(*result.aggregate_digest(), acc.finalize());

        for (record, (name, contents)) in result.files().iter().zip(files.iter()) {
            prop_assert_eq!(record.key(), name.as_bytes());
            prop_assert_eq!(record.size(), contents.len() as u64);
            prop_assert_eq!(*record.digest(), hasher::digest(Algorithm::Sha256, contents));
        }
    }
}

/// Same content always digests the same; different content differs
#[test]
fn test_digest_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<Vec<u8>>(), any::<Vec<u8>>()), |(content1, content2)| {
            let hash1 = hasher::digest(Algorithm::Sha256, &content1);
            let hash2 = hasher::digest(Algorithm::Sha256, &content2);

            if content1 == content2 {
                prop_assert_eq!(hash1, hash2);
            } else {
                prop_assert_ne!(hash1, hash2);
            }

            Ok(())
        })
        .unwrap();
}
