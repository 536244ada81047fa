//! Property tests for bundle ordering on a real file system.

use std::collections::BTreeMap;

use proptest::prelude::*;
use tempfile::TempDir;

use greedy_build::{
    BuildMetadata, BundleOptions, BundleUseCase, GlobPatternList, HeaderTemplate, LocalFs,
    OutputTarget,
};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("_[a-z0-9]{1,8}").unwrap()
}

fn content() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..64)
}

fn bundle(root: &TempDir, patterns: &[&str]) -> Vec<u8> {
    let options = BundleOptions::new(
        root.path(),
        GlobPatternList::new(patterns.iter().copied()).unwrap(),
        OutputTarget::new("dist", "_greedy.scss").unwrap(),
    )
    .with_header(HeaderTemplate::new(""));

    let result = BundleUseCase::new(LocalFs::new(), BuildMetadata::new("1.0.0", "Greedy"))
        .execute(&options)
        .unwrap();
    std::fs::read(result.output).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Within one pattern, files are joined in lexical order, byte for byte.
    #[test]
    fn property_single_pattern_sorted(
        files in proptest::collection::btree_map(file_name(), content(), 0..8),
    ) {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("src")).unwrap();
        for (name, bytes) in &files {
            std::fs::write(root.path().join("src").join(format!("{}.scss", name)), bytes).unwrap();
        }

        let output = bundle(&root, &["./src/*.scss"]);

        let expected: Vec<u8> = files.values().flatten().copied().collect();
        prop_assert_eq!(output, expected);
    }

    /// PROPERTY: Earlier patterns always come first, regardless of names.
    #[test]
    fn property_pattern_order_wins(
        first in proptest::collection::btree_map(file_name(), content(), 1..4),
        second in proptest::collection::btree_map(file_name(), content(), 1..4),
    ) {
        let root = TempDir::new().unwrap();
        let write = |dir: &str, files: &BTreeMap<String, Vec<u8>>| {
            let dir = root.path().join(dir);
            std::fs::create_dir_all(&dir).unwrap();
            for (name, bytes) in files {
                std::fs::write(dir.join(format!("{}.scss", name)), bytes).unwrap();
            }
        };
        write("src/z", &first);
        write("src/a", &second);

        let output = bundle(&root, &["./src/z/*.scss", "./src/a/*.scss"]);

        let expected: Vec<u8> = first
            .values()
            .chain(second.values())
            .flatten()
            .copied()
            .collect();
        prop_assert_eq!(output, expected);
    }
}
