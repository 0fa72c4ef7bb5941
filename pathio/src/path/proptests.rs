//! Property-based tests for path handling.
//!
//! Note: the normalize and resolver modules already carry inline
//! property tests. This suite runs a larger case count over the
//! composed pipeline: normalization through resolution through the
//! abstract pathname invariant.

use std::sync::Arc;

use proptest::prelude::*;

use super::file::AbstractPath;
use super::normalize::normalize;
use super::resolver::PathResolver;
use crate::error::Result;
use crate::fs::FsProbe;

/// A fake probe that treats a fixed set of paths as directories and
/// reports a fixed working directory.
#[derive(Debug)]
struct FakeProbe {
    cwd: String,
    directories: Vec<String>,
}

impl FsProbe for FakeProbe {
    fn exists(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d == path)
    }

    fn is_file(&self, _path: &str) -> bool {
        false
    }

    fn is_directory(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d == path)
    }

    fn byte_length(&self, _path: &str) -> u64 {
        0
    }

    fn current_dir(&self) -> Result<String> {
        Ok(self.cwd.clone())
    }
}

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ],
        1..=6,
    )
    .prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..=6).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent over mixed separator spellings
    #[test]
    fn pipeline_normalization_idempotent(path in relative_path_strategy()) {
        let spelled = path.replace('/', "\\");
        let once = normalize(&spelled);
        prop_assert_eq!(normalize(&once), once);
    }

    // Resolution output is a fixed point of normalization
    #[test]
    fn resolution_output_is_canonical(
        parent in absolute_path_strategy(),
        child in relative_path_strategy(),
    ) {
        let probe = Arc::new(FakeProbe {
            cwd: "/work".to_string(),
            directories: vec![parent.clone()],
        });
        let resolver = PathResolver::new(probe);
        let resolved = resolver.resolve(&parent, &child);
        prop_assert_eq!(normalize(&resolved), resolved.clone());
    }

    // The AbstractPath invariant: absolute == resolve(base, normalize(raw))
    #[test]
    fn abstract_path_invariant(
        base in absolute_path_strategy(),
        raw in relative_path_strategy(),
    ) {
        let probe = Arc::new(FakeProbe {
            cwd: base.clone(),
            directories: vec![base.clone()],
        });
        let resolver = PathResolver::new(Arc::clone(&probe) as Arc<dyn FsProbe>);
        let expected = resolver.resolve(&base, &normalize(&raw));

        let path = AbstractPath::new(&raw, probe).unwrap();
        prop_assert_eq!(path.absolute_path(), expected.as_str());
        prop_assert_eq!(path.path(), raw.as_str());
    }

    // An absolute raw path resolves independently of the working directory
    #[test]
    fn absolute_raw_ignores_working_directory(
        cwd_a in absolute_path_strategy(),
        cwd_b in absolute_path_strategy(),
        raw in absolute_path_strategy(),
    ) {
        let probe_a = Arc::new(FakeProbe { cwd: cwd_a, directories: vec![] });
        let probe_b = Arc::new(FakeProbe { cwd: cwd_b, directories: vec![] });

        let from_a = AbstractPath::new(&raw, probe_a).unwrap();
        let from_b = AbstractPath::new(&raw, probe_b).unwrap();
        prop_assert_eq!(from_a.absolute_path(), from_b.absolute_path());
    }
}
