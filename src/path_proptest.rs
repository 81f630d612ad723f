//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{default_local_dir, expand_tilde_with, repo_short_name};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    // ============================================================================
    // expand_tilde_with property tests
    // ============================================================================

    proptest! {
        /// Property: `~/rest` always lands under the home directory
        #[test]
        fn expand_tilde_joins_rest_to_home(rest in "[a-zA-Z0-9_.-]{1,20}(/[a-zA-Z0-9_.-]{1,20}){0,3}") {
            let home = Path::new("/home/builder");
            let expanded = expand_tilde_with(&format!("~/{}", rest), home);
            prop_assert_eq!(expanded, home.join(&rest));
        }

        /// Property: anything not starting with `~/` is returned unchanged
        #[test]
        fn expand_tilde_leaves_other_paths_alone(input in "[^~].*") {
            let expanded = expand_tilde_with(&input, Path::new("/home/builder"));
            prop_assert_eq!(expanded, PathBuf::from(&input));
        }
    }

    // ============================================================================
    // repo_short_name property tests
    // ============================================================================

    proptest! {
        /// Property: the short name never contains a slash
        #[test]
        fn short_name_has_no_slash(url in "[a-z]{2,8}://[a-z.]{1,12}(/[a-zA-Z0-9_-]{1,12}){1,4}(\\.git)?/?") {
            prop_assert!(!repo_short_name(&url).contains('/'));
        }

        /// Property: a `.git` suffix does not change the short name
        #[test]
        fn git_suffix_is_ignored(name in "[a-zA-Z0-9_-]{1,16}") {
            let with_suffix = format!("https://example.com/org/{}.git", name);
            let without_suffix = format!("https://example.com/org/{}", name);
            prop_assert_eq!(repo_short_name(&with_suffix), name.as_str());
            prop_assert_eq!(repo_short_name(&without_suffix), name.as_str());
        }
    }

    // ============================================================================
    // default_local_dir property tests
    // ============================================================================

    proptest! {
        /// Property: default checkouts sit directly under the home directory
        #[test]
        fn default_dir_is_child_of_home(suffix in "[0-9]{9}", name in "[a-zA-Z0-9_-]{1,16}") {
            let home = Path::new("/home/builder");
            let url = format!("https://example.com/org/{}.git", name);
            let dir = default_local_dir(home, &suffix, &url);
            let expected = format!("{}_{}", suffix, name);
            prop_assert_eq!(dir.parent(), Some(home));
            prop_assert_eq!(dir.file_name().and_then(|n| n.to_str()), Some(expected.as_str()));
        }
    }
}
