//! Pathname normalization.
//!
//! This module provides the pure string transform that turns an
//! arbitrary, possibly malformed pathname into canonical form:
//! - Converting every `\` separator to `/`
//! - Collapsing duplicate separators and `.` segments
//! - Folding `..` segments against preceding real segments
//! - Preserving a leading scheme or drive prefix verbatim
//!
//! Normalization is purely lexical: it never consults the filesystem
//! and never fails, since every pathname string has a defined canonical
//! form.

/// Convert the given pathname string to normal form.
///
/// If the string is already in normal form then it is returned
/// unchanged. The canonical form uses `/` as the only separator,
/// contains no empty or `.` segments, and has every `..` segment
/// collapsed against a preceding real segment where one exists. A
/// leading `..` with nothing to collapse against is preserved. A
/// leading `scheme://` or drive prefix is kept verbatim and excluded
/// from dot-collapsing.
///
/// Relative pathnames normalize to an explicit `./` seed, so the
/// canonical form always states where the pathname is anchored.
///
/// # Examples
///
/// ```
/// use pathio::path::normalize::normalize;
///
/// assert_eq!(normalize("/a/b/../c"), "/a/c");
/// assert_eq!(normalize("/a/./b"), "/a/b");
/// assert_eq!(normalize("a\\b\\c"), "./a/b/c");
/// assert_eq!(normalize("../a"), "../a");
/// assert_eq!(normalize(""), "/");
/// assert_eq!(normalize("scheme://a/../b"), "scheme://b");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let path = path.trim().replace('\\', "/");

    let (prefix, rest) = match split_scheme(&path) {
        Some((scheme, rooted)) => (format!("{scheme}:/"), rooted),
        None => (String::new(), path),
    };

    let mut acc: Option<String> = None;
    for segment in rest.split('/') {
        acc = Some(match acc {
            None => seed(segment),
            Some(folded) => fold(folded, segment),
        });
    }

    // The fold always leaves exactly one trailing separator.
    let mut folded = acc.unwrap_or_default();
    folded.pop();

    if folded.is_empty() {
        format!("{prefix}/")
    } else {
        format!("{prefix}{folded}")
    }
}

/// Split a leading `letters://rest` form into the scheme letters and a
/// rooted remainder. The remainder must be non-empty for the prefix to
/// count as a scheme.
fn split_scheme(path: &str) -> Option<(&str, String)> {
    let letters = path
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .count();
    if letters == 0 {
        return None;
    }
    let remainder = path[letters..].strip_prefix("://")?;
    if remainder.is_empty() {
        return None;
    }
    Some((&path[..letters], format!("/{remainder}")))
}

/// Seed the fold accumulator with the first segment.
///
/// `""`, `"."`, `".."` and drive markers (second character `:`) are
/// kept verbatim; any other first segment is anchored with `./`.
fn seed(segment: &str) -> String {
    let is_drive_marker = segment.chars().nth(1) == Some(':');
    if segment.is_empty() || segment == "." || segment == ".." || is_drive_marker {
        collapse(&format!("{segment}/"))
    } else {
        collapse(&format!("./{segment}/"))
    }
}

/// Fold one segment into the accumulator.
///
/// The accumulator always ends in `/`. A `..` collapses the last real
/// directory name, unless nothing real precedes it: collapsing past an
/// unresolved `..` appends another `..` literally, and climbing above
/// `/` itself records a doubled-root marker `//`.
fn fold(acc: String, segment: &str) -> String {
    match segment {
        "" | "." => acc,
        ".." if acc.ends_with("/../") => format!("{acc}../"),
        ".." if acc == "../" => String::from("../../"),
        ".." if acc == "./" => String::from("../"),
        ".." if acc == "/" => String::from("//"),
        ".." => collapse(&format!("{}/", dirname(&acc))),
        _ => collapse(&format!("{acc}{segment}/")),
    }
}

/// Collapse any run of repeated `/` to a single separator.
fn collapse(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_separator = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_separator {
                out.push(c);
            }
            prev_separator = true;
        } else {
            prev_separator = false;
            out.push(c);
        }
    }
    out
}

/// Return the directory portion of a pathname string.
///
/// Trailing separators are ignored; a pathname without any separator
/// has the directory `.`, and the root is its own directory.
pub(crate) fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_root() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_backslashes_become_slashes() {
        assert_eq!(normalize("a\\b\\c"), normalize("a/b/c"));
        assert_eq!(normalize("\\a\\b"), "/a/b");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize("  /a/b "), "/a/b");
    }

    #[test]
    fn test_relative_seed_is_anchored() {
        assert_eq!(normalize("a"), "./a");
        assert_eq!(normalize("a/b/c"), "./a/b/c");
    }

    #[test]
    fn test_verbatim_seeds() {
        assert_eq!(normalize("."), ".");
        assert_eq!(normalize(".."), "..");
        assert_eq!(normalize("C:/x"), "C:/x");
    }

    #[test]
    fn test_dot_segments_are_dropped() {
        assert_eq!(normalize("/a/./b"), "/a/b");
        assert_eq!(normalize("./a/././b"), "./a/b");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(normalize("/a//b"), "/a/b");
        assert_eq!(normalize("/a///b////c"), "/a/b/c");
        assert_eq!(normalize("/a/b/"), "/a/b");
    }

    #[test]
    fn test_parent_collapses_real_segment() {
        assert_eq!(normalize("/a/b/../c"), "/a/c");
        assert_eq!(normalize("/a/b/c/../../d"), "/a/d");
        assert_eq!(normalize("a/b/.."), "./a");
    }

    #[test]
    fn test_leading_parent_is_preserved() {
        assert_eq!(normalize("../a"), "../a");
        assert_eq!(normalize("../../a"), "../../a");
    }

    #[test]
    fn test_parent_cannot_collapse_unresolved_parent() {
        assert_eq!(normalize("../.."), "../..");
        assert_eq!(normalize("x/../../y"), "../y");
        assert_eq!(normalize("a/b/../../.."), "..");
    }

    #[test]
    fn test_parent_from_current_dir_seed() {
        assert_eq!(normalize("./.."), "..");
    }

    #[test]
    fn test_climbing_above_root() {
        // The doubled-root marker collapses away once the fold finishes.
        assert_eq!(normalize("/.."), "/");
        assert_eq!(normalize("/../a"), "/a");
        assert_eq!(normalize("/../.."), "/");
    }

    #[test]
    fn test_scheme_prefix_preserved_verbatim() {
        assert_eq!(normalize("scheme://a/../b"), "scheme://b");
        assert_eq!(normalize("file://x/./y"), "file://x/y");
        // A scheme whose remainder collapses to nothing is the one
        // known exception to idempotence: "scheme://" has an empty
        // remainder, so a second pass reads it as ordinary content.
        assert_eq!(normalize("scheme://a/.."), "scheme://");
        assert_eq!(normalize("scheme://"), "./scheme:");
    }

    #[test]
    fn test_scheme_requires_remainder() {
        // A bare "scheme://" is ordinary content, not a prefix.
        assert_eq!(normalize("scheme://"), "./scheme:");
    }

    #[test]
    fn test_drive_marker_excluded_from_collapsing() {
        assert_eq!(normalize("C:/x/../y"), "C:/y");
        assert_eq!(normalize("C:\\x\\..\\y"), "C:/y");
    }

    #[test]
    fn test_idempotence_on_fixed_cases() {
        for input in [
            "", "/", ".", "..", "a", "../a", "/a/b/../c", "C:/x/../y",
            "scheme://a/../b", "a\\b\\c", "/a//b/./c/..",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/a/b/"), "/a");
        assert_eq!(dirname("/a/b"), "/a");
        assert_eq!(dirname("/a/"), "/");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("//"), "/");
        assert_eq!(dirname("./a/"), ".");
        assert_eq!(dirname("a"), ".");
        assert_eq!(dirname("C:/a/"), "C:");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy for rooted paths mixing real, dot and parent segments
        fn dotted_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(String::new()),
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        fn any_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(s in any_path_strategy()) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once);
            }

            /// Rooted input stays rooted
            #[test]
            fn normalize_rooted_stays_rooted(s in dotted_path_strategy()) {
                prop_assert!(normalize(&s).starts_with('/'));
            }

            /// Rooted output has no empty, "." or ".." segments
            #[test]
            fn normalize_rooted_no_dot_segments(s in dotted_path_strategy()) {
                let normalized = normalize(&s);
                if normalized != "/" {
                    for segment in normalized[1..].split('/') {
                        prop_assert!(!segment.is_empty());
                        prop_assert_ne!(segment, ".");
                        prop_assert_ne!(segment, "..");
                    }
                }
            }

            /// Output never contains a backslash
            #[test]
            fn normalize_single_separator_convention(s in any_path_strategy()) {
                let with_backslashes = s.replace('/', "\\");
                prop_assert!(!normalize(&with_backslashes).contains('\\'));
                prop_assert_eq!(normalize(&with_backslashes), normalize(&s));
            }
        }
    }
}
