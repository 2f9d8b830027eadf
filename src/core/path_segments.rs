//! Splitting paths into segments and cutting them around a named segment.

use std::path::MAIN_SEPARATOR;

/// Splits `path` on the OS separator after trimming leading and trailing
/// separators.
///
/// An empty input yields a single empty segment.
pub fn split_path(path: &str) -> Vec<String> {
    path.trim_matches(MAIN_SEPARATOR)
        .split(MAIN_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Drops the segments before the rightmost occurrence of `anchor`.
///
/// With `keep_after` the anchor itself is dropped too. When `anchor` is not
/// present the input is returned unchanged.
pub fn trim_before<'a, S: AsRef<str>>(segments: &'a [S], anchor: &str, keep_after: bool) -> &'a [S] {
    match segments.iter().rposition(|segment| segment.as_ref() == anchor) {
        Some(idx) if keep_after => &segments[idx + 1..],
        Some(idx) => &segments[idx..],
        None => segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn native(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_split_path_trims_separators() {
        assert_eq!(split_path(&native("/a/b/c/")), vec!["a", "b", "c"]);
        assert_eq!(split_path(&native("a/b")), vec!["a", "b"]);
        assert_eq!(split_path(&native("///a//")), vec!["a"]);
    }

    #[test]
    fn test_split_path_empty_input() {
        assert_eq!(split_path(""), vec![""]);
        assert_eq!(split_path(&native("/")), vec![""]);
    }

    #[test]
    fn test_split_path_keeps_inner_empty_segments() {
        assert_eq!(split_path(&native("a//b")), vec!["a", "", "b"]);
    }

    #[test]
    fn test_trim_before_uses_rightmost_anchor() {
        let segments = ["a", "b", "a", "c"];
        assert_eq!(trim_before(&segments, "a", false), &["a", "c"]);
        assert_eq!(trim_before(&segments, "a", true), &["c"]);
    }

    #[test]
    fn test_trim_before_missing_anchor() {
        let segments = ["a", "b", "c"];
        assert_eq!(trim_before(&segments, "z", false), &segments);
        assert_eq!(trim_before(&segments, "z", true), &segments);
    }

    #[test]
    fn test_trim_before_anchor_is_last() {
        let segments = vec!["home".to_string(), "user".to_string(), "src".to_string()];
        assert!(trim_before(&segments, "src", true).is_empty());
        assert_eq!(trim_before(&segments, "src", false), &["src".to_string()]);
    }

    #[test]
    fn test_split_then_trim() {
        let segments = split_path(&native("/home/user/projects/app/src/main.rs"));
        assert_eq!(trim_before(&segments, "projects", true), &["app", "src", "main.rs"]);
    }

    proptest! {
        #[test]
        fn prop_split_path_has_no_empty_ends(parts in prop::collection::vec("[a-z]{1,6}", 1..6)) {
            let joined = format!("{sep}{}{sep}", parts.join(&MAIN_SEPARATOR.to_string()), sep = MAIN_SEPARATOR);
            let segments = split_path(&joined);
            prop_assert!(!segments.first().unwrap().is_empty());
            prop_assert!(!segments.last().unwrap().is_empty());
            prop_assert_eq!(segments, parts);
        }
    }
}
