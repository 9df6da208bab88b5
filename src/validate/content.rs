//! Content source patterns.
//!
//! Patterns are globs relative to the project root. A leading `./` is
//! stripped and backslashes are normalized so `./src/**/*.rs` matches
//! `src/app/main.rs`. Brace alternation (`*.{rs,html}`) is supported.

use crate::error::{Result, ThemeError};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled set of content patterns.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    globs: GlobSet,
    patterns: Vec<String>,
}

impl ContentMatcher {
    /// Compile content patterns.
    ///
    /// Errors name the offending entry as `content[<index>]`.
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for (idx, pattern) in patterns.iter().enumerate() {
            let normalized = normalize_pattern(pattern);
            if normalized.is_empty() {
                return Err(ThemeError::value(
                    format!("content[{}]", idx),
                    "glob pattern is empty",
                ));
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                ThemeError::value(
                    format!("content[{}]", idx),
                    format!("invalid glob pattern '{}' - {}", pattern, e),
                )
            })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|e| {
            ThemeError::value("content", format!("failed to compile content globs: {}", e))
        })?;

        Ok(Self {
            globs,
            patterns: patterns.to_vec(),
        })
    }

    /// Returns true if the relative path is matched by any pattern.
    pub fn is_match(&self, path: &str) -> bool {
        self.globs.is_match(normalize_pattern(path))
    }

    /// The first pattern (as written) that matches the path.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        self.globs
            .matches(normalize_pattern(path))
            .first()
            .and_then(|&idx| self.patterns.get(idx))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Normalize a pattern or path: forward slashes, no leading `./`.
fn normalize_pattern(raw: &str) -> String {
    let forward = raw.trim().replace('\\', "/");
    let mut rest = forward.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_brace_alternation_under_dot_prefix() {
        let matcher =
            ContentMatcher::compile(&patterns(&["./src/**/*.{rs,html,css}", "./dist/**/*.html"]))
                .unwrap();

        assert!(matcher.is_match("src/main.rs"));
        assert!(matcher.is_match("src/components/header.rs"));
        assert!(matcher.is_match("./src/style.css"));
        assert!(matcher.is_match("dist/index.html"));
        assert!(!matcher.is_match("dist/app.js"));
        assert!(!matcher.is_match("tests/main.rs"));
    }

    #[test]
    fn matching_pattern_reports_original_text() {
        let matcher =
            ContentMatcher::compile(&patterns(&["./src/**/*.rs", "./dist/**/*.html"])).unwrap();

        assert_eq!(
            matcher.matching_pattern("dist/index.html"),
            Some("./dist/**/*.html")
        );
        assert_eq!(matcher.matching_pattern("README.md"), None);
    }

    #[test]
    fn duplicate_patterns_are_harmless() {
        let matcher = ContentMatcher::compile(&patterns(&["src/**/*.rs", "src/**/*.rs"])).unwrap();
        assert!(matcher.is_match("src/lib.rs"));
    }

    #[test]
    fn windows_separators_are_normalized() {
        let matcher = ContentMatcher::compile(&patterns(&["src\\**\\*.rs"])).unwrap();
        assert!(matcher.is_match("src/lib.rs"));
        assert!(matcher.is_match("src\\lib.rs"));
    }

    #[test]
    fn invalid_glob_reports_index() {
        let err = ContentMatcher::compile(&patterns(&["src/**/*.rs", "src/[oops"])).unwrap_err();
        assert_eq!(err.path().as_deref(), Some("content[1]"));
        assert!(err.to_string().contains("invalid glob pattern"));
    }

    #[test]
    fn blank_pattern_is_rejected() {
        let err = ContentMatcher::compile(&patterns(&["./"])).unwrap_err();
        assert_eq!(err.path().as_deref(), Some("content[0]"));
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let matcher = ContentMatcher::compile(&[]).unwrap();
        assert!(matcher.is_empty());
        assert!(!matcher.is_match("src/main.rs"));
    }
}
