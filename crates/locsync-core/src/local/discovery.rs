//! Glob-based discovery of project files.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use locsync_fs::NormalizedPath;

use crate::{Error, Result};

/// Matches root-relative paths against a set of glob patterns.
///
/// `*` does not cross directory separators; use `**` for that.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    set: GlobSet,
    empty: bool,
}

impl FileMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| Error::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| Error::Pattern {
            pattern: patterns
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })?;
        Ok(Self {
            set,
            empty: patterns.is_empty(),
        })
    }

    pub fn is_match(&self, relative_path: &NormalizedPath) -> bool {
        !self.empty && self.set.is_match(relative_path.as_str())
    }
}

/// Walk `root` and return matching files, root-relative and sorted.
///
/// Honours `.gitignore`; hidden directories are skipped.
pub fn discover(root: &NormalizedPath, matcher: &FileMatcher) -> Result<Vec<NormalizedPath>> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root.to_native()).require_git(false).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = NormalizedPath::new(entry.path());
        let Some(relative) = path.strip_prefix(root) else {
            continue;
        };
        if matcher.is_match(&relative) {
            files.push(relative);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_does_not_cross_directories() {
        let matcher = FileMatcher::new(&["*.strings"]).unwrap();
        assert!(matcher.is_match(&NormalizedPath::new("Main.strings")));
        assert!(!matcher.is_match(&NormalizedPath::new("en.lproj/Main.strings")));
    }

    #[test]
    fn double_star_matches_root_level() {
        let matcher = FileMatcher::new(&["**/en.lproj/*.strings"]).unwrap();
        assert!(matcher.is_match(&NormalizedPath::new("en.lproj/Main.strings")));
        assert!(matcher.is_match(&NormalizedPath::new("A/B/en.lproj/Main.strings")));
        assert!(!matcher.is_match(&NormalizedPath::new("fr.lproj/Main.strings")));
    }

    #[test]
    fn no_patterns_match_nothing() {
        let matcher = FileMatcher::new::<&str>(&[]).unwrap();
        assert!(!matcher.is_match(&NormalizedPath::new("en.lproj/Main.strings")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = FileMatcher::new(&["[unclosed"]).unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }
}
