//! Keyset names and resource paths
//!
//! A keyset name is its resource path without the `<lang>.lproj` segment
//! and without extension: `Modules/Auth/en.lproj/Login.strings` is
//! `Modules/Auth/Login`, `en.lproj/Login.strings` is `Login`.

use locsync_fs::NormalizedPath;

/// Extension of local resource files.
pub const RESOURCE_EXTENSION: &str = "strings";

/// Suffix of per-language resource directories.
pub const LPROJ_SUFFIX: &str = ".lproj";

/// Derive a keyset name from a root-relative resource path.
pub fn keyset_name(path: &NormalizedPath) -> String {
    let stem = path.file_stem().unwrap_or_default();
    let mut dir = path.parent();
    if let Some(parent) = &dir
        && parent.file_name().is_some_and(|n| n.ends_with(LPROJ_SUFFIX))
    {
        dir = parent.parent();
    }
    match dir {
        Some(dir) if !dir.as_str().is_empty() => format!("{}/{}", dir.as_str(), stem),
        _ => stem.to_string(),
    }
}

/// Root-relative path of the `language` file for `keyset_name`.
pub fn resource_path(keyset_name: &str, language: &str) -> NormalizedPath {
    match keyset_name.rsplit_once('/') {
        Some((dir, base)) => NormalizedPath::new(format!(
            "{dir}/{language}{LPROJ_SUFFIX}/{base}.{RESOURCE_EXTENSION}"
        )),
        None => NormalizedPath::new(format!(
            "{language}{LPROJ_SUFFIX}/{keyset_name}.{RESOURCE_EXTENSION}"
        )),
    }
}

/// The sibling of `path` for another language: the same file name under
/// `<language>.lproj` instead of the current language directory.
pub fn localized_path(path: &NormalizedPath, language: &str) -> NormalizedPath {
    let name = path.file_name().unwrap_or_default();
    let mut dir = path.parent();
    if let Some(parent) = &dir
        && parent.file_name().is_some_and(|n| n.ends_with(LPROJ_SUFFIX))
    {
        dir = parent.parent();
    }
    let lproj = format!("{language}{LPROJ_SUFFIX}");
    match dir {
        Some(dir) => dir.join(&lproj).join(name),
        None => NormalizedPath::new(lproj).join(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en.lproj/Login.strings", "Login")]
    #[case("Modules/Auth/en.lproj/Login.strings", "Modules/Auth/Login")]
    #[case("Login.strings", "Login")]
    #[case("Resources/Login.strings", "Resources/Login")]
    fn keyset_name_derivation(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(keyset_name(&NormalizedPath::new(path)), expected);
    }

    #[rstest]
    #[case("Login", "fr", "fr.lproj/Login.strings")]
    #[case("Modules/Auth/Login", "de", "Modules/Auth/de.lproj/Login.strings")]
    fn resource_path_derivation(#[case] name: &str, #[case] language: &str, #[case] expected: &str) {
        assert_eq!(resource_path(name, language).as_str(), expected);
    }

    #[test]
    fn localized_path_swaps_lproj() {
        let path = NormalizedPath::new("Modules/en.lproj/Main.strings");
        assert_eq!(localized_path(&path, "fr").as_str(), "Modules/fr.lproj/Main.strings");
    }

    #[test]
    fn localized_path_keeps_extension() {
        let path = NormalizedPath::new("en.lproj/Main.xib");
        assert_eq!(localized_path(&path, "de").as_str(), "de.lproj/Main.xib");
    }
}
