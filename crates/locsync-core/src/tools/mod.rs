//! External localization tools
//!
//! String extraction from sources and UI resource handling are delegated to
//! command-line tools. The engine only sees the traits below.

mod genstrings;
mod ibtool;

pub use genstrings::Genstrings;
pub use ibtool::Ibtool;

use std::ffi::OsStr;
use std::process::Command;

use locsync_fs::NormalizedPath;

use crate::model::Keyset;
use crate::{Error, Result};

/// Lazily produced keysets.
pub type KeysetIter<'a> = Box<dyn Iterator<Item = Result<Keyset>> + 'a>;

/// Scans source files for user-facing literals.
pub trait StringExtractor {
    /// Extract keysets from project-relative `files`, with values in the
    /// development language.
    fn extract(&self, files: &[NormalizedPath], development_language: &str) -> Result<KeysetIter<'_>>;
}

/// Reads and rewrites structured UI resources (`.xib`, `.storyboard`).
///
/// All paths are project-relative and name the development-language file.
pub trait UiResourceTool {
    /// Whether a `language` variant of `file` exists to extract from.
    fn is_extractable(&self, file: &NormalizedPath, language: &str) -> bool;

    /// Whether `file` carries any localizable text.
    fn is_localizable(&self, file: &NormalizedPath) -> Result<bool>;

    /// The `.strings` file holding `file`'s text in `language`.
    fn strings_path(&self, file: &NormalizedPath, language: &str) -> NormalizedPath;

    /// Export the text of the `language` variant of `file`.
    fn extract_strings(&self, file: &NormalizedPath, language: &str) -> Result<Keyset>;

    /// Add strings newly present in `file` to its `language` strings file.
    fn import_strings(&self, file: &NormalizedPath, language: &str) -> Result<()>;

    /// Write the `language` variant of `file` from its strings file.
    fn localize(&self, file: &NormalizedPath, language: &str) -> Result<()>;

    /// Content fingerprint of `file`.
    fn fingerprint(&self, file: &NormalizedPath) -> Result<String>;
}

/// Run a tool to completion, turning a spawn failure or non-zero exit into
/// [`Error::Tool`].
fn run_tool<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| Error::Tool {
            tool: program.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Tool {
            tool: program.to_string(),
            message: format!("{} ({})", stderr.trim(), output.status),
        });
    }
    tracing::trace!(tool = program, "Tool finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_tool_error() {
        let err = run_tool("locsync-no-such-tool", ["--version"]).unwrap_err();
        assert!(matches!(err, Error::Tool { ref tool, .. } if tool == "locsync-no-such-tool"));
    }
}
