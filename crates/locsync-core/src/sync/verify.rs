//! Translation coverage check

use serde::Serialize;

use crate::Result;
use crate::config::Config;
use crate::local::{LocalStore, localized_path};
use crate::model::Keyset;

/// Missing translations for one target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCoverage {
    pub language: String,
    pub total: usize,
    pub missing: usize,
}

/// Outcome of [`verify`]. Only languages with a shortfall are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub total_keys: usize,
    pub shortfalls: Vec<LanguageCoverage>,
}

impl VerifyReport {
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Process exit status for the report.
    pub fn exit_code(&self) -> i32 {
        if self.is_complete() { 0 } else { 1 }
    }
}

/// Check that every key has a non-empty value in every target language.
pub fn verify(config: &Config, local: &LocalStore) -> Result<VerifyReport> {
    let mut combined = Keyset::new("locsync.verify");
    for path in local.discover(&config.resource_files)? {
        for language in config.all_languages() {
            let file = if language == config.development_language {
                path.clone()
            } else {
                localized_path(&path, &language)
            };
            combined.merge(&local.read_keyset(&file, &language)?, false);
        }
    }
    combined.drop_empty();

    let total = combined.len();
    tracing::info!(language = %config.development_language, keys = total, "Verifying translations");

    let mut report = VerifyReport {
        total_keys: total,
        shortfalls: Vec::new(),
    };
    for language in &config.target_languages {
        let missing = combined.keys().filter(|key| !key.is_translated(language)).count();
        if missing > 0 {
            tracing::error!(language = %language, total, missing, "Translations missing");
            report.shortfalls.push(LanguageCoverage {
                language: language.clone(),
                total,
                missing,
            });
        }
    }
    Ok(report)
}
