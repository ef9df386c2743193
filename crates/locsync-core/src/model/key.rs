//! Translation keys and their per-language values

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Review state of a translated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Approved,
    #[default]
    Unapproved,
}

/// Text for one (key, language) pair. Empty text means "not translated".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Value {
    pub text: String,
    #[serde(default)]
    pub status: Status,
}

impl Value {
    pub fn new(text: impl Into<String>, status: Status) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    pub fn approved(text: impl Into<String>) -> Self {
        Self::new(text, Status::Approved)
    }

    pub fn unapproved(text: impl Into<String>) -> Self {
        Self::new(text, Status::Unapproved)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_approved(&self) -> bool {
        self.status == Status::Approved
    }
}

/// A translation unit: one name, one value per language.
///
/// Each value carries its own status, so a language present in
/// `values` always has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,

    /// Translator-facing comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default)]
    pub values: BTreeMap<String, Value>,
}

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: None,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style value insertion.
    pub fn with_value(mut self, language: impl Into<String>, value: Value) -> Self {
        self.values.insert(language.into(), value);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn value(&self, language: &str) -> Option<&Value> {
        self.values.get(language)
    }

    /// Text for `language`, empty when untranslated.
    pub fn text(&self, language: &str) -> &str {
        self.values.get(language).map_or("", |v| v.text.as_str())
    }

    pub fn set_value(&mut self, language: impl Into<String>, value: Value) {
        self.values.insert(language.into(), value);
    }

    /// True when the key has a non-empty value for `language`.
    pub fn is_translated(&self, language: &str) -> bool {
        self.values.get(language).is_some_and(|v| !v.is_empty())
    }

    /// True when no language carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(Value::is_empty)
    }

    /// Reconcile `source` into this key. Returns whether anything changed.
    ///
    /// With `preserve_existing`, a non-empty approved value already held here
    /// is never overwritten.
    pub fn merge(&mut self, source: &Key, preserve_existing: bool) -> bool {
        let mut changed = false;

        if let Some(context) = source.context.as_ref().filter(|c| !c.is_empty())
            && self.context.as_ref() != Some(context)
        {
            self.context = Some(context.clone());
            changed = true;
        }

        for (language, value) in &source.values {
            match self.values.get_mut(language) {
                Some(existing) if preserve_existing && existing.is_approved() && !existing.is_empty() => {}
                Some(existing) => {
                    if existing != value {
                        *existing = value.clone();
                        changed = true;
                    }
                }
                None => {
                    self.values.insert(language.clone(), value.clone());
                    changed = true;
                }
            }
        }

        changed
    }
}
