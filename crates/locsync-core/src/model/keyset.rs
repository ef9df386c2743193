//! Keysets: named collections of translation keys

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::key::{Key, Value};

/// Counts returned by [`Keyset::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MergeCounts {
    pub new: usize,
    pub updated: usize,
}

impl MergeCounts {
    /// Whether the merge changed the target at all.
    pub fn is_changed(&self) -> bool {
        self.new > 0 || self.updated > 0
    }
}

/// A named, mutable collection of keys with unique names.
///
/// Keys iterate in name order so rendered files are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyset {
    name: String,
    #[serde(default)]
    keys: BTreeMap<String, Key>,
}

impl Keyset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.values()
    }

    pub fn key_names(&self) -> BTreeSet<String> {
        self.keys.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Key> {
        self.keys.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Key> {
        self.keys.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains_key(name)
    }

    /// Insert a key, replacing any key with the same name.
    pub fn insert(&mut self, key: Key) -> Option<Key> {
        self.keys.insert(key.name.clone(), key)
    }

    pub fn remove(&mut self, name: &str) -> Option<Key> {
        self.keys.remove(name)
    }

    /// Merge every key of `source` into this keyset.
    ///
    /// Missing keys are inserted (counted as new). Present keys are reconciled
    /// per language, see [`Key::merge`] (counted as updated when changed).
    pub fn merge(&mut self, source: &Keyset, preserve_existing: bool) -> MergeCounts {
        let mut counts = MergeCounts::default();
        for key in source.keys() {
            match self.keys.get_mut(&key.name) {
                Some(existing) => {
                    if existing.merge(key, preserve_existing) {
                        counts.updated += 1;
                    }
                }
                None => {
                    self.keys.insert(key.name.clone(), key.clone());
                    counts.new += 1;
                }
            }
        }
        counts
    }

    /// Keep only keys whose name is in `names`. Returns how many were removed.
    pub fn retain_names(&mut self, names: &BTreeSet<String>) -> usize {
        let before = self.keys.len();
        self.keys.retain(|name, _| names.contains(name));
        before - self.keys.len()
    }

    /// Remove keys without a non-empty value in any language.
    ///
    /// Returns how many keys were dropped.
    pub fn drop_empty(&mut self) -> usize {
        let before = self.keys.len();
        self.keys.retain(|_, key| !key.is_empty());
        before - self.keys.len()
    }

    /// Give every key an entry (possibly empty) for each of `languages`.
    pub fn ensure_languages<I, S>(&mut self, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let languages: Vec<S> = languages.into_iter().collect();
        for key in self.keys.values_mut() {
            for language in &languages {
                key.values
                    .entry(language.as_ref().to_string())
                    .or_insert_with(Value::default);
            }
        }
    }

    /// Keep only the values accepted by `keep`; keys themselves stay.
    pub fn retain_values(&mut self, mut keep: impl FnMut(&Value) -> bool) {
        for key in self.keys.values_mut() {
            key.values.retain(|_, value| keep(value));
        }
    }
}

impl Extend<Key> for Keyset {
    fn extend<T: IntoIterator<Item = Key>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}
