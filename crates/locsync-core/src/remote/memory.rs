//! In-memory remote, used for dry runs and tests

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{RemoteStore, StatusFilter, apply_filter};
use crate::model::Keyset;
use crate::{Error, Result};

/// A mutating call observed by [`MemoryRemote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOp {
    Create(String),
    Replace(String),
    Drop(String),
}

/// Remote store that lives for the duration of the process.
#[derive(Debug, Default)]
pub struct MemoryRemote {
    keysets: RefCell<BTreeMap<String, Keyset>>,
    ops: RefCell<Vec<RemoteOp>>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a keyset without recording an operation.
    pub fn with_keyset(self, keyset: Keyset) -> Self {
        self.keysets
            .borrow_mut()
            .insert(keyset.name().to_string(), keyset);
        self
    }

    /// Stored keyset, unfiltered.
    pub fn get(&self, name: &str) -> Option<Keyset> {
        self.keysets.borrow().get(name).cloned()
    }

    /// Mutating calls made so far, oldest first.
    pub fn operations(&self) -> Vec<RemoteOp> {
        self.ops.borrow().clone()
    }

    pub fn clear_operations(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl RemoteStore for MemoryRemote {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.keysets.borrow().keys().cloned().collect())
    }

    fn create(&self, name: &str) -> Result<()> {
        let mut keysets = self.keysets.borrow_mut();
        if keysets.contains_key(name) {
            return Err(Error::RemoteKeysetExists { name: name.into() });
        }
        keysets.insert(name.to_string(), Keyset::new(name));
        self.ops.borrow_mut().push(RemoteOp::Create(name.to_string()));
        Ok(())
    }

    fn load_keyset(&self, name: &str, filter: StatusFilter) -> Result<Keyset> {
        let keyset = self
            .keysets
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::RemoteKeysetNotFound { name: name.into() })?;
        Ok(apply_filter(keyset, filter))
    }

    fn replace(&self, keyset: &Keyset) -> Result<()> {
        let mut keysets = self.keysets.borrow_mut();
        let slot = keysets
            .get_mut(keyset.name())
            .ok_or_else(|| Error::RemoteKeysetNotFound {
                name: keyset.name().into(),
            })?;
        *slot = keyset.clone();
        self.ops
            .borrow_mut()
            .push(RemoteOp::Replace(keyset.name().to_string()));
        Ok(())
    }

    fn drop_keyset(&self, name: &str) -> Result<()> {
        if self.keysets.borrow_mut().remove(name).is_none() {
            return Err(Error::RemoteKeysetNotFound { name: name.into() });
        }
        self.ops.borrow_mut().push(RemoteOp::Drop(name.to_string()));
        Ok(())
    }
}
