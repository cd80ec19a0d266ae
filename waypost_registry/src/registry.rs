// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry assembly and lookup.
//!
//! ## Overview
//!
//! Contributions are collected by [`RegistryBuilder`] and validated once, at
//! [`RegistryBuilder::assemble`] time.
//! The resulting [`Registry`] maps each destination-scope key to exactly one
//! [`ComponentGetter`] and never changes afterwards.
//!
//! ## Module scoping
//!
//! Multibinding is module-scoped: one `Registry` per navigation module
//! boundary. Independent registries may carry the same key; within one
//! registry a duplicate is an assembly error.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::scope::ScopeId;
use crate::viewmodel::RetrieveContext;

/// A screen's injected component, as handed back by [`ComponentGetter::retrieve`].
///
/// Callers downcast to the concrete component type they expect.
pub type Component = Arc<dyn Any + Send + Sync>;

/// Retrieval operation implemented by every generated adapter.
///
/// `X` is the navigation executor type supplied by the host; the getter
/// passes it through to the view-model factory untouched.
///
/// `retrieve` has no error channel: registry misassembly is prevented at
/// [`RegistryBuilder::assemble`] time, and view-model materialization
/// failures belong to the embedder's factory.
pub trait ComponentGetter<X>: Send + Sync {
    /// Resolve or create the active destination's view-model and return its
    /// injected component.
    ///
    /// Idempotent for a live navigation entry: the view-model is cached in
    /// the context's [`ViewModelStore`](crate::viewmodel::ViewModelStore),
    /// not here.
    fn retrieve(&self, executor: &X, context: &RetrieveContext<'_>) -> Component;
}

/// Configuration errors surfaced at assembly time, never at lookup time.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Two contributions were made under the same destination-scope key.
    #[error("duplicate registry entry for destination scope `{scope}`")]
    DuplicateEntry {
        /// Name of the colliding scope key.
        scope: &'static str,
    },
    /// A declared key received no contribution.
    #[error("missing registry entry for expected destination scope `{scope}`")]
    MissingEntry {
        /// Name of the uncovered scope key.
        scope: &'static str,
    },
}

/// Collects adapter contributions for one module boundary.
pub struct RegistryBuilder<X> {
    entries: Vec<(ScopeId, Box<dyn ComponentGetter<X>>)>,
    expected: Vec<ScopeId>,
}

impl<X> core::fmt::Debug for RegistryBuilder<X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("entries", &self.entries.len())
            .field("expected", &self.expected.len())
            .finish_non_exhaustive()
    }
}

impl<X> Default for RegistryBuilder<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> RegistryBuilder<X> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            expected: Vec::new(),
        }
    }

    /// Contribute one getter under the given destination-scope key.
    ///
    /// Generated registration functions call this; duplicates are not
    /// rejected here but at [`RegistryBuilder::assemble`] time, so the error
    /// can name every collision deterministically.
    pub fn contribute(&mut self, key: ScopeId, getter: Box<dyn ComponentGetter<X>>) {
        self.entries.push((key, getter));
    }

    /// Declare a key that must be covered by exactly one contribution.
    pub fn expect_key(&mut self, key: ScopeId) {
        self.expected.push(key);
    }

    /// Validate and freeze the contributions into an immutable [`Registry`].
    ///
    /// Fails on the first duplicate key, then on the first declared key
    /// without a contribution. No partially assembled registry escapes.
    pub fn assemble(self) -> Result<Registry<X>, AssemblyError> {
        let mut map = BTreeMap::new();
        for (key, getter) in self.entries {
            if map.insert(key, getter).is_some() {
                return Err(AssemblyError::DuplicateEntry { scope: key.name() });
            }
        }
        for key in &self.expected {
            if !map.contains_key(key) {
                return Err(AssemblyError::MissingEntry { scope: key.name() });
            }
        }
        Ok(Registry { map })
    }
}

/// Immutable, scope-keyed lookup table of adapters for one module boundary.
///
/// Built once by [`RegistryBuilder::assemble`]; reads are lock-free and safe
/// to share across threads because no entry is ever mutated post-assembly.
pub struct Registry<X> {
    map: BTreeMap<ScopeId, Box<dyn ComponentGetter<X>>>,
}

impl<X> core::fmt::Debug for Registry<X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.map.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<X> Registry<X> {
    /// Resolve the unique getter registered under `key`, if any.
    pub fn lookup(&self, key: ScopeId) -> Option<&dyn ComponentGetter<X>> {
        self.map.get(&key).map(|g| g.as_ref())
    }

    /// Registered destination-scope keys, in stable order.
    pub fn keys(&self) -> impl Iterator<Item = ScopeId> + '_ {
        self.map.keys().copied()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the registry holds no adapters.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
