// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-model factory contract and the retrieve-or-create store.
//!
//! ## Overview
//!
//! Generated adapters do not cache anything themselves.
//! [`nav_entry_view_model`] resolves the view-model for the active
//! navigation entry through an explicit cache, [`ViewModelStore`], keyed by
//! navigation-entry identity plus view-model type.
//! Repeated resolution for a live entry returns the existing instance; at
//! most one instance is ever cached per `(entry, type)` pair.
//!
//! ## Contract
//!
//! The constructor passed to [`nav_entry_view_model`] receives the active
//! route, the navigation executor, and the parent and destination scope ids
//! so the view-model can nest its component correctly inside the enclosing
//! dependency graph.
//! Constructors must not block the calling thread; any long-running
//! materialization belongs outside the store.

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::registry::Component;
use crate::scope::ScopeId;

/// A screen's view-model, exposing the injected component it owns.
pub trait ViewModel: Send + Sync {
    /// The component backing this view-model's screen. A property access,
    /// never a fresh construction.
    fn component(&self) -> Component;
}

/// Identity of a live navigation entry.
///
/// Stable for the lifetime of the entry, including across state restoration;
/// the navigation host assigns it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NavEntryId(pub u64);

/// Retrieve-or-create cache of view-models, keyed by entry identity and
/// view-model type.
///
/// Owned by the embedding host, shared with every retrieval via
/// [`RetrieveContext`]. Entries live until [`ViewModelStore::drop_entry`]
/// runs for their navigation entry.
#[derive(Debug, Default)]
pub struct ViewModelStore {
    cells: Mutex<BTreeMap<(NavEntryId, TypeId), Arc<dyn Any + Send + Sync>>>,
}

impl ViewModelStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached `V` for `entry`, constructing it with `make` on
    /// first use.
    ///
    /// Idempotent: at most one instance is ever cached per `(entry, V)` and
    /// every call returns that instance.
    /// The constructor runs outside the store lock, so it may resolve other
    /// view-models through the same store (nested resolution) and a panic in
    /// it leaves the store usable. If two threads race on first use, one
    /// construction is discarded and both calls return the cached instance.
    pub fn get_or_create<V>(&self, entry: NavEntryId, make: impl FnOnce() -> V) -> Arc<V>
    where
        V: Send + Sync + 'static,
    {
        let key = (entry, TypeId::of::<V>());
        if let Some(cell) = self.cells.lock().unwrap().get(&key) {
            // The key carries V's TypeId, so the downcast cannot fail.
            return Arc::downcast::<V>(cell.clone()).unwrap_or_else(|_| unreachable!());
        }
        let made: Arc<dyn Any + Send + Sync> = Arc::new(make());
        let mut cells = self.cells.lock().unwrap();
        // First insert wins if another construction raced this one.
        let cell = cells.entry(key).or_insert(made);
        Arc::downcast::<V>(cell.clone()).unwrap_or_else(|_| unreachable!())
    }

    /// Drop every view-model cached for `entry` (screen teardown).
    pub fn drop_entry(&self, entry: NavEntryId) {
        let mut cells = self.cells.lock().unwrap();
        cells.retain(|(e, _), _| *e != entry);
    }

    /// Number of cached view-models across all entries.
    pub fn len(&self) -> usize {
        self.cells.lock().unwrap().len()
    }

    /// Whether the store caches nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Execution context handed to [`ComponentGetter::retrieve`](crate::registry::ComponentGetter::retrieve).
///
/// Carries the active entry's identity, its route value (type-erased), and
/// the shared [`ViewModelStore`].
#[derive(Clone, Copy)]
pub struct RetrieveContext<'a> {
    entry: NavEntryId,
    route: &'a (dyn Any + Send + Sync),
    store: &'a ViewModelStore,
}

impl core::fmt::Debug for RetrieveContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RetrieveContext")
            .field("entry", &self.entry)
            .finish_non_exhaustive()
    }
}

impl<'a> RetrieveContext<'a> {
    /// Context for the navigation entry `entry` whose active route is `route`.
    pub fn new(
        entry: NavEntryId,
        route: &'a (dyn Any + Send + Sync),
        store: &'a ViewModelStore,
    ) -> Self {
        Self {
            entry,
            route,
            store,
        }
    }

    /// Identity of the navigation entry being retrieved for.
    pub fn entry(&self) -> NavEntryId {
        self.entry
    }

    /// The active route, if it is an `R`.
    pub fn route<R: 'static>(&self) -> Option<&R> {
        self.route.downcast_ref::<R>()
    }

    /// The shared view-model store.
    pub fn store(&self) -> &ViewModelStore {
        self.store
    }
}

/// Resolve or create the view-model for the active navigation entry.
///
/// This is the factory function generated adapters call from `retrieve`:
/// `R` is the destination's route type, `X` the executor type, `V` the
/// view-model type, and `make` its constructor.
/// At most one `V` is ever cached per `(entry, V)`; later calls return the
/// cached instance, so retrieval after process or state restoration picks up
/// the existing view-model instead of constructing a duplicate.
///
/// Panics if the context's route is not an `R` — a wiring error between
/// generator input and host, which assembly-time validation is meant to make
/// impossible.
pub fn nav_entry_view_model<R, X, V, F>(
    executor: &X,
    context: &RetrieveContext<'_>,
    parent_scope: ScopeId,
    destination_scope: ScopeId,
    make: F,
) -> Arc<V>
where
    R: 'static,
    V: ViewModel + Send + Sync + 'static,
    F: FnOnce(&R, &X, ScopeId, ScopeId) -> V,
{
    context.store().get_or_create(context.entry(), || {
        let Some(route) = context.route::<R>() else {
            panic!(
                "active route for {} is not a `{}`",
                destination_scope,
                std::any::type_name::<R>()
            );
        };
        make(route, executor, parent_scope, destination_scope)
    })
}
