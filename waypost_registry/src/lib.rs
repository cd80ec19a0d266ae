// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Registry: scope-keyed lookup of generated navigation glue.
//!
//! ## Overview
//!
//! This crate is the runtime half of the destination pipeline.
//! Generated adapter types (see `waypost_codegen`) register themselves under a
//! destination-scope key inside a [`Registry`], assembled once during
//! container start-up and immutable afterwards.
//! Given the key of the currently active destination, the host resolves
//! exactly one [`ComponentGetter`] and asks it for the live screen's injected
//! component.
//!
//! ## Assembly
//!
//! [`RegistryBuilder`] collects contributions and validates them when
//! [`RegistryBuilder::assemble`] runs: a duplicate key, or a declared key
//! with no contribution, fails assembly with an [`AssemblyError`].
//! Lookup itself has no failure mode beyond `None`; misconfiguration is
//! caught before the registry exists.
//! Each [`Registry`] instance is one module boundary — the same key may
//! legitimately recur across independently assembled registries.
//!
//! ## Retrieval
//!
//! [`ComponentGetter::retrieve`] is idempotent with respect to an already
//! materialized view-model: the retrieve-or-create cache lives in
//! [`ViewModelStore`], keyed by navigation-entry identity, so repeated
//! retrieval for a live entry returns the same instance's component.
//! The getter itself performs no caching.
//!
//! ## Concurrency
//!
//! Registries are read-only after assembly; concurrent lookups need no
//! locking. The store guards its cache with a mutex and must not be asked to
//! do blocking work inside a constructor — any long-running materialization
//! belongs to the embedder.

pub mod registry;
pub mod scope;
pub mod viewmodel;

pub use registry::{AssemblyError, Component, ComponentGetter, Registry, RegistryBuilder};
pub use scope::ScopeId;
pub use viewmodel::{NavEntryId, RetrieveContext, ViewModel, ViewModelStore, nav_entry_view_model};
