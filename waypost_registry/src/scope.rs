// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable scope keys derived from marker types.

use core::any::TypeId;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Opaque identifier of an injection scope.
///
/// Derived from a Rust marker type with [`ScopeId::of`]; two ids are equal
/// exactly when they were derived from the same type.
/// The type name is carried alongside for diagnostics only and takes no part
/// in equality or ordering.
///
/// Destination scopes are the registry keys: generated adapters contribute
/// under `ScopeId::of::<TheDestinationScope>()`, never under their
/// per-instance or parent scope.
#[derive(Copy, Clone, Debug)]
pub struct ScopeId {
    type_id: TypeId,
    name: &'static str,
}

impl ScopeId {
    /// Key for the scope represented by the marker type `T`.
    pub fn of<T: 'static + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Type name of the scope marker, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ScopeId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ScopeId {}

impl Hash for ScopeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Ord for ScopeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_id.cmp(&other.type_id)
    }
}

impl PartialOrd for ScopeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}
