// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptor model: compile-time data describing one navigation destination.
//!
//! ## Overview
//!
//! Descriptors are pure data with no runtime existence.
//! They are created once per declared destination during a generation pass,
//! consumed exactly once by [`generate`](crate::generator::generate), and
//! discarded.
//! All validation happens at construction, so the generator itself never
//! fails on a well-formed descriptor.

use quote::ToTokens;

use crate::error::GenerateError;

/// A validated, opaque type-path identifier (e.g. `crate::home::HomeRoute`).
///
/// Equality is textual; the parsed form is kept so the generator can splice
/// the path into emitted code without re-validation.
#[derive(Clone, Debug)]
pub struct TypeRef {
    text: String,
    path: syn::Path,
}

impl TypeRef {
    /// Parse and validate a type path.
    ///
    /// Empty input and text that does not parse as a path are rejected; both
    /// are fatal build-time errors for the unit being generated.
    pub fn parse(text: &str) -> Result<Self, GenerateError> {
        if text.trim().is_empty() {
            return Err(GenerateError::MissingTypeRef);
        }
        let path = syn::parse_str::<syn::Path>(text).map_err(|_| GenerateError::InvalidTypeRef {
            text: text.to_owned(),
        })?;
        Ok(Self {
            text: text.to_owned(),
            path,
        })
    }

    /// The reference as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed path, for splicing into generated code.
    pub fn path(&self) -> &syn::Path {
        &self.path
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TypeRef {}

impl core::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

impl ToTokens for TypeRef {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        self.path.to_tokens(tokens);
    }
}

/// The navigation facet of a destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationData {
    /// Route type used to construct or locate the screen's view-model.
    pub route: TypeRef,
    /// Destination-scope type used as the registry key.
    ///
    /// This — never the per-instance scope — is what the generated adapter
    /// registers under; the same key may legitimately recur across
    /// independently compiled modules.
    pub destination_scope: TypeRef,
}

/// Immutable description of one navigation destination.
///
/// `base_name` derives every generated name deterministically and must be
/// unique within a compilation unit (collisions fail generation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationDescriptor {
    base_name: String,
    scope: TypeRef,
    parent_scope: TypeRef,
    navigation: NavigationData,
}

impl DestinationDescriptor {
    /// Create a descriptor, validating `base_name` as an identifier fragment.
    pub fn new(
        base_name: &str,
        scope: TypeRef,
        parent_scope: TypeRef,
        navigation: NavigationData,
    ) -> Result<Self, GenerateError> {
        if base_name.trim().is_empty() {
            return Err(GenerateError::MissingBaseName);
        }
        if syn::parse_str::<syn::Ident>(base_name).is_err() {
            return Err(GenerateError::InvalidBaseName {
                name: base_name.to_owned(),
            });
        }
        Ok(Self {
            base_name: base_name.to_owned(),
            scope,
            parent_scope,
            navigation,
        })
    }

    /// Unique identifier fragment all generated names derive from.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Injection scope owning the adapter's constructor dependencies.
    pub fn scope(&self) -> &TypeRef {
        &self.scope
    }

    /// Enclosing injection scope the view-model's component nests under.
    pub fn parent_scope(&self) -> &TypeRef {
        &self.parent_scope
    }

    /// Route type and destination-scope key.
    pub fn navigation(&self) -> &NavigationData {
        &self.navigation
    }
}
