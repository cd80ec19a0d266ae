// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter generation.
//!
//! ## Overview
//!
//! One descriptor becomes one adapter artifact:
//!
//! - a `{BaseName}ComponentGetter` unit struct with an injection-eligible
//!   no-argument constructor,
//! - an `impl<X> ComponentGetter<X>` whose single `retrieve` operation
//!   resolves the destination's view-model through
//!   `waypost_registry::nav_entry_view_model` and returns the view-model's
//!   component,
//! - a `contribute_{base_name}` registration function that enters the getter
//!   into a `RegistryBuilder` under the destination-scope key.
//!
//! The registration function is the explicit, build-time rendition of a
//! scope-keyed multibinding contribution: no reflection, no discovery — the
//! host module calls each contribution function while assembling its
//! registry.
//!
//! ## Naming
//!
//! All emitted names derive from `base_name` alone and are stable across
//! recompilation, which incremental builds depend on.
//! The view-model class is referenced as `{BaseName}ViewModel` in the
//! destination's own module, alongside where the artifact is emitted.
//!
//! ## Determinism
//!
//! [`generate`] is pure: equal descriptors yield byte-identical source.
//! [`generate_unit`] checks that base names — and the snake-cased names
//! derived from them — are unique over the whole unit before emitting
//! anything, so a collision produces no partial output.

use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::{debug, trace};

use crate::descriptor::DestinationDescriptor;
use crate::error::GenerateError;

/// One generated source artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedAdapter {
    /// Base name of the descriptor this artifact was generated from.
    pub base_name: String,
    /// Name of the emitted adapter type, `{BaseName}ComponentGetter`.
    pub type_name: String,
    /// Name of the emitted registration function.
    pub contribute_fn: String,
    /// The artifact's Rust source text (rendered token stream).
    pub source: String,
}

impl GeneratedAdapter {
    /// Suggested file name for emitting this artifact.
    pub fn file_name(&self) -> String {
        format!("{}_component_getter.rs", to_snake_case(&self.base_name))
    }
}

/// Generate the adapter artifact for one descriptor.
///
/// Pure and deterministic; descriptor validation already happened at
/// construction, so this cannot fail.
pub fn generate(descriptor: &DestinationDescriptor) -> GeneratedAdapter {
    let base = descriptor.base_name();
    let getter = format_ident!("{}ComponentGetter", base);
    let view_model = format_ident!("{}ViewModel", base);
    let contribute = format_ident!("contribute_{}", to_snake_case(base));

    let route = descriptor.navigation().route.path();
    let destination_scope = descriptor.navigation().destination_scope.path();
    let parent_scope = descriptor.parent_scope().path();

    let doc = format!("Generated component getter for the `{base}` destination.");
    let contribute_doc = format!(
        "Contributes [`{base}ComponentGetter`] to its destination-scope registry map."
    );

    trace!(base_name = base, "generating adapter");

    let tokens: TokenStream = quote! {
        #[doc = #doc]
        #[doc(hidden)]
        #[allow(missing_docs, unreachable_pub)]
        #[derive(Debug, Default)]
        pub struct #getter;

        impl #getter {
            /// Injection-eligible no-argument constructor; dependencies, if
            /// any, are supplied by the enclosing container.
            pub fn new() -> Self {
                Self
            }
        }

        impl<X> ::waypost_registry::ComponentGetter<X> for #getter {
            fn retrieve(
                &self,
                executor: &X,
                context: &::waypost_registry::RetrieveContext<'_>,
            ) -> ::waypost_registry::Component {
                let view_model = ::waypost_registry::nav_entry_view_model::<#route, X, #view_model, _>(
                    executor,
                    context,
                    ::waypost_registry::ScopeId::of::<#parent_scope>(),
                    ::waypost_registry::ScopeId::of::<#destination_scope>(),
                    #view_model::new,
                );
                view_model.component()
            }
        }

        #[doc = #contribute_doc]
        #[doc(hidden)]
        #[allow(unreachable_pub)]
        pub fn #contribute<X>(builder: &mut ::waypost_registry::RegistryBuilder<X>) {
            builder.contribute(
                ::waypost_registry::ScopeId::of::<#destination_scope>(),
                ::std::boxed::Box::new(#getter::new()),
            );
        }
    };

    GeneratedAdapter {
        base_name: base.to_owned(),
        type_name: getter.to_string(),
        contribute_fn: contribute.to_string(),
        source: tokens.to_string(),
    }
}

/// Generate adapters for one compilation unit's descriptors.
///
/// Runs a uniqueness pass over all base names and the names derived from
/// them first; a collision fails the whole unit before any artifact is
/// emitted. Deriving is lossy — `AB` and `Ab` both yield `contribute_ab`
/// and `ab_component_getter.rs` — so distinct base names can still collide
/// at the derived-name level, and emitting both into one module would not
/// compile.
/// Descriptors are otherwise independent and their artifacts are returned in
/// input order.
pub fn generate_unit(
    descriptors: &[DestinationDescriptor],
) -> Result<Vec<GeneratedAdapter>, GenerateError> {
    debug!(descriptors = descriptors.len(), "generating unit");
    let mut seen = BTreeMap::new();
    for descriptor in descriptors {
        let base = descriptor.base_name();
        if let Some(first) = seen.insert(to_snake_case(base), base) {
            if first == base {
                return Err(GenerateError::DuplicateBaseName {
                    name: base.to_owned(),
                });
            }
            return Err(GenerateError::CollidingDerivedName {
                first: first.to_owned(),
                second: base.to_owned(),
            });
        }
    }
    Ok(descriptors.iter().map(generate).collect())
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }
    out
}
