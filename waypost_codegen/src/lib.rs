// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Codegen: destination descriptors in, component-getter glue out.
//!
//! ## Overview
//!
//! At build time, each navigation destination is described by a
//! [`DestinationDescriptor`](crate::descriptor::DestinationDescriptor): a base name, an
//! injection scope, a parent scope, and a navigation facet (route type plus
//! destination-scope key).
//! [`generate_unit`](crate::generator::generate_unit) turns one compilation unit's worth
//! of descriptors into adapter types — one `{BaseName}ComponentGetter` per
//! destination — that register themselves under the destination-scope key in
//! a `waypost_registry::RegistryBuilder` and know how to retrieve the
//! screen's injected component at runtime.
//!
//! ## Determinism
//!
//! Generation is pure: equal descriptors produce byte-identical source, and
//! all derived names (`{BaseName}ComponentGetter`, the contribution function,
//! the suggested file name) depend only on `base_name`.
//! Incremental build caching relies on this.
//!
//! ## Failure policy
//!
//! All failures are build-time and fatal for the unit: invalid identifiers
//! and type paths are rejected when a descriptor is constructed, and a
//! duplicate base name fails [`generate_unit`](crate::generator::generate_unit) before
//! any artifact is emitted.
//! The emitted code itself has no error channel; registry misassembly is
//! caught by `waypost_registry` at container-assembly time.
//!
//! ## Example
//!
//! ```
//! use waypost_codegen::descriptor::{DestinationDescriptor, NavigationData, TypeRef};
//! use waypost_codegen::generator::generate_unit;
//!
//! let descriptor = DestinationDescriptor::new(
//!     "Home",
//!     TypeRef::parse("crate::HomeScope")?,
//!     TypeRef::parse("crate::MainScope")?,
//!     NavigationData {
//!         route: TypeRef::parse("crate::HomeRoute")?,
//!         destination_scope: TypeRef::parse("crate::MainDestinationScope")?,
//!     },
//! )?;
//! let adapters = generate_unit(&[descriptor])?;
//! assert_eq!(adapters[0].type_name, "HomeComponentGetter");
//! # Ok::<(), waypost_codegen::error::GenerateError>(())
//! ```

pub mod descriptor;
pub mod error;
pub mod generator;

pub use descriptor::{DestinationDescriptor, NavigationData, TypeRef};
pub use error::GenerateError;
pub use generator::{GeneratedAdapter, generate, generate_unit};
