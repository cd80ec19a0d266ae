// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build-time generation errors.

use thiserror::Error;

/// Fatal, build-time failures of descriptor validation or generation.
///
/// There is no runtime failure path in the generator: every variant is
/// reported to the generation invoker and no artifact is emitted for the
/// failing unit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A descriptor was built without a base name.
    #[error("destination base name is missing")]
    MissingBaseName,

    /// The base name is not usable as an identifier fragment.
    #[error("`{name}` is not a valid identifier fragment for a base name")]
    InvalidBaseName {
        /// The rejected base name.
        name: String,
    },

    /// A required type reference was empty.
    #[error("type reference is missing")]
    MissingTypeRef,

    /// A type reference did not parse as a type path.
    #[error("`{text}` is not a valid type path")]
    InvalidTypeRef {
        /// The rejected reference text.
        text: String,
    },

    /// Two descriptors in one compilation unit share a base name.
    #[error("duplicate destination base name `{name}` in compilation unit")]
    DuplicateBaseName {
        /// The colliding base name.
        name: String,
    },

    /// Two distinct base names in one compilation unit derive the same
    /// generated names (contribution function, file name).
    #[error("base names `{first}` and `{second}` derive the same generated names")]
    CollidingDerivedName {
        /// The base name encountered first.
        first: String,
        /// The base name it collides with.
        second: String,
    },
}
