// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter generation basics.
//!
//! Builds descriptors for two destinations and prints the generated
//! component-getter glue for each, plus the suggested file name.
//!
//! Run:
//! - `cargo run -p waypost_demos --example adapter_codegen`

use waypost_codegen::{DestinationDescriptor, NavigationData, TypeRef, generate_unit};

fn main() -> Result<(), waypost_codegen::GenerateError> {
    let home = DestinationDescriptor::new(
        "Home",
        TypeRef::parse("crate::home::HomeScope")?,
        TypeRef::parse("crate::MainScope")?,
        NavigationData {
            route: TypeRef::parse("crate::home::HomeRoute")?,
            destination_scope: TypeRef::parse("crate::AppDestinations")?,
        },
    )?;
    let detail = DestinationDescriptor::new(
        "ItemDetail",
        TypeRef::parse("crate::detail::DetailScope")?,
        TypeRef::parse("crate::MainScope")?,
        NavigationData {
            route: TypeRef::parse("crate::detail::DetailRoute")?,
            destination_scope: TypeRef::parse("crate::AppDestinations")?,
        },
    )?;

    for adapter in generate_unit(&[home, detail])? {
        println!("// ==> {}", adapter.file_name());
        println!("{}", adapter.source);
        println!();
    }
    Ok(())
}
