// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry assembly and idempotent retrieval.
//!
//! Wires a hand-written getter with the exact shape `waypost_codegen` emits,
//! assembles it into a registry, and retrieves the component twice for the
//! same navigation entry to show the view-model is materialized only once.
//!
//! Run:
//! - `cargo run -p waypost_demos --example registry_retrieve`

use std::sync::Arc;

use waypost_nav::dispatch::Navigator;
use waypost_registry::{
    Component, ComponentGetter, NavEntryId, RegistryBuilder, RetrieveContext, ScopeId, ViewModel,
    ViewModelStore, nav_entry_view_model,
};

// Scope markers and the destination's route, as an app would declare them.
struct MainScope;
struct AppDestinations;

#[derive(Clone, Debug)]
struct HomeRoute {
    item: u32,
}

// The navigator doubles as the navigation executor handed to retrieval.
type Executor = Navigator<HomeRoute>;

struct HomeComponent {
    item: u32,
}

struct HomeViewModel {
    component: Arc<HomeComponent>,
}

impl HomeViewModel {
    fn new(route: &HomeRoute, _executor: &Executor, _parent: ScopeId, _dest: ScopeId) -> Self {
        println!("constructing HomeViewModel for item {}", route.item);
        Self {
            component: Arc::new(HomeComponent { item: route.item }),
        }
    }
}

impl ViewModel for HomeViewModel {
    fn component(&self) -> Component {
        self.component.clone()
    }
}

// Same shape as the generated `HomeComponentGetter`.
struct HomeComponentGetter;

impl ComponentGetter<Executor> for HomeComponentGetter {
    fn retrieve(&self, executor: &Executor, context: &RetrieveContext<'_>) -> Component {
        let view_model = nav_entry_view_model::<HomeRoute, Executor, HomeViewModel, _>(
            executor,
            context,
            ScopeId::of::<MainScope>(),
            ScopeId::of::<AppDestinations>(),
            HomeViewModel::new,
        );
        view_model.component()
    }
}

fn main() {
    let mut builder: RegistryBuilder<Executor> = RegistryBuilder::new();
    builder.expect_key(ScopeId::of::<AppDestinations>());
    builder.contribute(ScopeId::of::<AppDestinations>(), Box::new(HomeComponentGetter));
    let registry = builder.assemble().expect("registry assembles");

    let getter = registry
        .lookup(ScopeId::of::<AppDestinations>())
        .expect("destination scope is registered");

    let executor = Executor::new();
    let store = ViewModelStore::new();
    let route = HomeRoute { item: 7 };
    let context = RetrieveContext::new(NavEntryId(1), &route, &store);

    // Two retrievals, one construction.
    let first = getter.retrieve(&executor, &context);
    let second = getter.retrieve(&executor, &context);
    let first = first.downcast::<HomeComponent>().ok().unwrap();
    let second = second.downcast::<HomeComponent>().ok().unwrap();
    println!(
        "same component instance: {} (item {})",
        Arc::ptr_eq(&first, &second),
        first.item
    );
}
