// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event algebra basics.
//!
//! A navigator queues events, a reference host applies them in send order,
//! and the back stack evolves accordingly — including a root switch with
//! state restoration and a pop back to a destination.
//!
//! Run:
//! - `cargo run -p waypost_demos --example nav_events_basics`

use waypost_nav::dispatch::Navigator;
use waypost_nav::events::DestinationId;
use waypost_nav::host::MemoryHost;

// Routes are plain u32s here; real hosts use their own route types.
fn dest(route: &u32) -> DestinationId {
    DestinationId(*route)
}

fn print_stack(label: &str, host: &MemoryHost<u32>) {
    let ids: Vec<u32> = host.stack().iter().map(|e| e.destination.0).collect();
    println!("{label}: {ids:?}");
}

fn main() {
    let mut nav: Navigator<u32> = Navigator::new();
    let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
    print_stack("start", &host);

    // Push a few destinations, then pop back to the second one.
    nav.navigate_to(2);
    nav.navigate_to(3);
    nav.navigate_to(4);
    nav.back_to(DestinationId(2), false);
    nav.drain_into(&mut host);
    print_stack("after back_to(2)", &host);

    // Switch to another root graph; the current stack is saved.
    nav.navigate_to_root(100, false);
    nav.navigate_to(101);
    nav.drain_into(&mut host);
    print_stack("on root 100", &host);

    // Return to the first root, restoring the saved stack.
    nav.navigate_to_root(1, true);
    nav.drain_into(&mut host);
    print_stack("back on root 1 (restored)", &host);
}
