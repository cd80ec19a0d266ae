// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Nav: a closed navigation event algebra and its dispatch protocol.
//!
//! ## Overview
//!
//! This crate models the navigation actions a screen can request at runtime —
//! push a route, switch root graphs, go up or back, pop to a destination, or
//! launch an external result-producing operation — as one closed sum type,
//! [`NavEvent`](crate::events::NavEvent).
//! It does not own a back stack.
//! Instead, a screen-side [`Navigator`](crate::dispatch::Navigator) queues events and a
//! host-side [`NavEventSink`](crate::dispatch::NavEventSink) applies them, in send order,
//! against the real back stack it owns.
//!
//! ## Events
//!
//! [`NavEvent`](crate::events::NavEvent) is deliberately closed: consumers match
//! exhaustively, and adding a variant is a breaking change for every consumer.
//! Events are one-way, fire-and-forget messages with no error channel.
//! The sole exception is [`ResultLauncher`](crate::events::NavEvent::ResultLauncher),
//! whose result is delivered asynchronously back to the producer through a
//! separate channel, never as a return value of the dispatch itself.
//!
//! ## Ordering
//!
//! Events from a single [`Navigator`](crate::dispatch::Navigator) are applied in the
//! order they were sent.
//! No ordering is guaranteed across producers, beyond each event's application
//! being atomic with respect to other events.
//!
//! ## Teardown
//!
//! A pending result launch can be superseded by a later event that tears down
//! the originating screen.
//! [`Navigator::destroy`](crate::dispatch::Navigator::destroy) abandons all registered
//! result callbacks, so a late result is dropped silently and never delivered
//! to a destroyed producer.
//!
//! ## Layering
//!
//! The real navigation host is external.
//! [`MemoryHost`](crate::host::MemoryHost) is a reference consumer with the standard
//! back-stack semantics (root switching with saved stacks, pop-to-destination),
//! suitable for tests and for documenting the consumer contract.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod events;
pub mod host;
