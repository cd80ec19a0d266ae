// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch protocol: the screen-side producer and the host-side consumer.
//!
//! ## Overview
//!
//! A [`Navigator`] queues [`NavEvent`]s as a screen requests them and hands
//! them to a [`NavEventSink`] in send order via [`Navigator::drain_into`].
//! The sink owns the real back stack; applying one event is atomic with
//! respect to other events.
//!
//! ## Result launchers
//!
//! Screens that expect an asynchronous result register a callback with
//! [`Navigator::register_result_launcher`] and emit the returned
//! [`LauncherId`] inside [`NavEvent::ResultLauncher`].
//! The host (or the external operation it started) completes the round trip
//! with [`Navigator::deliver_result`].
//! Once [`Navigator::destroy`] has run, pending results are abandoned
//! silently; a destroyed producer never observes a late delivery.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};

use crate::events::{DestinationId, LauncherId, NavEvent, NavOptions};

/// Consumer side of the dispatch protocol.
///
/// Implemented by the navigation host. Events from a single producer must be
/// applied in the order they were sent; each application must be atomic with
/// respect to other events.
pub trait NavEventSink<R, I = ()> {
    /// Apply one event against the back stack.
    fn apply(&mut self, event: NavEvent<R, I>);
}

/// Screen-side producer of [`NavEvent`]s.
///
/// ## Usage
///
/// - Emit events with [`Navigator::send`] or the per-variant helpers
///   ([`Navigator::navigate_to`], [`Navigator::back`], ...). Events queue in
///   send order.
/// - Hand the queue to the host with [`Navigator::drain_into`]; the sink
///   observes events in exactly the order they were sent.
/// - For asynchronous results, register a callback with
///   [`Navigator::register_result_launcher`], emit the launch with
///   [`Navigator::launch_for_result`], and let the host call
///   [`Navigator::deliver_result`] when the external operation completes.
/// - Call [`Navigator::destroy`] on screen teardown; queued events and
///   registered callbacks are dropped and late results are never delivered.
///
/// `R` is the route type, `I` the launcher input type, `O` the launcher
/// output type.
pub struct Navigator<R, I = (), O = ()> {
    queue: VecDeque<NavEvent<R, I>>,
    launchers: BTreeMap<LauncherId, Box<dyn FnMut(O)>>,
    next_launcher: u32,
    destroyed: bool,
}

impl<R, I, O> core::fmt::Debug for Navigator<R, I, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("queued", &self.queue.len())
            .field("launchers", &self.launchers.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl<R, I, O> Default for Navigator<R, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, I, O> Navigator<R, I, O> {
    /// Create a producer with an empty queue and no registered launchers.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            launchers: BTreeMap::new(),
            next_launcher: 0,
            destroyed: false,
        }
    }

    /// Queue an event. Dropped silently after [`Navigator::destroy`].
    pub fn send(&mut self, event: NavEvent<R, I>) {
        if self.destroyed {
            return;
        }
        self.queue.push_back(event);
    }

    /// Queue a push of `route` with no options.
    pub fn navigate_to(&mut self, route: R) {
        self.send(NavEvent::NavigateTo {
            route,
            options: None,
        });
    }

    /// Queue a push of `route` with explicit [`NavOptions`].
    pub fn navigate_to_with(&mut self, route: R, options: NavOptions) {
        self.send(NavEvent::NavigateTo {
            route,
            options: Some(options),
        });
    }

    /// Queue a root switch to `root`, optionally restoring its saved stack.
    pub fn navigate_to_root(&mut self, root: R, restore_root_state: bool) {
        self.send(NavEvent::NavigateToRoot {
            root,
            restore_root_state,
        });
    }

    /// Queue an up navigation.
    pub fn up(&mut self) {
        self.send(NavEvent::Up);
    }

    /// Queue a back navigation.
    pub fn back(&mut self) {
        self.send(NavEvent::Back);
    }

    /// Queue a pop back to `destination`.
    pub fn back_to(&mut self, destination: DestinationId, inclusive: bool) {
        self.send(NavEvent::BackTo {
            destination,
            inclusive,
        });
    }

    /// Queue the launch of a registered result launcher with `input`.
    pub fn launch_for_result(&mut self, launcher: LauncherId, input: I) {
        self.send(NavEvent::ResultLauncher { launcher, input });
    }

    /// Register a callback for an external result-producing operation.
    ///
    /// The returned [`LauncherId`] is what [`NavEvent::ResultLauncher`]
    /// carries; the callback runs on [`Navigator::deliver_result`] for that
    /// id, until unregistered or the navigator is destroyed.
    pub fn register_result_launcher(
        &mut self,
        callback: impl FnMut(O) + 'static,
    ) -> LauncherId {
        let id = LauncherId(self.next_launcher);
        self.next_launcher += 1;
        if !self.destroyed {
            self.launchers.insert(id, Box::new(callback));
        }
        id
    }

    /// Unregister a launcher; subsequent deliveries for its id are dropped.
    pub fn unregister_result_launcher(&mut self, launcher: LauncherId) {
        self.launchers.remove(&launcher);
    }

    /// Deliver an asynchronous result to the producer.
    ///
    /// Returns `true` if a live callback consumed the result. After
    /// [`Navigator::destroy`] (or unregistration) the result is abandoned and
    /// `false` is returned.
    pub fn deliver_result(&mut self, launcher: LauncherId, output: O) -> bool {
        if self.destroyed {
            return false;
        }
        match self.launchers.get_mut(&launcher) {
            Some(cb) => {
                cb(output);
                true
            }
            None => false,
        }
    }

    /// Apply all queued events to `sink`, in send order.
    ///
    /// The queue is empty afterwards. Draining interleaves nothing: each
    /// event is fully applied before the next is handed over.
    pub fn drain_into(&mut self, sink: &mut impl NavEventSink<R, I>) {
        while let Some(event) = self.queue.pop_front() {
            sink.apply(event);
        }
    }

    /// Number of events currently queued.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Tear down the producer: drop queued events and abandon all result
    /// callbacks. Irreversible.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.queue.clear();
        self.launchers.clear();
    }

    /// Whether [`Navigator::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
