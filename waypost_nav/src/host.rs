// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference in-memory navigation host.
//!
//! ## Overview
//!
//! The real navigation host is an external collaborator that owns the
//! platform back stack.
//! [`MemoryHost`] is a reference [`NavEventSink`] with the standard
//! semantics — push, root switching with saved stacks, pop-to-destination —
//! used to exercise the protocol in tests and to document consumer behavior.
//!
//! ## Notes
//!
//! - `Up` and `Back` both pop one entry here; distinguishing them (e.g.,
//!   synthesizing a parent when the stack is exhausted) is host policy.
//! - Absent pop targets are no-ops, matching the algebra's lack of an error
//!   channel.
//! - Reselecting the current root keeps the live stack when restoration is
//!   requested and pops to the root when it is not.
//! - Result launches are recorded as pending; completing them asynchronously
//!   is the embedder's job.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::dispatch::NavEventSink;
use crate::events::{DestinationId, LauncherId, NavEvent, NavOptions};

/// One back-stack entry: a route plus its destination identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<R> {
    /// Destination identity of this entry.
    pub destination: DestinationId,
    /// Route value the entry was created from.
    pub route: R,
}

/// In-memory back stack applying [`NavEvent`]s.
///
/// Destination identity is derived from routes via a plain function pointer
/// supplied at construction, so the host stays independent of any concrete
/// route type.
#[derive(Debug)]
pub struct MemoryHost<R, I = ()> {
    destination_of: fn(&R) -> DestinationId,
    stack: Vec<Entry<R>>,
    saved: BTreeMap<DestinationId, Vec<Entry<R>>>,
    pending: Vec<(LauncherId, I)>,
}

impl<R: Clone, I> MemoryHost<R, I> {
    /// Create a host whose stack starts at `root`.
    pub fn new(root: R, destination_of: fn(&R) -> DestinationId) -> Self {
        let entry = Entry {
            destination: destination_of(&root),
            route: root,
        };
        Self {
            destination_of,
            stack: vec![entry],
            saved: BTreeMap::new(),
            pending: Vec::new(),
        }
    }

    /// Current back stack, bottom first.
    pub fn stack(&self) -> &[Entry<R>] {
        &self.stack
    }

    /// Destination ids of the current stack, bottom first. Test convenience.
    pub fn destinations(&self) -> Vec<DestinationId> {
        self.stack.iter().map(|e| e.destination).collect()
    }

    /// Result launches applied but not yet completed by the embedder.
    pub fn pending_launches(&self) -> &[(LauncherId, I)] {
        &self.pending
    }

    /// Take ownership of the pending launches, clearing the record.
    pub fn take_pending_launches(&mut self) -> Vec<(LauncherId, I)> {
        core::mem::take(&mut self.pending)
    }

    fn entry(&self, route: &R) -> Entry<R> {
        Entry {
            destination: (self.destination_of)(route),
            route: route.clone(),
        }
    }

    fn push(&mut self, route: R, options: Option<NavOptions>) {
        let opts = options.unwrap_or_default();
        let entry = self.entry(&route);
        if opts.contains(NavOptions::SINGLE_TOP)
            && self.stack.last().map(|top| top.destination) == Some(entry.destination)
        {
            // Replace instead of stacking a duplicate of the same destination.
            self.stack.pop();
        } else if opts.contains(NavOptions::POP_CURRENT) {
            self.stack.pop();
        }
        self.stack.push(entry);
    }

    fn switch_root(&mut self, root: R, restore_root_state: bool) {
        let target = (self.destination_of)(&root);
        // Save the outgoing stack under its own root before switching. This
        // runs for a same-root reselect too: with restoration it puts the
        // live stack straight back, without it the reselect pops to root.
        if let Some(current_root) = self.stack.first().map(|e| e.destination) {
            let outgoing = core::mem::take(&mut self.stack);
            self.saved.insert(current_root, outgoing);
        }
        self.stack = if restore_root_state
            && let Some(saved) = self.saved.remove(&target)
        {
            saved
        } else {
            self.saved.remove(&target);
            vec![self.entry(&root)]
        };
    }

    fn pop(&mut self) {
        // Popping the last entry would leave no active destination; treat it
        // as a no-op (exiting the app is outside this model).
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn pop_to(&mut self, destination: DestinationId, inclusive: bool) {
        let Some(idx) = self
            .stack
            .iter()
            .rposition(|e| e.destination == destination)
        else {
            return;
        };
        let keep = if inclusive { idx } else { idx + 1 };
        self.stack.truncate(keep);
    }
}

impl<R: Clone, I> NavEventSink<R, I> for MemoryHost<R, I> {
    fn apply(&mut self, event: NavEvent<R, I>) {
        match event {
            NavEvent::NavigateTo { route, options } => self.push(route, options),
            NavEvent::NavigateToRoot {
                root,
                restore_root_state,
            } => self.switch_root(root, restore_root_state),
            NavEvent::Up | NavEvent::Back => self.pop(),
            NavEvent::BackTo {
                destination,
                inclusive,
            } => self.pop_to(destination, inclusive),
            NavEvent::ResultLauncher { launcher, input } => {
                self.pending.push((launcher, input));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Navigator;

    // Routes are plain u32s; the destination id is the route value itself.
    fn dest(route: &u32) -> DestinationId {
        DestinationId(*route)
    }

    fn ids(host: &MemoryHost<u32>) -> Vec<u32> {
        host.stack().iter().map(|e| e.destination.0).collect()
    }

    #[test]
    fn navigate_to_pushes_in_order() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateTo {
            route: 3,
            options: None,
        });
        assert_eq!(ids(&host), vec![1, 2, 3]);
    }

    #[test]
    fn stack_states_follow_producer_order() {
        let mut nav: Navigator<u32> = Navigator::new();
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        nav.navigate_to(10);
        nav.back();
        nav.navigate_to(20);

        // Observe the stack after each event to pin the ordering guarantee.
        let mut observed = Vec::new();
        struct Observer<'a> {
            host: &'a mut MemoryHost<u32>,
            observed: &'a mut Vec<Vec<u32>>,
        }
        impl NavEventSink<u32> for Observer<'_> {
            fn apply(&mut self, event: NavEvent<u32>) {
                self.host.apply(event);
                self.observed.push(
                    self.host
                        .stack()
                        .iter()
                        .map(|e| e.destination.0)
                        .collect(),
                );
            }
        }
        nav.drain_into(&mut Observer {
            host: &mut host,
            observed: &mut observed,
        });
        assert_eq!(observed, vec![vec![1, 10], vec![1], vec![1, 20]]);
    }

    #[test]
    fn back_to_exclusive_keeps_target() {
        // [A, B, X, C] → BackTo(X, inclusive=false) → [A, B, X]
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        for r in [2, 3, 4] {
            host.apply(NavEvent::NavigateTo {
                route: r,
                options: None,
            });
        }
        host.apply(NavEvent::BackTo {
            destination: DestinationId(3),
            inclusive: false,
        });
        assert_eq!(ids(&host), vec![1, 2, 3]);
    }

    #[test]
    fn back_to_inclusive_pops_target() {
        // [A, B, X, C] → BackTo(X, inclusive=true) → [A, B]
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        for r in [2, 3, 4] {
            host.apply(NavEvent::NavigateTo {
                route: r,
                options: None,
            });
        }
        host.apply(NavEvent::BackTo {
            destination: DestinationId(3),
            inclusive: true,
        });
        assert_eq!(ids(&host), vec![1, 2]);
    }

    #[test]
    fn back_to_absent_destination_is_noop() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::BackTo {
            destination: DestinationId(99),
            inclusive: true,
        });
        assert_eq!(ids(&host), vec![1, 2]);
    }

    #[test]
    fn back_on_lone_entry_is_noop() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::Back);
        host.apply(NavEvent::Up);
        assert_eq!(ids(&host), vec![1]);
    }

    #[test]
    fn root_switch_saves_and_restores_stack() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateTo {
            route: 3,
            options: None,
        });

        // Switch away to root 100, then back with restoration.
        host.apply(NavEvent::NavigateToRoot {
            root: 100,
            restore_root_state: false,
        });
        assert_eq!(ids(&host), vec![100]);
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: true,
        });
        assert_eq!(ids(&host), vec![1, 2, 3]);
    }

    #[test]
    fn second_restore_uses_stack_from_first_switch_away() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });

        // First cycle: leave root 1 (saving [1, 2]), come back restoring it.
        host.apply(NavEvent::NavigateToRoot {
            root: 100,
            restore_root_state: false,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: true,
        });
        assert_eq!(ids(&host), vec![1, 2]);

        // Grow, leave again, restore again: the restored stack is the one
        // saved at the most recent switch-away, not a fresh start.
        host.apply(NavEvent::NavigateTo {
            route: 3,
            options: None,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 100,
            restore_root_state: false,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: true,
        });
        assert_eq!(ids(&host), vec![1, 2, 3]);
    }

    #[test]
    fn root_switch_without_restore_starts_fresh_and_discards_saved() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 100,
            restore_root_state: false,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: false,
        });
        assert_eq!(ids(&host), vec![1]);

        // The discarded save must not resurface on a later restore request.
        host.apply(NavEvent::NavigateToRoot {
            root: 100,
            restore_root_state: false,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: true,
        });
        assert_eq!(ids(&host), vec![1]);
    }

    #[test]
    fn same_root_reselect_with_restore_keeps_the_live_stack() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: true,
        });
        assert_eq!(ids(&host), vec![1, 2]);
    }

    #[test]
    fn same_root_reselect_without_restore_pops_to_root() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateToRoot {
            root: 1,
            restore_root_state: false,
        });
        assert_eq!(ids(&host), vec![1]);
    }

    #[test]
    fn single_top_replaces_duplicate_top() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: Some(NavOptions::SINGLE_TOP),
        });
        assert_eq!(ids(&host), vec![1, 2]);
    }

    #[test]
    fn pop_current_replaces_top_entry() {
        let mut host: MemoryHost<u32> = MemoryHost::new(1, dest);
        host.apply(NavEvent::NavigateTo {
            route: 2,
            options: None,
        });
        host.apply(NavEvent::NavigateTo {
            route: 3,
            options: Some(NavOptions::POP_CURRENT),
        });
        assert_eq!(ids(&host), vec![1, 3]);
    }

    #[test]
    fn result_launches_are_recorded_as_pending() {
        let mut host: MemoryHost<u32, &'static str> = MemoryHost::new(1, dest);
        host.apply(NavEvent::ResultLauncher {
            launcher: LauncherId(0),
            input: "photo",
        });
        assert_eq!(host.pending_launches(), &[(LauncherId(0), "photo")]);
        let taken = host.take_pending_launches();
        assert_eq!(taken.len(), 1);
        assert!(host.pending_launches().is_empty());
    }
}
