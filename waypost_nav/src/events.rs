// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core event types: destinations, launchers, options, and the event algebra.
//!
//! ## Overview
//!
//! These types describe what a screen can ask of the navigation host.
//! They are produced by a [`Navigator`](crate::dispatch::Navigator) and consumed by a
//! [`NavEventSink`](crate::dispatch::NavEventSink).

use bitflags::bitflags;

/// Stable identity of a navigation destination within one navigation graph.
///
/// Used by [`NavEvent::BackTo`] to name the pop target, and by hosts to match
/// routes against back-stack entries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DestinationId(pub u32);

/// Handle for a registered result launcher.
///
/// Obtained from
/// [`Navigator::register_result_launcher`](crate::dispatch::Navigator::register_result_launcher)
/// and carried by [`NavEvent::ResultLauncher`] so the host knows which
/// external operation to start.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LauncherId(pub(crate) u32);

bitflags! {
    /// Transition and back-stack options for [`NavEvent::NavigateTo`].
    ///
    /// Hosts are free to ignore options they do not support; options never
    /// change which destination is reached, only how the stack gets there.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct NavOptions: u8 {
        /// Do not push a duplicate if the target destination is already on top.
        const SINGLE_TOP = 1 << 0;
        /// Pop the current entry before pushing the new route.
        const POP_CURRENT = 1 << 1;
        /// Restore previously saved state for the target entry when available.
        const RESTORE_STATE = 1 << 2;
    }
}

/// A navigation action requested by a screen.
///
/// `R` is the host's route representation; `I` is the input type for result
/// launchers.
/// This is a closed set: consumers must match exhaustively, and adding a
/// variant is a deliberate breaking change for every consumer.
/// Exactly one variant is active per event instance, and the algebra carries
/// no error channel — failure handling (absent pop targets, empty stacks) is
/// host policy.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent<R, I = ()> {
    /// Push `route`, with optional transition/back-stack [`NavOptions`].
    NavigateTo {
        /// Route of the destination to push.
        route: R,
        /// Optional transition and back-stack behavior.
        options: Option<NavOptions>,
    },
    /// Switch to the root graph `root`, popping and saving the current back
    /// stack.
    ///
    /// If `restore_root_state` is set, the back stack previously saved for
    /// `root` is restored instead of starting fresh.
    NavigateToRoot {
        /// Route of the root graph to switch to.
        root: R,
        /// Whether to restore the saved back stack for `root`.
        restore_root_state: bool,
    },
    /// Navigate to the logical parent in the navigation hierarchy.
    Up,
    /// Pop the current entry.
    Back,
    /// Pop entries until `destination` is reached.
    ///
    /// If `inclusive`, `destination` itself is popped as well.
    BackTo {
        /// Destination to pop back to.
        destination: DestinationId,
        /// Whether the destination itself is also popped.
        inclusive: bool,
    },
    /// Invoke the external result-producing operation behind `launcher` with
    /// `input`.
    ///
    /// The result is delivered asynchronously to the producer through its
    /// registered callback, out of band of the event dispatch.
    ResultLauncher {
        /// Which registered launcher to invoke.
        launcher: LauncherId,
        /// Input handed to the external operation.
        input: I,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_compose_and_contain() {
        let opts = NavOptions::SINGLE_TOP | NavOptions::RESTORE_STATE;
        assert!(opts.contains(NavOptions::SINGLE_TOP));
        assert!(opts.contains(NavOptions::RESTORE_STATE));
        assert!(!opts.contains(NavOptions::POP_CURRENT));
    }

    #[test]
    fn options_default_is_empty() {
        assert_eq!(NavOptions::default(), NavOptions::empty());
    }

    #[test]
    fn events_compare_structurally() {
        let a: NavEvent<u32> = NavEvent::NavigateTo {
            route: 7,
            options: None,
        };
        let b: NavEvent<u32> = NavEvent::NavigateTo {
            route: 7,
            options: None,
        };
        assert_eq!(a, b);
        assert_ne!(a, NavEvent::Back);
    }

    #[test]
    fn exhaustive_match_covers_all_variants() {
        // A consumer-side match with no wildcard arm; this fails to compile
        // if a variant is ever added, which is the intended breakage.
        fn name(e: &NavEvent<u32, u8>) -> &'static str {
            match e {
                NavEvent::NavigateTo { .. } => "navigate_to",
                NavEvent::NavigateToRoot { .. } => "navigate_to_root",
                NavEvent::Up => "up",
                NavEvent::Back => "back",
                NavEvent::BackTo { .. } => "back_to",
                NavEvent::ResultLauncher { .. } => "result_launcher",
            }
        }
        assert_eq!(name(&NavEvent::Up), "up");
        assert_eq!(
            name(&NavEvent::BackTo {
                destination: DestinationId(3),
                inclusive: true
            }),
            "back_to"
        );
    }
}
