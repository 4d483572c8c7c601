// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration shim: which pointer events to subscribe to.
//!
//! ## Overview
//!
//! Applications register touch listeners; the host only delivers pointer
//! events. Feed every listener registration and removal through a
//! [`ListenerShim`] and apply the returned [`ShimAction`]: subscribe the
//! translator's entry point to the named pointer kinds, or unsubscribe it.
//!
//! Listeners are counted per element and per capture flag, so a pointer kind
//! stays subscribed until its last touch listener goes away.
//!
//! ## Minimal example
//!
//! ```
//! use understory_touch::shim::{ListenerShim, PointerKinds, ShimConfig};
//!
//! let mut shim = ListenerShim::new(ShimConfig::default());
//! let first = shim.attach(&1_u32, "touchstart", false);
//! assert_eq!(first.subscribe, PointerKinds::DOWN);
//! assert!(first.disable_touch_action);
//!
//! // A second listener of the same kind needs no new subscription.
//! assert!(shim.attach(&1_u32, "touchstart", false).subscribe.is_empty());
//! assert!(shim.detach(&1_u32, "touchstart", false).unsubscribe.is_empty());
//! assert_eq!(shim.detach(&1_u32, "touchstart", false).unsubscribe, PointerKinds::DOWN);
//! ```

use alloc::vec::Vec;

use crate::types::TouchEventType;

bitflags::bitflags! {
    /// Pointer event kinds the host subscribes to on an element.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerKinds: u8 {
        /// Pointer down, feeding `touchstart`.
        const DOWN = 0b0000_0001;
        /// Pointer move, feeding `touchmove`.
        const MOVE = 0b0000_0010;
        /// Pointer up, feeding `touchend`.
        const UP   = 0b0000_0100;
    }
}

impl TouchEventType {
    /// Pointer kind whose samples produce this touch event type.
    pub const fn pointer_kind(self) -> PointerKinds {
        match self {
            Self::Start => PointerKinds::DOWN,
            Self::Move => PointerKinds::MOVE,
            Self::End => PointerKinds::UP,
        }
    }
}

/// Shim configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShimConfig {
    /// Whether the host delivers pointer events at all.
    ///
    /// When false, registrations pass through untouched and every action is empty.
    pub pointer_events_enabled: bool,
    /// Whether attaching a touch listener should disable the element's default
    /// touch handling (`touch-action: none`), so panning and zooming do not
    /// swallow the pointer stream.
    pub disable_touch_action: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            pointer_events_enabled: true,
            disable_touch_action: true,
        }
    }
}

/// What the host should do after a listener registration change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShimAction {
    /// Pointer kinds to start delivering to the translator.
    pub subscribe: PointerKinds,
    /// Pointer kinds to stop delivering to the translator.
    pub unsubscribe: PointerKinds,
    /// Disable default touch handling on the element.
    pub disable_touch_action: bool,
}

impl ShimAction {
    /// An action that changes nothing.
    pub const NONE: Self = Self {
        subscribe: PointerKinds::empty(),
        unsubscribe: PointerKinds::empty(),
        disable_touch_action: false,
    };

    /// Returns true if the host has nothing to do.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Clone, Debug)]
struct Registration<E> {
    element: E,
    use_capture: bool,
    // Listener count per touch event type, indexed by `TouchEventType::slot`.
    counts: [u32; 3],
}

impl<E> Registration<E> {
    fn kinds(&self) -> PointerKinds {
        TouchEventType::ALL
            .into_iter()
            .filter(|ty| self.counts[ty.slot()] > 0)
            .fold(PointerKinds::empty(), |acc, ty| acc | ty.pointer_kind())
    }
}

/// Tracks touch listener registrations and derives pointer subscriptions.
#[derive(Clone, Debug)]
pub struct ListenerShim<E> {
    config: ShimConfig,
    registrations: Vec<Registration<E>>,
}

impl<E: Clone + PartialEq> Default for ListenerShim<E> {
    fn default() -> Self {
        Self::new(ShimConfig::default())
    }
}

impl<E: Clone + PartialEq> ListenerShim<E> {
    /// Create a shim with no registrations.
    pub fn new(config: ShimConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// Record a listener of `listener_type` on `element`.
    ///
    /// Types are matched by prefix (see [`TouchEventType::from_listener_type`]);
    /// other types yield [`ShimAction::NONE`].
    pub fn attach(&mut self, element: &E, listener_type: &str, use_capture: bool) -> ShimAction {
        if !self.config.pointer_events_enabled {
            return ShimAction::NONE;
        }
        let Some(ty) = TouchEventType::from_listener_type(listener_type) else {
            return ShimAction::NONE;
        };

        let idx = match self.position(element, use_capture) {
            Some(idx) => idx,
            None => {
                self.registrations.push(Registration {
                    element: element.clone(),
                    use_capture,
                    counts: [0; 3],
                });
                self.registrations.len() - 1
            }
        };
        let count = &mut self.registrations[idx].counts[ty.slot()];
        *count += 1;
        let first = *count == 1;
        if first {
            tracing::trace!(event = ty.as_str(), use_capture, "subscribing pointer kind");
        }

        ShimAction {
            subscribe: if first {
                ty.pointer_kind()
            } else {
                PointerKinds::empty()
            },
            unsubscribe: PointerKinds::empty(),
            disable_touch_action: self.config.disable_touch_action,
        }
    }

    /// Forget a listener of `listener_type` on `element`.
    ///
    /// Detaching a listener that was never attached is a no-op.
    pub fn detach(&mut self, element: &E, listener_type: &str, use_capture: bool) -> ShimAction {
        if !self.config.pointer_events_enabled {
            return ShimAction::NONE;
        }
        let Some(ty) = TouchEventType::from_listener_type(listener_type) else {
            return ShimAction::NONE;
        };
        let Some(idx) = self.position(element, use_capture) else {
            return ShimAction::NONE;
        };

        let registration = &mut self.registrations[idx];
        let count = &mut registration.counts[ty.slot()];
        if *count == 0 {
            return ShimAction::NONE;
        }
        *count -= 1;
        let last = *count == 0;
        if registration.counts.iter().all(|&c| c == 0) {
            self.registrations.swap_remove(idx);
        }
        if !last {
            return ShimAction::NONE;
        }
        tracing::trace!(event = ty.as_str(), use_capture, "unsubscribing pointer kind");
        ShimAction {
            unsubscribe: ty.pointer_kind(),
            ..ShimAction::NONE
        }
    }

    /// Pointer kinds currently subscribed on `element` for this capture flag.
    pub fn subscriptions(&self, element: &E, use_capture: bool) -> PointerKinds {
        self.position(element, use_capture)
            .map(|idx| self.registrations[idx].kinds())
            .unwrap_or_else(PointerKinds::empty)
    }

    /// Number of touch listeners of `event_type` on `element` for this capture flag.
    pub fn listener_count(
        &self,
        element: &E,
        event_type: TouchEventType,
        use_capture: bool,
    ) -> u32 {
        self.position(element, use_capture)
            .map_or(0, |idx| self.registrations[idx].counts[event_type.slot()])
    }

    /// Returns true if no touch listener is registered anywhere.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    fn position(&self, element: &E, use_capture: bool) -> Option<usize> {
        self.registrations
            .iter()
            .position(|r| r.use_capture == use_capture && r.element == *element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_subscribes_once_per_kind() {
        let mut shim: ListenerShim<u32> = ListenerShim::default();
        assert_eq!(shim.attach(&1, "touchstart", false).subscribe, PointerKinds::DOWN);
        assert_eq!(shim.attach(&1, "touchmove", false).subscribe, PointerKinds::MOVE);
        assert_eq!(shim.attach(&1, "touchend", false).subscribe, PointerKinds::UP);
        assert!(shim.attach(&1, "touchmove", false).subscribe.is_empty());
        assert_eq!(shim.subscriptions(&1, false), PointerKinds::all());
        assert_eq!(shim.listener_count(&1, TouchEventType::Move, false), 2);
    }

    #[test]
    fn elements_and_capture_flags_are_independent() {
        let mut shim: ListenerShim<u32> = ListenerShim::default();
        shim.attach(&1, "touchstart", false);
        assert_eq!(shim.attach(&1, "touchstart", true).subscribe, PointerKinds::DOWN);
        assert_eq!(shim.attach(&2, "touchstart", false).subscribe, PointerKinds::DOWN);
        assert_eq!(shim.subscriptions(&1, true), PointerKinds::DOWN);
        assert_eq!(shim.subscriptions(&3, false), PointerKinds::empty());
    }

    #[test]
    fn detach_unsubscribes_with_last_listener() {
        let mut shim: ListenerShim<u32> = ListenerShim::default();
        shim.attach(&1, "touchend", false);
        shim.attach(&1, "touchend", false);
        assert!(shim.detach(&1, "touchend", false).is_none());
        let last = shim.detach(&1, "touchend", false);
        assert_eq!(last.unsubscribe, PointerKinds::UP);
        assert!(last.subscribe.is_empty());
        assert!(shim.is_empty());
    }

    #[test]
    fn detach_unknown_is_noop() {
        let mut shim: ListenerShim<u32> = ListenerShim::default();
        assert!(shim.detach(&1, "touchstart", false).is_none());
        shim.attach(&1, "touchstart", false);
        assert!(shim.detach(&1, "touchmove", false).is_none());
        assert!(shim.detach(&1, "touchstart", true).is_none());
        assert_eq!(shim.subscriptions(&1, false), PointerKinds::DOWN);
    }

    #[test]
    fn non_touch_types_pass_through() {
        let mut shim: ListenerShim<u32> = ListenerShim::default();
        assert!(shim.attach(&1, "click", false).is_none());
        assert!(shim.attach(&1, "touchcancel", false).is_none());
        assert!(shim.is_empty());
    }

    #[test]
    fn prefixed_listener_types_match() {
        let mut shim: ListenerShim<u32> = ListenerShim::default();
        assert_eq!(shim.attach(&1, "touchmove.scroll", false).subscribe, PointerKinds::MOVE);
    }

    #[test]
    fn disabled_pointer_events_do_nothing() {
        let config = ShimConfig {
            pointer_events_enabled: false,
            ..ShimConfig::default()
        };
        let mut shim: ListenerShim<u32> = ListenerShim::new(config);
        assert!(shim.attach(&1, "touchstart", false).is_none());
        assert!(shim.is_empty());
    }

    #[test]
    fn touch_action_follows_config() {
        let config = ShimConfig {
            disable_touch_action: false,
            ..ShimConfig::default()
        };
        let mut shim: ListenerShim<u32> = ListenerShim::new(config);
        let action = shim.attach(&1, "touchstart", false);
        assert!(!action.disable_touch_action);
        assert_eq!(action.subscribe, PointerKinds::DOWN);
    }
}
