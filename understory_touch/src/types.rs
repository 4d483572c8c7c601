// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for touch emulation: identifiers, pointer samples, event types, and lookups.
//!
//! ## Overview
//!
//! These types describe the translator's inputs and outputs.
//! They are consumed by the [`translator`](crate::translator) and the
//! [`shim`](crate::shim), and used by host integrations.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Size};

/// Stable identifier of one physical contact.
///
/// Every pointer sample of a contact carries the same identifier from its
/// down phase to its up phase. Synthesized touch points reuse it verbatim as
/// their `identifier`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PointerId(pub i32);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phase of a single-pointer sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerPhase {
    /// Contact began.
    Down,
    /// Contact moved (or the pointer hovered, for sources that report hover).
    Move,
    /// Contact ended.
    Up,
}

/// One sample from a single-pointer input source.
///
/// `target` is the element the host resolved under the pointer for this
/// sample. Only the target of the down phase is retained; later samples keep
/// routing to it.
///
/// Optional fields model data some sources do not report. Missing values fall
/// back to [`TouchDefaults`](crate::touch::TouchDefaults) when the sample is
/// normalized into a [`TouchPoint`](crate::touch::TouchPoint).
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample<E> {
    /// Identifier of the contact.
    pub pointer_id: PointerId,
    /// Phase of this sample.
    pub phase: PointerPhase,
    /// Element under the pointer at this sample.
    pub target: E,
    /// Position in screen coordinates.
    pub screen: Point,
    /// Position in page coordinates.
    pub page: Point,
    /// Normalized pressure in `0.0..=1.0`, if reported.
    pub pressure: Option<f64>,
    /// Full width and height of the contact ellipse, if reported.
    pub contact_size: Option<Size>,
    /// Clockwise rotation of the contact in degrees, if reported.
    pub twist: Option<f64>,
}

impl<E> PointerSample<E> {
    /// Create a sample at `page`, using the same point for screen coordinates.
    pub fn new(pointer_id: PointerId, phase: PointerPhase, target: E, page: Point) -> Self {
        Self {
            pointer_id,
            phase,
            target,
            screen: page,
            page,
            pressure: None,
            contact_size: None,
            twist: None,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] sample.
    pub fn down(pointer_id: PointerId, target: E, page: Point) -> Self {
        Self::new(pointer_id, PointerPhase::Down, target, page)
    }

    /// Shorthand for a [`PointerPhase::Move`] sample.
    pub fn moved(pointer_id: PointerId, target: E, page: Point) -> Self {
        Self::new(pointer_id, PointerPhase::Move, target, page)
    }

    /// Shorthand for a [`PointerPhase::Up`] sample.
    pub fn up(pointer_id: PointerId, target: E, page: Point) -> Self {
        Self::new(pointer_id, PointerPhase::Up, target, page)
    }

    /// Set screen coordinates independently of page coordinates.
    #[must_use]
    pub fn with_screen(mut self, screen: Point) -> Self {
        self.screen = screen;
        self
    }

    /// Set the reported pressure.
    #[must_use]
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// Set the reported contact size.
    #[must_use]
    pub fn with_contact_size(mut self, size: Size) -> Self {
        self.contact_size = Some(size);
        self
    }

    /// Set the reported twist.
    #[must_use]
    pub fn with_twist(mut self, twist: f64) -> Self {
        self.twist = Some(twist);
        self
    }
}

/// Type of a synthesized touch event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TouchEventType {
    /// `touchstart`
    Start,
    /// `touchmove`
    Move,
    /// `touchend`
    End,
}

impl TouchEventType {
    /// All event types, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Start, Self::Move, Self::End];

    /// DOM name of the event type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::Move => "touchmove",
            Self::End => "touchend",
        }
    }

    /// Match a listener type by prefix, the way listener registration does.
    ///
    /// `"touchstart"` and any type name beginning with it map to
    /// [`Start`](Self::Start), and likewise for the other types.
    /// Returns `None` for anything else.
    pub fn from_listener_type(listener_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| listener_type.starts_with(ty.as_str()))
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Move => 1,
            Self::End => 2,
        }
    }
}

impl fmt::Display for TouchEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not exactly a touch event name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("`{0}` is not a touch event type")]
pub struct ParseTouchEventTypeError(String);

impl ParseTouchEventTypeError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for TouchEventType {
    type Err = ParseTouchEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseTouchEventTypeError(s.to_string()))
    }
}

impl TryFrom<&str> for TouchEventType {
    type Error = ParseTouchEventTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Look up the parent of an element to answer ancestry questions.
///
/// The [translator](crate::translator::Translator) consults this only for the
/// [`TargetTouches::OwnerWithin`](crate::translator::TargetTouches::OwnerWithin) policy.
pub trait ParentLookup<E> {
    /// Returns the parent of `element`, or `None` if `element` is a root.
    fn parent_of(&self, element: &E) -> Option<E>;
}

/// A no‑op parent provider used by default when no parent lookup is needed.
///
/// Every element is its own root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<E> ParentLookup<E> for NoParent {
    #[inline]
    fn parent_of(&self, _element: &E) -> Option<E> {
        None
    }
}

/// Returns true if `node` is `ancestor` or one of its descendants.
///
/// Walks up the parent relation from `node`; the caller ensures the relation is acyclic.
pub fn is_within<E: PartialEq>(parents: &impl ParentLookup<E>, ancestor: &E, node: &E) -> bool {
    if node == ancestor {
        return true;
    }
    let mut cur = parents.parent_of(node);
    while let Some(n) = cur {
        if n == *ancestor {
            return true;
        }
        cur = parents.parent_of(&n);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, element: &u32) -> Option<u32> {
            match *element {
                3 => Some(2),
                2 => Some(1),
                4 => Some(1),
                _ => None,
            }
        }
    }

    #[test]
    fn event_type_names_round_trip_through_from_str() {
        for ty in TouchEventType::ALL {
            assert_eq!(ty.as_str().parse::<TouchEventType>(), Ok(ty));
        }
    }

    #[test]
    fn from_str_rejects_prefixed_names() {
        let err = "touchstartx".parse::<TouchEventType>().unwrap_err();
        assert_eq!(err.input(), "touchstartx");
        assert_eq!(
            alloc::format!("{err}"),
            "`touchstartx` is not a touch event type"
        );
        assert!(TouchEventType::try_from("pointerdown").is_err());
    }

    #[test]
    fn listener_type_matches_by_prefix() {
        assert_eq!(
            TouchEventType::from_listener_type("touchstart"),
            Some(TouchEventType::Start)
        );
        assert_eq!(
            TouchEventType::from_listener_type("touchmove.drag"),
            Some(TouchEventType::Move)
        );
        assert_eq!(
            TouchEventType::from_listener_type("touchend"),
            Some(TouchEventType::End)
        );
        assert_eq!(TouchEventType::from_listener_type("touchcancel"), None);
        assert_eq!(TouchEventType::from_listener_type("click"), None);
        assert_eq!(TouchEventType::from_listener_type("xtouchstart"), None);
    }

    #[test]
    fn sample_builders_fill_optional_fields() {
        let s = PointerSample::down(PointerId(1), 7_u32, Point::new(1.0, 2.0))
            .with_screen(Point::new(100.0, 200.0))
            .with_pressure(0.25)
            .with_contact_size(Size::new(4.0, 6.0))
            .with_twist(30.0);
        assert_eq!(s.phase, PointerPhase::Down);
        assert_eq!(s.page, Point::new(1.0, 2.0));
        assert_eq!(s.screen, Point::new(100.0, 200.0));
        assert_eq!(s.pressure, Some(0.25));
        assert_eq!(s.contact_size, Some(Size::new(4.0, 6.0)));
        assert_eq!(s.twist, Some(30.0));
    }

    #[test]
    fn sample_screen_defaults_to_page() {
        let s = PointerSample::up(PointerId(2), (), Point::new(5.0, 6.0));
        assert_eq!(s.screen, s.page);
        assert_eq!(s.pressure, None);
    }

    #[test]
    fn is_within_walks_ancestry() {
        assert!(is_within(&Parents, &1, &3));
        assert!(is_within(&Parents, &2, &3));
        assert!(is_within(&Parents, &3, &3));
        assert!(!is_within(&Parents, &3, &2));
        assert!(!is_within(&Parents, &2, &4));
        assert!(!is_within(&Parents, &9, &3));
    }

    #[test]
    fn no_parent_only_matches_self() {
        assert!(is_within(&NoParent, &5_u32, &5));
        assert!(!is_within(&NoParent, &1_u32, &5));
    }
}
