// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered touch lists handed to touch event consumers.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_touch::list::TouchList;
//! use understory_touch::touch::TouchPoint;
//! use understory_touch::types::PointerId;
//!
//! let a = TouchPoint::new("a", PointerId(1), Point::ZERO, Point::ZERO);
//! let b = TouchPoint::new("b", PointerId(2), Point::ZERO, Point::ZERO);
//! let list = TouchList::of_all([a, b]);
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.item(1).map(|t| t.target), Some("b"));
//! assert_eq!(list.identified_touch(PointerId(1)).map(|t| t.target), Some("a"));
//! assert!(list.identified_touch(PointerId(3)).is_none());
//! ```

use alloc::vec::Vec;
use core::ops::Index;

use crate::touch::TouchPoint;
use crate::types::PointerId;

/// An ordered list of touch points.
///
/// Order is insertion order. Consumers read it with [`item`](Self::item),
/// [`identified_touch`](Self::identified_touch), indexing, or iteration;
/// only the crate mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchList<E> {
    points: Vec<TouchPoint<E>>,
}

impl<E> Default for TouchList<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> TouchList<E> {
    /// Create an empty list.
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a list holding a single point.
    pub fn of(point: TouchPoint<E>) -> Self {
        let mut points = Vec::with_capacity(1);
        points.push(point);
        Self { points }
    }

    /// Create a list from many points, preserving their order.
    pub fn of_all(points: impl IntoIterator<Item = TouchPoint<E>>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Number of points in the list.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the list holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&TouchPoint<E>> {
        self.points.get(index)
    }

    /// Point with the given identifier, if any.
    pub fn identified_touch(&self, id: PointerId) -> Option<&TouchPoint<E>> {
        self.position(id).map(|i| &self.points[i])
    }

    /// Returns true if a point with the given identifier is present.
    pub fn contains(&self, id: PointerId) -> bool {
        self.position(id).is_some()
    }

    /// Iterate points in order.
    pub fn iter(&self) -> core::slice::Iter<'_, TouchPoint<E>> {
        self.points.iter()
    }

    /// Identifiers of all points, in order.
    pub fn identifiers(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.points.iter().map(|t| t.identifier)
    }

    /// View the points as a slice.
    pub fn as_slice(&self) -> &[TouchPoint<E>] {
        &self.points
    }

    // Scans from the back; recent contacts are the common lookup.
    fn position(&self, id: PointerId) -> Option<usize> {
        self.points.iter().rposition(|t| t.identifier == id)
    }

    /// Update the point with the same identifier in place, or append it.
    ///
    /// Returns true if the point was appended.
    pub(crate) fn upsert(&mut self, point: TouchPoint<E>) -> bool {
        match self.position(point.identifier) {
            Some(i) => {
                self.points[i].update_from(point);
                false
            }
            None => {
                self.points.push(point);
                true
            }
        }
    }

    pub(crate) fn remove(&mut self, id: PointerId) -> Option<TouchPoint<E>> {
        let i = self.position(id)?;
        Some(self.points.remove(i))
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}

impl<E> Index<usize> for TouchList<E> {
    type Output = TouchPoint<E>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, E> IntoIterator for &'a TouchList<E> {
    type Item = &'a TouchPoint<E>;
    type IntoIter = core::slice::Iter<'a, TouchPoint<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<E> FromIterator<TouchPoint<E>> for TouchList<E> {
    fn from_iter<I: IntoIterator<Item = TouchPoint<E>>>(iter: I) -> Self {
        Self::of_all(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    fn point(id: i32, x: f64) -> TouchPoint<u32> {
        TouchPoint::new(0, PointerId(id), Point::new(x, x), Point::new(x, x))
    }

    #[test]
    fn empty_and_single() {
        let e: TouchList<u32> = TouchList::empty();
        assert!(e.is_empty());
        assert!(e.item(0).is_none());

        let one = TouchList::of(point(4, 1.0));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].identifier, PointerId(4));
    }

    #[test]
    fn upsert_updates_in_place_and_keeps_order() {
        let mut l = TouchList::of_all([point(1, 0.0), point(2, 0.0), point(3, 0.0)]);
        assert!(!l.upsert(point(2, 9.0)));
        assert_eq!(
            l.identifiers().collect::<Vec<_>>(),
            vec![PointerId(1), PointerId(2), PointerId(3)]
        );
        assert_eq!(l[1].page, Point::new(9.0, 9.0));

        assert!(l.upsert(point(7, 0.0)));
        assert_eq!(l.len(), 4);
        assert_eq!(l.item(3).map(|t| t.identifier), Some(PointerId(7)));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut l = TouchList::of_all([point(1, 0.0), point(2, 0.0)]);
        assert!(l.remove(PointerId(5)).is_none());
        assert_eq!(l.len(), 2);
        assert_eq!(l.remove(PointerId(1)).map(|t| t.identifier), Some(PointerId(1)));
        assert_eq!(l.identifiers().collect::<Vec<_>>(), vec![PointerId(2)]);
    }

    #[test]
    fn iteration_matches_indexing() {
        let l: TouchList<u32> = [point(1, 1.0), point(2, 2.0)].into_iter().collect();
        for (i, t) in (&l).into_iter().enumerate() {
            assert_eq!(t, &l[i]);
        }
        assert_eq!(l.as_slice().len(), 2);
        assert!(l.contains(PointerId(2)));
        assert!(!l.contains(PointerId(3)));
    }
}
