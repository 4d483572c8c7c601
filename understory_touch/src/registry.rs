// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of active touch points and the targets that own them.
//!
//! ## Overview
//!
//! The registry holds every active [`TouchPoint`] in order of first contact,
//! plus a side map from identifier to the element captured at the down phase.
//! The [translator](crate::translator::Translator) keeps both halves in step:
//! after each translated sample they cover the same identifiers.
//!
//! The registry is an ordinary owned value. Create one per capture context.

use alloc::collections::BTreeMap;

use crate::list::TouchList;
use crate::touch::TouchPoint;
use crate::types::PointerId;

/// Active touch points keyed by identifier, with their owner targets.
#[derive(Clone, Debug)]
pub struct TouchRegistry<E> {
    active: TouchList<E>,
    owners: BTreeMap<PointerId, E>,
}

impl<E> Default for TouchRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TouchRegistry<E> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            active: TouchList::empty(),
            owners: BTreeMap::new(),
        }
    }

    /// Insert `point`, or update the entry with the same identifier in place.
    ///
    /// An update copies position, force, and shape, and keeps the entry's
    /// target and its place in insertion order.
    /// Returns true if a new entry was added.
    pub fn upsert(&mut self, point: TouchPoint<E>) -> bool {
        self.active.upsert(point)
    }

    /// Remove and return the entry with this identifier.
    ///
    /// Removing an absent identifier is a no-op; duplicate or out-of-order up
    /// samples occur in real pointer streams.
    pub fn remove(&mut self, id: PointerId) -> Option<TouchPoint<E>> {
        self.active.remove(id)
    }

    /// Entry with this identifier, if active.
    pub fn find(&self, id: PointerId) -> Option<&TouchPoint<E>> {
        self.active.identified_touch(id)
    }

    /// Returns true if an entry with this identifier is active.
    pub fn contains(&self, id: PointerId) -> bool {
        self.active.contains(id)
    }

    /// Element captured at the down phase of this identifier.
    pub fn owner_of(&self, id: PointerId) -> Option<&E> {
        self.owners.get(&id)
    }

    /// Record the owner of an identifier, replacing any previous owner.
    pub fn set_owner(&mut self, id: PointerId, element: E) {
        self.owners.insert(id, element);
    }

    /// Forget and return the owner of an identifier.
    ///
    /// For a terminating sample, call this only after its touch lists are
    /// assembled: the owner is still the dispatch target of that last event.
    pub fn clear_owner(&mut self, id: PointerId) -> Option<E> {
        self.owners.remove(&id)
    }

    /// Active points in order of first contact.
    pub fn active(&self) -> &TouchList<E> {
        &self.active
    }

    /// Number of active points.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true if no point is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drop every active point and owner.
    pub fn clear(&mut self) {
        self.active.clear();
        self.owners.clear();
    }

    /// Returns true if the active list and the owner map cover the same identifiers.
    pub fn is_consistent(&self) -> bool {
        self.active.len() == self.owners.len()
            && self.active.identifiers().all(|id| self.owners.contains_key(&id))
    }
}
