// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-to-touch translator.
//!
//! ## Overview
//!
//! Consumes one [`PointerSample`] at a time, updates its [`TouchRegistry`],
//! derives the touch event type, assembles the three touch lists, and hands
//! the result to a [`TouchDispatcher`].
//!
//! ## Lifecycle
//!
//! Each identifier moves independently between absent and active:
//!
//! - Down on an absent identifier: a `touchstart`. The sample's target becomes the owner.
//! - Move, or a repeated down, on an active identifier: a `touchmove`, updating the entry in place.
//! - Up on an active identifier: a `touchend`. The entry and owner are removed after the lists are built.
//! - Move or up on an absent identifier: ignored. Nothing is dispatched and the registry is untouched.
//!
//! ## Lists
//!
//! - `changed_touches` holds exactly the point built from the current sample.
//! - `target_touches` is selected by the [`TargetTouches`] policy from the active set.
//! - `touches` is every active point. For `touchend` it is the set from just
//!   before removal, so the ending touch is still listed.
//!
//! Every event is delivered to the owner captured at the down phase, not to
//! the element currently under the pointer.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use understory_touch::translator::{Translation, Translator, TouchDetail};
//! use understory_touch::types::{PointerId, PointerSample, TouchEventType};
//!
//! let mut translator: Translator<&'static str> = Translator::default();
//! let mut seen = Vec::new();
//! let mut record = |ty: TouchEventType, target: &&'static str, detail: TouchDetail<'_, &'static str>| {
//!     seen.push((ty, *target, detail.touches.len()));
//! };
//!
//! let id = PointerId(1);
//! translator.handle(PointerSample::down(id, "button", Point::new(10.0, 10.0)), &mut record);
//! translator.handle(PointerSample::moved(id, "panel", Point::new(20.0, 20.0)), &mut record);
//! let last = translator.handle(PointerSample::up(id, "panel", Point::new(20.0, 20.0)), &mut record);
//!
//! assert_eq!(last, Translation::Dispatched(TouchEventType::End));
//! assert_eq!(
//!     seen,
//!     vec![
//!         (TouchEventType::Start, "button", 1),
//!         (TouchEventType::Move, "button", 1),
//!         (TouchEventType::End, "button", 1),
//!     ]
//! );
//! assert!(translator.registry().is_empty());
//! ```

use crate::list::TouchList;
use crate::registry::TouchRegistry;
use crate::touch::{TouchDefaults, TouchPoint};
use crate::types::{
    NoParent, ParentLookup, PointerId, PointerPhase, PointerSample, TouchEventType, is_within,
};

/// Which active touches appear in `target_touches`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TargetTouches {
    /// Every active touch, whatever its owner.
    ///
    /// This is the established behavior of pointer-based touch emulation and
    /// the default. Native touch events scope `targetTouches` to the target;
    /// choose [`SameOwner`](Self::SameOwner) or [`OwnerWithin`](Self::OwnerWithin) for that.
    #[default]
    AllActive,
    /// Touches whose owner is the dispatch target.
    SameOwner,
    /// Touches whose owner is the dispatch target or one of its descendants,
    /// according to the translator's [`ParentLookup`].
    OwnerWithin,
}

/// Translator configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TranslatorConfig {
    /// Contact data used when samples do not report it.
    pub defaults: TouchDefaults,
    /// Selection policy for `target_touches`.
    pub target_touches: TargetTouches,
}

impl TranslatorConfig {
    /// Return a copy with different contact defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: TouchDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Return a copy with a different `target_touches` policy.
    #[must_use]
    pub fn with_target_touches(mut self, policy: TargetTouches) -> Self {
        self.target_touches = policy;
        self
    }
}

/// Lists carried by a synthesized touch event.
#[derive(Debug)]
pub struct TouchDetail<'a, E> {
    /// Every active touch.
    pub touches: &'a TouchList<E>,
    /// The touch changed by this sample.
    pub changed_touches: &'a TouchList<E>,
    /// Touches relevant to the dispatch target.
    pub target_touches: &'a TouchList<E>,
}

impl<E> Clone for TouchDetail<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TouchDetail<'_, E> {}

/// Builds and fires host touch events.
///
/// The translator never constructs host event objects; it calls this once per
/// synthesized event with the event type, the owner target, and the lists.
/// Closures taking the same arguments implement it.
pub trait TouchDispatcher<E> {
    /// Fire a touch event of type `event_type` on `target`.
    fn dispatch(&mut self, event_type: TouchEventType, target: &E, detail: TouchDetail<'_, E>);
}

impl<E, F> TouchDispatcher<E> for F
where
    F: FnMut(TouchEventType, &E, TouchDetail<'_, E>),
{
    fn dispatch(&mut self, event_type: TouchEventType, target: &E, detail: TouchDetail<'_, E>) {
        self(event_type, target, detail);
    }
}

/// Why a sample produced no event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IgnoreReason {
    /// Move for an identifier with no preceding down (stray or hover-only movement).
    MoveWithoutDown,
    /// Up for an identifier that is not active (duplicate or out-of-order release).
    UpWithoutDown,
}

/// Result of handling one sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Translation {
    /// An event of this type was dispatched.
    Dispatched(TouchEventType),
    /// The sample was dropped.
    Ignored(IgnoreReason),
}

/// Counters over every sample handled since creation or the last reset.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TranslatorStats {
    /// Samples that produced an event.
    pub dispatched: u64,
    /// Samples that were ignored.
    pub ignored: u64,
}

/// Derive the touch event type for a sample.
///
/// `active` tells whether the sample's identifier is currently in the registry.
pub fn derive_event_type(
    phase: PointerPhase,
    active: bool,
) -> Result<TouchEventType, IgnoreReason> {
    match (phase, active) {
        (PointerPhase::Down, false) => Ok(TouchEventType::Start),
        // A repeated down keeps the registry unique by acting as an update.
        (PointerPhase::Down, true) | (PointerPhase::Move, true) => Ok(TouchEventType::Move),
        (PointerPhase::Up, true) => Ok(TouchEventType::End),
        (PointerPhase::Move, false) => Err(IgnoreReason::MoveWithoutDown),
        (PointerPhase::Up, false) => Err(IgnoreReason::UpWithoutDown),
    }
}

/// Translates single-pointer samples into touch events.
///
/// ## Usage
///
/// - Construct with [`Translator::new`] (or [`Default`]), or with
///   [`Translator::with_parent`] when using [`TargetTouches::OwnerWithin`].
/// - Call [`Translator::handle`] for every pointer sample, in delivery order.
/// - Call [`Translator::reset`] if the host loses the pointer stream.
pub struct Translator<E, P: ParentLookup<E> = NoParent> {
    registry: TouchRegistry<E>,
    config: TranslatorConfig,
    parent: P,
    stats: TranslatorStats,
}

impl<E: core::fmt::Debug, P: ParentLookup<E>> core::fmt::Debug for Translator<E, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Translator")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<E: Clone + PartialEq> Default for Translator<E> {
    fn default() -> Self {
        Self::new(TranslatorConfig::default())
    }
}

impl<E: Clone + PartialEq, P: ParentLookup<E> + Default> Translator<E, P> {
    /// Create a translator with an empty registry and a default parent lookup.
    pub fn new(config: TranslatorConfig) -> Self {
        Self::with_parent(config, P::default())
    }
}

impl<E: Clone + PartialEq, P: ParentLookup<E>> Translator<E, P> {
    /// Create a translator with an explicit parent lookup provider.
    pub fn with_parent(config: TranslatorConfig, parent: P) -> Self {
        Self {
            registry: TouchRegistry::new(),
            config,
            parent,
            stats: TranslatorStats::default(),
        }
    }

    /// The registry of active touches.
    pub fn registry(&self) -> &TouchRegistry<E> {
        &self.registry
    }

    /// Current configuration.
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Set the `target_touches` policy for subsequent events.
    pub fn set_target_touches(&mut self, policy: TargetTouches) {
        self.config.target_touches = policy;
    }

    /// Set the contact defaults for subsequent samples.
    pub fn set_defaults(&mut self, defaults: TouchDefaults) {
        self.config.defaults = defaults;
    }

    /// Counters since creation or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> TranslatorStats {
        self.stats
    }

    /// Zero the counters.
    pub fn reset_stats(&mut self) {
        self.stats = TranslatorStats::default();
    }

    /// Drop every active touch without synthesizing events.
    pub fn reset(&mut self) {
        if !self.registry.is_empty() {
            tracing::debug!(dropped = self.registry.len(), "touch registry reset");
        }
        self.registry.clear();
    }

    /// Translate one pointer sample, dispatching at most one touch event.
    pub fn handle(
        &mut self,
        sample: PointerSample<E>,
        dispatcher: &mut impl TouchDispatcher<E>,
    ) -> Translation {
        let id = sample.pointer_id;
        let event_type = match derive_event_type(sample.phase, self.registry.contains(id)) {
            Ok(ty) => ty,
            Err(reason) => {
                tracing::debug!(pointer_id = id.0, ?reason, "pointer sample ignored");
                self.stats.ignored += 1;
                return Translation::Ignored(reason);
            }
        };

        match event_type {
            TouchEventType::Start => {
                let owner = sample.target.clone();
                let point = TouchPoint::from_sample(&sample, owner.clone(), &self.config.defaults);
                let changed = TouchList::of(point.clone());
                self.registry.upsert(point);
                self.registry.set_owner(id, owner.clone());
                let targeted = self.collect_target_touches(&owner);
                self.emit(
                    event_type,
                    &owner,
                    self.registry.active(),
                    &changed,
                    &targeted,
                    dispatcher,
                );
            }
            TouchEventType::Move => {
                let owner = self.owner_for(id, &sample);
                let point = TouchPoint::from_sample(&sample, owner.clone(), &self.config.defaults);
                let changed = TouchList::of(point.clone());
                self.registry.upsert(point);
                let targeted = self.collect_target_touches(&owner);
                self.emit(
                    event_type,
                    &owner,
                    self.registry.active(),
                    &changed,
                    &targeted,
                    dispatcher,
                );
            }
            TouchEventType::End => {
                let owner = self.owner_for(id, &sample);
                let changed = TouchList::of(TouchPoint::from_sample(
                    &sample,
                    owner.clone(),
                    &self.config.defaults,
                ));
                let targeted = self.collect_target_touches(&owner);
                let touches = self.registry.active().clone();
                self.registry.remove(id);
                self.registry.clear_owner(id);
                self.emit(event_type, &owner, &touches, &changed, &targeted, dispatcher);
            }
        }

        debug_assert!(
            self.registry.is_consistent(),
            "active touches and owners diverged"
        );
        self.stats.dispatched += 1;
        Translation::Dispatched(event_type)
    }

    // Owner recorded at the down phase; an active id always has one.
    fn owner_for(&self, id: PointerId, sample: &PointerSample<E>) -> E {
        let owner = self.registry.owner_of(id).cloned();
        debug_assert!(owner.is_some(), "active pointer {id} has no owner");
        owner.unwrap_or_else(|| sample.target.clone())
    }

    fn collect_target_touches(&self, target: &E) -> TouchList<E> {
        let active = self.registry.active();
        match self.config.target_touches {
            TargetTouches::AllActive => active.clone(),
            TargetTouches::SameOwner => active
                .iter()
                .filter(|t| self.registry.owner_of(t.identifier) == Some(target))
                .cloned()
                .collect(),
            TargetTouches::OwnerWithin => active
                .iter()
                .filter(|t| {
                    self.registry
                        .owner_of(t.identifier)
                        .is_some_and(|owner| is_within(&self.parent, target, owner))
                })
                .cloned()
                .collect(),
        }
    }

    fn emit(
        &self,
        event_type: TouchEventType,
        target: &E,
        touches: &TouchList<E>,
        changed_touches: &TouchList<E>,
        target_touches: &TouchList<E>,
        dispatcher: &mut impl TouchDispatcher<E>,
    ) {
        tracing::trace!(
            event = event_type.as_str(),
            pointer_id = changed_touches[0].identifier.0,
            touches = touches.len(),
            target_touches = target_touches.len(),
            "dispatching touch event"
        );
        dispatcher.dispatch(
            event_type,
            target,
            TouchDetail {
                touches,
                changed_touches,
                target_touches,
            },
        );
    }
}
