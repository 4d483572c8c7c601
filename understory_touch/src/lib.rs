// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_touch --heading-base-level=0

//! Understory Touch: deterministic, `no_std` multi-touch events from single-pointer input.
//!
//! ## Overview
//!
//! Some platforms only deliver pointer events: down, move, and up, each
//! naming one pointer by a numeric identifier. Code written against the touch
//! event model expects `touchstart`, `touchmove`, and `touchend` carrying
//! three lists: `touches`, `changedTouches`, and `targetTouches`.
//! This crate bridges the two.
//!
//! It does not perform hit testing or build host event objects.
//! Instead, feed it [`PointerSample`](crate::types::PointerSample) values whose
//! target your host already resolved, and it calls a
//! [`TouchDispatcher`](crate::translator::TouchDispatcher) with the touch event
//! to fire.
//!
//! ## Pieces
//!
//! - [`TouchRegistry`](crate::registry::TouchRegistry): active touch points in
//!   order of first contact, plus the element each one started on.
//! - [`Translator`](crate::translator::Translator): per-identifier state
//!   machine that updates the registry, derives the event type, and assembles
//!   the touch lists.
//! - [`TouchList`](crate::list::TouchList): the ordered list type handed to consumers.
//! - [`ListenerShim`](crate::shim::ListenerShim): maps touch listener
//!   registrations to the pointer kinds the host must subscribe to.
//!
//! ## Capture
//!
//! A touch is captured by the element it started on.
//! Every later event for that touch is dispatched there, even after the pointer
//! has moved over other elements, and its touch point keeps that element as its target.
//!
//! ## Ignored samples
//!
//! Move or up samples for an identifier without a preceding down are dropped
//! without touching the registry. They are reported as
//! [`Translation::Ignored`](crate::translator::Translation::Ignored) and counted
//! in [`TranslatorStats`](crate::translator::TranslatorStats); they never fail.
//!
//! ## Workflow
//!
//! 1) Route listener registrations through the shim and subscribe to the pointer kinds it names.
//! 2) For each pointer event, build a sample and call [`Translator::handle`](crate::translator::Translator::handle).
//! 3) In your dispatcher, build the host touch event from the type, target, and lists.
//!
//! ```
//! use kurbo::Point;
//! use understory_touch::translator::{TouchDetail, Translator};
//! use understory_touch::types::{PointerId, PointerSample, TouchEventType};
//!
//! let mut translator: Translator<u32> = Translator::default();
//! let mut log = Vec::new();
//! let mut fire = |ty: TouchEventType, target: &u32, detail: TouchDetail<'_, u32>| {
//!     log.push((ty, *target, detail.touches.len(), detail.changed_touches.len()));
//! };
//!
//! translator.handle(PointerSample::down(PointerId(1), 10, Point::new(5.0, 5.0)), &mut fire);
//! translator.handle(PointerSample::down(PointerId(2), 20, Point::new(50.0, 5.0)), &mut fire);
//! translator.handle(PointerSample::up(PointerId(1), 10, Point::new(5.0, 5.0)), &mut fire);
//!
//! assert_eq!(log[2], (TouchEventType::End, 10, 2, 1));
//! assert_eq!(translator.registry().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod list;
pub mod registry;
pub mod shim;
pub mod touch;
pub mod translator;
pub mod types;
