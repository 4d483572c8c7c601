// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture and listener wiring with two elements.
//!
//! This example plays a small host: elements are rectangles, listener
//! registrations go through the shim, and pointer samples are only fed to the
//! translator for kinds the shim subscribed. Two contacts overlap; one drifts
//! off its element and keeps delivering to it.
//!
//! Run:
//! - `cargo run -p understory_touch_demos --example touch_capture`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_touch::shim::{ListenerShim, PointerKinds, ShimConfig};
use understory_touch::translator::{TargetTouches, TouchDetail, Translator, TranslatorConfig};
use understory_touch::types::{PointerId, PointerPhase, PointerSample, TouchEventType};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Element(&'static str);

struct Host {
    elements: Vec<(Element, Rect)>,
    shim: ListenerShim<Element>,
    subscribed: Vec<(Element, PointerKinds)>,
}

impl Host {
    fn add_listener(&mut self, element: Element, listener_type: &str) {
        let action = self.shim.attach(&element, listener_type, false);
        if !action.subscribe.is_empty() {
            println!("  subscribe {:?} on {:?}", action.subscribe, element);
        }
        self.subscribed.retain(|(e, _)| *e != element);
        self.subscribed
            .push((element, self.shim.subscriptions(&element, false)));
    }

    fn element_at(&self, pt: Point) -> Option<Element> {
        self.elements
            .iter()
            .rev()
            .find(|(_, r)| r.contains(pt))
            .map(|(e, _)| *e)
    }

    fn wants(&self, element: Element, phase: PointerPhase) -> bool {
        let kind = match phase {
            PointerPhase::Down => PointerKinds::DOWN,
            PointerPhase::Move => PointerKinds::MOVE,
            PointerPhase::Up => PointerKinds::UP,
        };
        self.subscribed
            .iter()
            .any(|(e, kinds)| *e == element && kinds.contains(kind))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let left = Element("left");
    let right = Element("right");
    let mut host = Host {
        elements: vec![
            (left, Rect::new(0.0, 0.0, 100.0, 100.0)),
            (right, Rect::new(100.0, 0.0, 200.0, 100.0)),
        ],
        shim: ListenerShim::new(ShimConfig::default()),
        subscribed: Vec::new(),
    };

    println!("== Listeners ==");
    for ty in ["touchstart", "touchmove", "touchend"] {
        host.add_listener(left, ty);
    }
    host.add_listener(right, "touchstart");
    host.add_listener(right, "touchend");

    let config = TranslatorConfig::default().with_target_touches(TargetTouches::SameOwner);
    let mut translator: Translator<Element> = Translator::new(config);
    let mut log = Vec::new();
    let mut fire = |ty: TouchEventType, target: &Element, detail: TouchDetail<'_, Element>| {
        println!(
            "  {:<10} on {:<5}  changed={}  touches={}  targetTouches={}",
            ty.as_str(),
            target.0,
            detail.changed_touches[0].identifier,
            detail.touches.len(),
            detail.target_touches.len(),
        );
        log.push((ty, target.0));
    };

    // Contact 1 starts on the left and drifts right; contact 2 taps the right.
    let script = [
        (1, PointerPhase::Down, Point::new(50.0, 50.0)),
        (2, PointerPhase::Down, Point::new(150.0, 50.0)),
        (1, PointerPhase::Move, Point::new(120.0, 50.0)),
        (2, PointerPhase::Up, Point::new(150.0, 50.0)),
        (1, PointerPhase::Move, Point::new(180.0, 50.0)),
        (1, PointerPhase::Up, Point::new(180.0, 50.0)),
    ];

    println!("== Events ==");
    for (id, phase, pt) in script {
        let Some(under) = host.element_at(pt) else {
            continue;
        };
        // Samples reach the translator through the listener of the element
        // that owns the contact, which is where the host's own capture routes them.
        let owner = translator
            .registry()
            .owner_of(PointerId(id))
            .copied()
            .unwrap_or(under);
        if !host.wants(owner, phase) {
            println!("  (no {:?} listener on {})", phase, owner.0);
            continue;
        }
        let sample = PointerSample::new(PointerId(id), phase, under, pt);
        translator.handle(sample, &mut fire);
    }

    assert_eq!(
        log,
        vec![
            (TouchEventType::Start, "left"),
            (TouchEventType::Start, "right"),
            (TouchEventType::Move, "left"),
            (TouchEventType::End, "right"),
            (TouchEventType::Move, "left"),
            (TouchEventType::End, "left"),
        ]
    );
    assert!(translator.registry().is_empty());
}
