// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch basics.
//!
//! This minimal example turns one pointer contact into `touchstart`,
//! `touchmove`, and `touchend`, and shows a stray move being ignored.
//!
//! Run:
//! - `cargo run -p understory_touch_demos --example touch_basics`
//! - `RUST_LOG=understory_touch=trace cargo run -p understory_touch_demos --example touch_basics`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_touch::translator::{IgnoreReason, TouchDetail, Translation, Translator};
use understory_touch::types::{PointerId, PointerSample, TouchEventType};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Element(u32);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut translator: Translator<Element> = Translator::default();
    let mut fired = Vec::new();
    let mut fire = |ty: TouchEventType, target: &Element, detail: TouchDetail<'_, Element>| {
        let changed = &detail.changed_touches[0];
        println!(
            "  {:<10} target={:?}  id={}  page=({}, {})  touches={}",
            ty.as_str(),
            target,
            changed.identifier,
            changed.page.x,
            changed.page.y,
            detail.touches.len(),
        );
        fired.push(ty);
    };

    let id = PointerId(1);
    println!("== One contact ==");
    translator.handle(PointerSample::down(id, Element(1), Point::new(10.0, 10.0)), &mut fire);
    translator.handle(PointerSample::moved(id, Element(1), Point::new(20.0, 20.0)), &mut fire);
    translator.handle(PointerSample::up(id, Element(1), Point::new(20.0, 20.0)), &mut fire);

    println!("== Stray move ==");
    let stray = translator.handle(
        PointerSample::moved(PointerId(2), Element(1), Point::new(0.0, 0.0)),
        &mut fire,
    );
    println!("  {:?}", stray);

    assert_eq!(
        fired,
        vec![TouchEventType::Start, TouchEventType::Move, TouchEventType::End]
    );
    assert_eq!(stray, Translation::Ignored(IgnoreReason::MoveWithoutDown));
    println!("== Stats ==\n  {:?}", translator.stats());
}
