// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch points and the defaults used when a source reports no contact data.

use kurbo::Point;

use crate::types::{PointerId, PointerSample};

/// Values substituted for contact data a pointer source does not report.
///
/// Pointer sources commonly lack contact geometry and some lack pressure.
/// The defaults match what touch consumers expect from a minimal contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchDefaults {
    /// Force used when the sample carries no pressure.
    pub force: f64,
    /// Horizontal radius used when the sample carries no contact size.
    pub radius_x: f64,
    /// Vertical radius used when the sample carries no contact size.
    pub radius_y: f64,
    /// Rotation used when the sample carries no twist.
    pub rotation_angle: f64,
}

impl TouchDefaults {
    /// Return a copy with a different default force.
    #[must_use]
    pub fn with_force(mut self, force: f64) -> Self {
        self.force = force;
        self
    }

    /// Return a copy with different default radii.
    #[must_use]
    pub fn with_radius(mut self, radius_x: f64, radius_y: f64) -> Self {
        self.radius_x = radius_x;
        self.radius_y = radius_y;
        self
    }

    /// Return a copy with a different default rotation.
    #[must_use]
    pub fn with_rotation_angle(mut self, rotation_angle: f64) -> Self {
        self.rotation_angle = rotation_angle;
        self
    }
}

impl Default for TouchDefaults {
    fn default() -> Self {
        Self {
            force: 0.5,
            radius_x: 1.0,
            radius_y: 1.0,
            rotation_angle: 0.0,
        }
    }
}

/// One finger or pointer contact, as seen by touch event consumers.
///
/// ## Target
///
/// `target` is the element under the contact at its down phase.
/// The [registry](crate::registry::TouchRegistry) never replaces it on update,
/// so later samples keep the original target even after the pointer drifts
/// onto another element.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchPoint<E> {
    /// Identifier shared by every sample of this contact.
    pub identifier: PointerId,
    /// Position in screen coordinates.
    pub screen: Point,
    /// Position in page coordinates.
    pub page: Point,
    /// Normalized pressure.
    pub force: f64,
    /// Horizontal radius of the contact ellipse.
    pub radius_x: f64,
    /// Vertical radius of the contact ellipse.
    pub radius_y: f64,
    /// Rotation of the contact ellipse in degrees.
    pub rotation_angle: f64,
    /// Element the contact started on.
    pub target: E,
}

impl<E> TouchPoint<E> {
    /// Create a touch point with [default](TouchDefaults::default) force and shape.
    pub fn new(target: E, identifier: PointerId, page: Point, screen: Point) -> Self {
        let defaults = TouchDefaults::default();
        Self {
            identifier,
            screen,
            page,
            force: defaults.force,
            radius_x: defaults.radius_x,
            radius_y: defaults.radius_y,
            rotation_angle: defaults.rotation_angle,
            target,
        }
    }

    /// Normalize a pointer sample into a touch point owned by `target`.
    ///
    /// Coordinates are copied verbatim. Pressure becomes force, half the
    /// contact size becomes the radii, and twist becomes the rotation angle.
    /// Missing values come from `defaults`.
    pub fn from_sample<S>(sample: &PointerSample<S>, target: E, defaults: &TouchDefaults) -> Self {
        let (radius_x, radius_y) = match sample.contact_size {
            Some(size) => (size.width / 2.0, size.height / 2.0),
            None => (defaults.radius_x, defaults.radius_y),
        };
        Self {
            identifier: sample.pointer_id,
            screen: sample.screen,
            page: sample.page,
            force: sample.pressure.unwrap_or(defaults.force),
            radius_x,
            radius_y,
            rotation_angle: sample.twist.unwrap_or(defaults.rotation_angle),
            target,
        }
    }

    /// Copy position, force, and shape from `other`, keeping this point's target.
    pub(crate) fn update_from(&mut self, other: Self) {
        debug_assert_eq!(
            self.identifier, other.identifier,
            "update must not change the identifier"
        );
        self.screen = other.screen;
        self.page = other.page;
        self.force = other.force;
        self.radius_x = other.radius_x;
        self.radius_y = other.radius_y;
        self.rotation_angle = other.rotation_angle;
    }
}
