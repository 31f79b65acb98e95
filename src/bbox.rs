/*

    Axis Aligned Bounding Box computation over Body trees.

    Every variant maps to the minimal RectangularCuboid that
    encloses it; compounds aggregate their parts' boxes per
    axis. The per-leaf rules here are the single source of
    truth, boxify.rs delegates to them.

*/

use crate::bodies::{Ball, Body, CompoundBody, Cylinder, RectangularCuboid};
use crate::interval::Interval;
use crate::prelude::*;
use crate::visitor::BodyVisitor;

pub struct BoundingBoxVisitor;

impl BodyVisitor for BoundingBoxVisitor {
    type Output = RectangularCuboid;

    fn visit_ball(&self, ball: &Ball) -> RectangularCuboid {
        let length = ball.radius * 2.0;
        RectangularCuboid::new(ball.position, length, length, length)
    }

    // A cuboid is its own bounding box
    fn visit_cuboid(&self, cuboid: &RectangularCuboid) -> RectangularCuboid {
        cuboid.clone()
    }

    fn visit_cylinder(&self, cylinder: &Cylinder) -> RectangularCuboid {
        let diameter = cylinder.radius * 2.0;
        RectangularCuboid::new(cylinder.position, diameter, diameter, cylinder.size_z)
    }

    fn visit_compound(&self, compound: &CompoundBody) -> RectangularCuboid {
        let (mut xint, mut yint, mut zint) = (Interval::EMPTY, Interval::EMPTY, Interval::EMPTY);

        // Each axis aggregates independently over the parts' box endpoints
        for part in compound.parts() {
            let bbox = part.accept(self);

            let (xspan, yspan, zspan) = (bbox.x_span(), bbox.y_span(), bbox.z_span());
            xint.expand(xspan.min); xint.expand(xspan.max);
            yint.expand(yspan.min); yint.expand(yspan.max);
            zint.expand(zspan.min); zint.expand(zspan.max);
        }

        debug_assert!(xint.validate() && yint.validate() && zint.validate());
        let position = Vector3::new(xint.midpoint(), yint.midpoint(), zint.midpoint());
        RectangularCuboid::new(position, xint.size(), yint.size(), zint.size())
    }
}

/// Minimal axis-aligned box fully enclosing the body.
///
/// Recursion depth equals the tree's nesting depth; there is no
/// built-in depth guard, extremely deep trees are the caller's
/// concern.
pub fn compute_bounding_box(body: &Body) -> RectangularCuboid {
    body.accept(&BoundingBoxVisitor)
}
