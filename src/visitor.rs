/*

    Double dispatch over the closed Body variant set.

    An operation over bodies implements BodyVisitor once per
    variant; Body::accept routes to the handler for the actual
    variant. The match is exhaustive, so adding a new variant
    forces every operation to handle it at compile time.

*/

use crate::bodies::{Ball, Body, CompoundBody, Cylinder, RectangularCuboid};

pub trait BodyVisitor {
    type Output;

    fn visit_ball(&self, ball: &Ball) -> Self::Output;
    fn visit_cuboid(&self, cuboid: &RectangularCuboid) -> Self::Output;
    fn visit_cylinder(&self, cylinder: &Cylinder) -> Self::Output;
    fn visit_compound(&self, compound: &CompoundBody) -> Self::Output;
}

impl Body {
    pub fn accept<V: BodyVisitor>(&self, visitor: &V) -> V::Output {
        match self {
            Body::Ball(ball) => visitor.visit_ball(ball),
            Body::Cuboid(cuboid) => visitor.visit_cuboid(cuboid),
            Body::Cylinder(cylinder) => visitor.visit_cylinder(cylinder),
            Body::Compound(compound) => visitor.visit_compound(compound),
        }
    }
}
