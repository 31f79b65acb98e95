/*

    Rewrite a Body tree into an isomorphic tree where every
    leaf has been replaced by its own bounding box.

    Unlike bbox.rs this never collapses a compound into one
    aggregate box: compounds keep their parts, nesting depth
    and part order, only the leaves change.

*/

use crate::bbox::BoundingBoxVisitor;
use crate::bodies::{Ball, Body, CompoundBody, Cylinder, RectangularCuboid};
use crate::visitor::BodyVisitor;

pub struct BoxifyVisitor;

// Leaf conversions delegate to BoundingBoxVisitor so the
// per-leaf box rules exist in exactly one place.
impl BodyVisitor for BoxifyVisitor {
    type Output = Body;

    fn visit_ball(&self, ball: &Ball) -> Body {
        Body::Cuboid(BoundingBoxVisitor.visit_ball(ball))
    }

    fn visit_cuboid(&self, cuboid: &RectangularCuboid) -> Body {
        Body::Cuboid(BoundingBoxVisitor.visit_cuboid(cuboid))
    }

    fn visit_cylinder(&self, cylinder: &Cylinder) -> Body {
        Body::Cuboid(BoundingBoxVisitor.visit_cylinder(cylinder))
    }

    fn visit_compound(&self, compound: &CompoundBody) -> Body {
        let parts = compound.parts().iter().map(|part| part.accept(self)).collect();
        Body::Compound(CompoundBody::new(parts))
    }
}

/// Same tree topology, every leaf replaced by its bounding box.
///
/// Recursion depth equals the tree's nesting depth, same caveat
/// as compute_bounding_box.
pub fn boxify(body: &Body) -> Body {
    body.accept(&BoxifyVisitor)
}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope
    use crate::bbox::compute_bounding_box;
    use crate::prelude::*;

    #[test]
    fn test_leaf_becomes_its_bounding_box() {
        let leaves = [
            Body::Ball(Ball::new(Vector3::new(1.0, 0.0, 0.0), 2.0)),
            Body::Cylinder(Cylinder::new(Vector3::ZERO, 10.0, 3.0)),
            Body::Cuboid(RectangularCuboid::new(Vector3::ZERO, 1.0, 2.0, 3.0)),
        ];

        for leaf in leaves {
            let boxed = boxify(&leaf);
            assert_eq!(boxed, Body::Cuboid(compute_bounding_box(&leaf)));
        }
    }

    #[test]
    fn test_compound_keeps_part_count_and_order() {
        let compound = Body::Compound(CompoundBody::new(vec![
            Body::Ball(Ball::new(Vector3::new(-5.0, 0.0, 0.0), 1.0)),
            Body::Cylinder(Cylinder::new(Vector3::new(5.0, 0.0, 0.0), 4.0, 1.0)),
        ]));

        let boxed = boxify(&compound);
        let Body::Compound(boxed) = boxed else {
            panic!("boxify turned a compound into {:?}", boxed);
        };

        assert_eq!(boxed.parts().len(), 2);
        // Order preserved: first part is still the one at x = -5
        assert!(approx_zero(boxed.parts()[0].position().x - (-5.0)));
        assert!(approx_zero(boxed.parts()[1].position().x - 5.0));
        for part in boxed.parts() {
            assert!(matches!(part, Body::Cuboid(_)));
        }
    }

    #[test]
    fn test_nesting_depth_preserved() {
        let a = Body::Ball(Ball::new(Vector3::new(0.0, 0.0, 4.0), 1.0));
        let b = Body::Ball(Ball::new(Vector3::new(0.0, 0.0, -4.0), 1.0));
        let c = Body::Cylinder(Cylinder::new(Vector3::ZERO, 2.0, 1.0));
        let tree = Body::Compound(CompoundBody::new(vec![
            Body::Compound(CompoundBody::new(vec![a.clone(), b.clone()])),
            c.clone(),
        ]));

        let boxed = boxify(&tree);
        let Body::Compound(outer) = boxed else {
            panic!("expected a compound root");
        };
        assert_eq!(outer.parts().len(), 2);

        let Body::Compound(inner) = &outer.parts()[0] else {
            panic!("inner compound was collapsed");
        };
        assert_eq!(inner.parts().len(), 2);
        assert_eq!(inner.parts()[0], Body::Cuboid(compute_bounding_box(&a)));
        assert_eq!(inner.parts()[1], Body::Cuboid(compute_bounding_box(&b)));
        assert_eq!(outer.parts()[1], Body::Cuboid(compute_bounding_box(&c)));
    }

    #[test]
    fn test_boxified_tree_has_same_aggregate_box() {
        // Rewriting leaves to their boxes cannot change the overall bounds
        let tree = Body::Compound(CompoundBody::new(vec![
            Body::Ball(Ball::new(Vector3::new(-5.0, 0.0, 0.0), 1.0)),
            Body::Ball(Ball::new(Vector3::new(5.0, 0.0, 0.0), 1.0)),
        ]));

        assert_eq!(compute_bounding_box(&boxify(&tree)), compute_bounding_box(&tree));
    }
}
