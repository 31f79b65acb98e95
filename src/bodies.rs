/*

    Declare solid body variants: Ball, RectangularCuboid,
    Cylinder, CompoundBody and the Body sum type tying them
    together.

    Bodies are immutable values. A CompoundBody owns its parts
    exclusively, so a body is always a finite tree. Operations
    over bodies live in bbox.rs and boxify.rs and go through
    the visitor in visitor.rs.

*/

use crate::interval::Interval;
use crate::prelude::*;


// =======================================================================================================
// Leaf bodies
// =======================================================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vector3,
    pub radius: Float,
}

impl Ball {
    pub fn new(position: Vector3, radius: Float) -> Self {
        Self {
            position,
            radius,
        }
    }
}

// Sizes are full extents, not half-extents
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularCuboid {
    pub position: Vector3,
    pub size_x: Float,
    pub size_y: Float,
    pub size_z: Float,
}

impl RectangularCuboid {
    pub fn new(position: Vector3, size_x: Float, size_y: Float, size_z: Float) -> Self {
        Self {
            position,
            size_x,
            size_y,
            size_z,
        }
    }

    pub fn x_span(&self) -> Interval {
        let half = self.size_x / 2.0;
        Interval::new(self.position.x - half, self.position.x + half)
    }

    pub fn y_span(&self) -> Interval {
        let half = self.size_y / 2.0;
        Interval::new(self.position.y - half, self.position.y + half)
    }

    pub fn z_span(&self) -> Interval {
        let half = self.size_z / 2.0;
        Interval::new(self.position.z - half, self.position.z + half)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    pub position: Vector3,
    pub size_z: Float, // height, along Z
    pub radius: Float,
}

impl Cylinder {
    pub fn new(position: Vector3, size_z: Float, radius: Float) -> Self {
        Self {
            position,
            size_z,
            radius,
        }
    }
}


// =======================================================================================================
// CompoundBody
// =======================================================================================================

// Parts stay private so a CompoundBody can never be observed empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundBody {
    parts: Vec<Body>,
}

impl CompoundBody {
    pub fn new(parts: Vec<Body>) -> Self {
        assert!(!parts.is_empty(), "CompoundBody requires at least one part");
        Self {
            parts,
        }
    }

    pub fn parts(&self) -> &[Body] {
        &self.parts
    }

    // Position of a compound is the position of its first part
    pub fn position(&self) -> Vector3 {
        self.parts[0].position()
    }
}


// =======================================================================================================
// Body sum type
// =======================================================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Ball(Ball),
    Cuboid(RectangularCuboid),
    Cylinder(Cylinder),
    Compound(CompoundBody),
}

impl Body {
    pub fn position(&self) -> Vector3 {
        match self {
            Body::Ball(ball) => ball.position,
            Body::Cuboid(cuboid) => cuboid.position,
            Body::Cylinder(cylinder) => cylinder.position,
            Body::Compound(compound) => compound.position(),
        }
    }
}

impl From<Ball> for Body {
    fn from(ball: Ball) -> Self {
        Body::Ball(ball)
    }
}

impl From<RectangularCuboid> for Body {
    fn from(cuboid: RectangularCuboid) -> Self {
        Body::Cuboid(cuboid)
    }
}

impl From<Cylinder> for Body {
    fn from(cylinder: Cylinder) -> Self {
        Body::Cylinder(cylinder)
    }
}

impl From<CompoundBody> for Body {
    fn from(compound: CompoundBody) -> Self {
        Body::Compound(compound)
    }
}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope
    use crate::numeric::approx_zero;

    #[test]
    fn test_compound_position_is_first_part() {
        let first = Ball::new(Vector3::new(1.0, 2.0, 3.0), 1.0);
        let second = Ball::new(Vector3::new(-4.0, 0.0, 0.0), 2.0);
        let compound = CompoundBody::new(vec![first.into(), second.into()]);

        assert!(approx_zero((compound.position() - Vector3::new(1.0, 2.0, 3.0)).length()));
    }

    #[test]
    #[should_panic(expected = "at least one part")]
    fn test_empty_compound_rejected() {
        let _ = CompoundBody::new(vec![]);
    }

    #[test]
    fn test_cuboid_spans() {
        let cuboid = RectangularCuboid::new(Vector3::new(1.0, 0.0, -1.0), 4.0, 2.0, 6.0);

        let xint = cuboid.x_span();
        assert!(approx_zero(xint.min - (-1.0)));
        assert!(approx_zero(xint.max - 3.0));

        let zint = cuboid.z_span();
        assert!(approx_zero(zint.min - (-4.0)));
        assert!(approx_zero(zint.max - 2.0));
    }
}
