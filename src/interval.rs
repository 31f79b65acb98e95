/*

    Responsible for creating a struct that represents
    ranges from a to b. Bounding boxes are aggregated
    per axis by folding span endpoints into an Interval
    starting from EMPTY.

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf)
    - UNIVERSE: (-inf, inf)

*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: Float::INFINITY,
        max: Float::NEG_INFINITY,
    };

    pub const UNIVERSE: Self = Self {
        min: Float::NEG_INFINITY,
        max: Float::INFINITY,
    };

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn midpoint(&self) -> Float {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

}
