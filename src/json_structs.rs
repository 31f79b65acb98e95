/*

    Declare data structs needed to parse scene JSON.

    - RawBody: one record per body, recursive through Parts
    - RawScene / RawRoot: file-level wrappers
    - SingleOrVec: JSON may give one <object> or an array

    Raw records carry every possible field as an Option; build()
    checks the fields required by the record's Type and produces
    a domain Body, rejecting malformed records with an error
    (never a panic, file input is not a programmer contract).

*/

use serde::Deserialize;
use smart_default::SmartDefault;

use crate::bodies::{Ball, Body, CompoundBody, Cylinder, RectangularCuboid};
use crate::json_parser::{deser_opt_float, deser_opt_vec3};
use crate::numeric::{Float, Vector3};

// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T> {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }
}

impl<T: Default> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawBody {
    #[serde(rename = "Type")]
    pub kind: String,

    #[serde(rename = "Position", default, deserialize_with = "deser_opt_vec3")]
    pub position: Option<Vector3>,

    #[serde(rename = "Radius", default, deserialize_with = "deser_opt_float")]
    pub radius: Option<Float>,

    #[serde(rename = "SizeX", default, deserialize_with = "deser_opt_float")]
    pub size_x: Option<Float>,
    #[serde(rename = "SizeY", default, deserialize_with = "deser_opt_float")]
    pub size_y: Option<Float>,
    #[serde(rename = "SizeZ", default, deserialize_with = "deser_opt_float")]
    pub size_z: Option<Float>,

    #[serde(rename = "Parts", default)]
    pub parts: Vec<RawBody>,
}

impl RawBody {
    pub fn build(&self) -> Result<Body, Box<dyn std::error::Error>> {
        match self.kind.as_str() {
            "Ball" => {
                let position = self.position.ok_or("Ball requires a Position field")?;
                let radius = self.radius.ok_or("Ball requires a Radius field")?;
                Ok(Body::Ball(Ball::new(position, radius)))
            }
            "RectangularCuboid" => {
                let position = self.position.ok_or("RectangularCuboid requires a Position field")?;
                let size_x = self.size_x.ok_or("RectangularCuboid requires a SizeX field")?;
                let size_y = self.size_y.ok_or("RectangularCuboid requires a SizeY field")?;
                let size_z = self.size_z.ok_or("RectangularCuboid requires a SizeZ field")?;
                Ok(Body::Cuboid(RectangularCuboid::new(position, size_x, size_y, size_z)))
            }
            "Cylinder" => {
                let position = self.position.ok_or("Cylinder requires a Position field")?;
                let size_z = self.size_z.ok_or("Cylinder requires a SizeZ field")?;
                let radius = self.radius.ok_or("Cylinder requires a Radius field")?;
                Ok(Body::Cylinder(Cylinder::new(position, size_z, radius)))
            }
            "Compound" => {
                // Rejected here so file input never reaches the
                // non-empty assertion in CompoundBody::new
                if self.parts.is_empty() {
                    return Err("Compound requires a non-empty Parts array".into());
                }
                let parts = self.parts
                    .iter()
                    .map(|part| part.build())
                    .collect::<Result<Vec<Body>, _>>()?;
                Ok(Body::Compound(CompoundBody::new(parts)))
            }
            other => Err(format!("Unknown body type '{}'", other).into()),
        }
    }
}


#[derive(Debug, Deserialize, Clone, SmartDefault)]
#[serde(default)]
pub struct RawScene {
    #[serde(rename = "Name")]
    #[default = "untitled"]
    pub name: String,

    #[serde(rename = "Bodies")]
    pub bodies: SingleOrVec<RawBody>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawRoot {
    #[serde(rename = "Scene")]
    pub scene: RawScene,
}
