/*

    Provide utilities to parse scene JSON files.

    This format currently assumes:
        - Numeric fields may be String (even floats can be in quotes e.g. "6")
        - Vector3 data fields are in format "<a> <a> <a>" where <a> is integer or float

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is.

    e.g. In JSON file both
    "Radius": "6" and "Radius": 6
    works as Radius: Float in source code

    WARNING: It is not robust for handling vec3 types given in brackets
    e.g. providing [0, 0, 0] for "Position" will fail. It is assumed to be
    "Position": "0 0 0" for the time being.

*/

use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Deserializer};
use serde::de::{self};
use serde_json::{self, Value};

use crate::json_structs::RawRoot;
use crate::numeric::{Float, Vector3};
use crate::prelude::*;

pub fn parse_scene(path: &str) -> Result<RawRoot, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_scene");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    // Parse JSON into raw scene records
    let root: RawRoot = serde_json::from_reader(reader)?;
    Ok(root)
}

// Handles floats as string or number; absent fields stay None
pub(crate) fn deser_opt_float<'de, D>(deserializer: D) -> Result<Option<Float>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64()
            .map(|v| Some(v as Float))
            .ok_or_else(|| de::Error::custom("Invalid float")),
        Value::String(s) => s.parse::<Float>()
            .map(Some)
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_opt_vec3<'de, D>(deserializer: D) -> Result<Option<Vector3>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::Null => Ok(None),
        Value::String(s) => parse_string_vec3(&s)
            .map(Some)
            .map_err(de::Error::custom),
        t => Err(de::Error::custom(format!("Expected \"<x> <y> <z>\" string, found {t}"))),
    }
}

pub(crate) fn parse_string_vec3(s: &str) -> Result<Vector3, String> {
    let coords = s.split_whitespace()
        .map(|token| token.parse::<Float>())
        .collect::<Result<Vec<Float>, _>>()
        .map_err(|_| format!("Failed to parse float triplet from '{}'", s))?;

    if coords.len() != 3 {
        return Err(format!("Expected 3 coordinates, found {} in '{}'", coords.len(), s));
    }
    Ok(Vector3::new(coords[0], coords[1], coords[2]))
}
