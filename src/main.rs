/*

    Report axis-aligned bounding boxes for solid body scenes.

    Loads a body tree from a JSON scene file, prints the minimal
    enclosing box of every top-level body and, at debug level,
    the boxified rewrite of the tree.

*/

use std::{self, env};
use tracing::{info, warn, error, debug};
use tracing_subscriber;

mod bodies;
mod visitor;
mod bbox;
mod boxify;
mod numeric;
mod interval;
mod json_structs;
mod json_parser;
mod prelude;

use crate::bbox::compute_bounding_box;
use crate::boxify::boxify;
use crate::json_parser::parse_scene;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let default_path = String::from("./inputs/bodies.json");
    let json_path: &String = if args.len() == 1 {
        warn!("No arguments were provided, setting default scene path...");
        &default_path
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading bodies from {}...", json_path);
    let root = parse_scene(json_path).map_err(|e| {
        error!("Failed to load scene: {}", e);
        e
    })?;

    let scene = root.scene;
    let raw_bodies = scene.bodies.all();
    info!("Scene '{}' has {} top-level bodies.", scene.name, raw_bodies.len());

    for (i, raw) in raw_bodies.iter().enumerate() {
        let body = raw.build().map_err(|e| {
            error!("Body {} is malformed: {}", i, e);
            e
        })?;

        let bounds = compute_bounding_box(&body);
        info!(
            "Body {}: bounding box centered at ({}, {}, {}) with sizes ({}, {}, {})",
            i,
            bounds.position.x, bounds.position.y, bounds.position.z,
            bounds.size_x, bounds.size_y, bounds.size_z,
        );
        debug!("Boxified tree for body {}:\n{:#?}", i, boxify(&body));
    }

    info!("Finished execution.");
    Ok(())
}
