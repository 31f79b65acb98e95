
pub mod bodies;
pub mod visitor;
pub mod bbox;
pub mod boxify;
pub mod numeric;
pub mod interval;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;
