// Domain layer: voyage models and input ports. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
