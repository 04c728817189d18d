// Domain layer: plan model and ports. No dependencies beyond std.

pub mod model;
pub mod ports;
