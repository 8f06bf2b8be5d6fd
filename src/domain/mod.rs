// Domain layer: entity model only. No IO, no external dependencies beyond std.

pub mod model;
