// Domain layer: activity model, the registry port, and the default seed.

pub mod model;
pub mod ports;
pub mod seed;
