// Domain layer: content records and ports (interfaces). No dependencies on
// adapters or configuration.

pub mod model;
pub mod ports;
