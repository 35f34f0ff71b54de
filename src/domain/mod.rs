// Domain layer: workload parameters, measurements and the workload port.

pub mod model;
pub mod ports;
