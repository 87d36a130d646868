// Domain layer: normalized listing records and the ports (provider, sink) the engine depends on.

pub mod model;
pub mod ports;
