// Domain layer: content models and ports (interfaces). No IO here.

pub mod model;
pub mod ports;
