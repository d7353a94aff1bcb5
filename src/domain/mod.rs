// Domain layer: the tour's value types and the ports lessons talk through.

pub mod account;
pub mod model;
pub mod ports;
pub mod shape;
