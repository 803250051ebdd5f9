//! Domain entities and the ports the payment workflow depends on.

pub mod order;
pub mod ports;
