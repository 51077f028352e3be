//! Domain layer: the order model, the pure business rules, and the ports
//! through which the application reaches its collaborators.

pub mod api;
pub mod order;
pub mod ports;
pub mod rules;
