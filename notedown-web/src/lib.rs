#[macro_use]
extern crate tracing;
#[macro_use]
extern crate lazy_static;

pub mod configuration;
pub mod html;
pub mod routes;
pub mod startup;
pub mod telemetry;
