//! Gateway state wiring

mod state;

pub use state::GatewayState;
