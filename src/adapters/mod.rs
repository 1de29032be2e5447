// Adapters layer: concrete HTTP clients for the two external collaborators.

pub mod metrics;
pub mod signature;
pub mod suggest;
