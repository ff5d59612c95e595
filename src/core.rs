pub mod aggregate;
pub mod cost;
pub mod degradation;
pub mod engine;
pub mod request;
pub mod simulator;
pub mod solar;
