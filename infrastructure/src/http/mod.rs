//! HTTP adapter for the lookup service

mod gateway;
pub mod wire;

pub use gateway::HttpLookupGateway;
