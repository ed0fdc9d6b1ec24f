/// HTTP transport for the Census Bureau API
pub mod client;
/// Request URL assembly
pub mod url;

pub use client::CensusClient;
