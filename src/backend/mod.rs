//! Wire types and HTTP transport for the sports-stats backend.

pub mod http;
pub mod types;
