#![cfg(test)]

/// Test context and helper functions
pub mod utils;




/// Read-only query surface
mod query;
