//! CLI command implementations.

pub mod common;
pub mod compile;
pub mod energy;
pub mod mixer;
pub mod plan;
pub mod unembed;
pub mod version;
