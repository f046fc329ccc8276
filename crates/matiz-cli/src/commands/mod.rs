//! CLI command implementations.

pub mod common;
pub mod cycle;
pub mod delete;
pub mod list;
pub mod load;
pub mod paths;
pub mod save;
