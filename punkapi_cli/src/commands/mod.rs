//! CLI subcommand implementations.

pub mod beer;
pub mod beers;
pub mod endpoint;
pub mod random;
