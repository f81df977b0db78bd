//! Fluent query builder and client for the Punk API beer catalog.
//!
//! Filters are collected on a [`PunkApi`] through the [`Query`] trait,
//! resolved into an endpoint, and sent with the API key as Basic auth.

mod api;
mod client;
mod credential;
mod errors;
mod query;
pub mod types;
mod version;
pub use self::api::PunkApi;
pub use self::client::Client;
pub use self::credential::{Credential, DEFAULT_KEY};
pub use self::errors::Error;
pub use self::query::{BrewDate, IdList, Metric, Param, ParameterSet, Query, ValueKind};
pub use self::version::{ApiVersion, DEFAULT_HOST};
