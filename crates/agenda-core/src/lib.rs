//! agenda-core - Core library for Agenda
//!
//! This crate contains the dataset models, the fuzzy text matcher, the
//! in-memory catalog, the ratings store and the HTTP client shared by the
//! agenda API server and CLI.

pub mod catalog;
pub mod client;
pub mod dataset;
pub mod error;
pub mod models;
pub mod ratings;
pub mod search;

pub use catalog::{Catalog, SessionFilter};
pub use error::{Error, Result};
pub use search::{is_match, SearchQuery};
