//! `layerbook-generator` library crate.
//!
//! Catalog acquisition, collection generation and configuration for the
//! `generate-dummy-data` binary, exposed for integration testing.

pub mod catalog;
pub mod config;
pub mod materialize;
