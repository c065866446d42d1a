//! Domain model and record synthesis for layer-set dummy data.
//!
//! Everything here is free of I/O: the catalog is passed in as a value,
//! the generation time and random source are supplied by the caller.

pub mod catalog;
pub mod error;
pub mod synthesis;
pub mod types;
pub mod vocabulary;
