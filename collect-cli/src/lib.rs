//! Command-line front end for the `collect` library.
//!
//! Reads one JSON document, runs a single collect operation over it and
//! prints the resulting JSON array.
//!
//! - **[`ops`]**: JSON-aware wrappers around the pure library operations.
//! - **[`io`]**: Reading the input document and rendering output.
//! - **[`config`]**: Optional TOML settings for output formatting.
//!
//! [`cli`] wires these together for the `collect` binary.

pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod ops;
