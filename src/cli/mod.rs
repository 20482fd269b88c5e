//! Command-line interface types for the `revu` binary.

pub mod args;
