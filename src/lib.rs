//! startserver library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod b64;
pub mod cli;
pub mod command_runner;
pub mod maven;
pub mod output;
pub mod server;
