//! # fleet-cli
//!
//! Command-line front end for the fleetc compile subsystem.
//!
//! ## Commands
//!
//! - `fleetc compile all [ENVIRONMENT]` - monitor keypair, SSH trust
//!   files, then the downstream node/secrets export
//! - `fleetc compile zone` - BIND zone file for the provider, on stdout

pub mod cli;
pub mod config;

pub use cli::run;
