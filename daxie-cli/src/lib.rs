//! Command-line interface library for daxie
//!
//! Argument parsing, layered configuration and command dispatch for the
//! `daxie` binary.

pub mod cli;
pub mod dispatch;
pub mod session;

pub use cli::Cli;
pub use dispatch::Dispatcher;
pub use session::Session;
