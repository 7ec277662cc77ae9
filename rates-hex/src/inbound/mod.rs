//! Terminal Inbound Adapter
//!
//! Line-oriented shell that drives the conversion service.

mod shell;

pub use shell::Shell;
