//! # PinBridge
//!
//! Serial GPIO bridge firmware: a remote operator drives digital output
//! pins over a newline-delimited, comma-separated command protocol.
//!
//! ## Architecture
//!
//! One cooperative control loop, no tasks:
//! - [`protocol::Session`] reads the serial link one byte at a time
//! - completed lines are parsed into [`protocol::Command`] and dispatched
//! - [`registry::PinRegistry`] lazily configures pins on first reference
//!
//! Hardware access sits behind the [`hal`] traits, so the entire protocol
//! core builds and tests on the host.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod feedback;
pub mod hal;
pub mod led;
pub mod protocol;
pub mod registry;

pub use config::BridgeConfig;
pub use feedback::Feedback;
pub use led::Led;
pub use protocol::{Command, CommandError, LineBuffer, Session};
pub use registry::{PinRegistry, RegistryError};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");
