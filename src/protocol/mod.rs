//! Serial command protocol for pin control.
//!
//! Newline-delimited ASCII lines, comma-separated fields. One input line
//! yields exactly one response line, except `GETALL` (one line per pin)
//! and blank lines (no response at all).

pub mod dispatch;
pub mod error;
pub mod line_buffer;
pub mod parser;
pub mod session;

pub use dispatch::execute;
pub use error::CommandError;
pub use line_buffer::LineBuffer;
pub use parser::{parse, Command};
pub use session::Session;
