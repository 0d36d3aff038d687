//! Command dispatcher.
//!
//! Exhaustive match over the parsed command; every fault raised while
//! executing one command is converted into a single `ERR` response line
//! here and never propagates to the serial loop.

use core::fmt::Write;

use super::error::CommandError;
use super::parser::{parse, Command};
use crate::hal::PinProvider;
use crate::registry::PinRegistry;

/// Fixed liveness payload; no meaning beyond "the loop is alive".
pub const PONG: &str = "PONG,64,I_VALUE_YOU";

/// Execute one input line against the registry, writing response lines to
/// `out`.
///
/// Returns `true` if the line produced any response (i.e. was not blank).
/// The SET acknowledgment echoes the value as parsed from the input; it is
/// not re-read from hardware.
pub fn execute<P: PinProvider>(
    line: &str,
    registry: &mut PinRegistry<P>,
    out: &mut dyn Write,
) -> bool {
    let cmd = match parse(line) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return false,
        Err(err) => {
            report(out, &err);
            return true;
        }
    };

    match cmd {
        Command::Set { pin, value } => match registry.set(pin, value) {
            Ok(()) => {
                let _ = writeln!(out, "OK,SET,{},{}", pin, value);
            }
            Err(err) => report(out, &err.into()),
        },
        Command::Get { pin } => match registry.get(pin) {
            Ok(level) => {
                let _ = writeln!(out, "OK,GET,{},{}", pin, level);
            }
            Err(err) => report(out, &err.into()),
        },
        Command::GetAll => {
            if registry.is_empty() {
                let _ = writeln!(out, "OK,NO_PINS_SET");
            } else {
                for (pin, level) in registry.all() {
                    let _ = writeln!(out, "OK,GET,{},{}", pin, level);
                }
            }
        }
        Command::Ping => {
            let _ = writeln!(out, "OK,{}", PONG);
        }
        Command::Unknown(verb) => {
            let _ = write!(out, "ERR,UNKNOWN_COMMAND,");
            for c in verb.chars() {
                let _ = out.write_char(c.to_ascii_uppercase());
            }
            let _ = out.write_char('\n');
        }
    }
    true
}

fn report(out: &mut dyn Write, err: &CommandError) {
    let _ = writeln!(out, "ERR,EXCEPTION,{},{}", err.kind(), err);
}
