//! Command line parser.
//!
//! Comma-separated fields; the first field is the verb, matched
//! case-insensitively. A recognized verb with too few arguments is NOT a
//! distinct error: it falls through to [`Command::Unknown`], the same
//! branch as an unrecognized verb. That fallthrough is protocol policy.

use super::error::CommandError;

/// A parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Drive a pin to a value (nonzero = high).
    Set { pin: i32, value: i32 },
    /// Read a pin's recorded level.
    Get { pin: i32 },
    /// Enumerate every registered pin.
    GetAll,
    /// Liveness check.
    Ping,
    /// Anything else; carries the verb as received.
    Unknown(&'a str),
}

/// Parse one line into a command.
///
/// Returns `Ok(None)` for a blank line (deliberate no-op, no response).
/// Integer fields that fail to parse surface as [`CommandError::Parse`];
/// nothing past the fields a verb consumes is inspected.
pub fn parse(line: &str) -> Result<Option<Command<'_>>, CommandError> {
    let mut fields = line.trim().split(',');
    let verb = fields.next().unwrap_or("");

    if verb.is_empty() {
        return Ok(None);
    }

    if verb.eq_ignore_ascii_case("SET") {
        if let (Some(pin), Some(value)) = (fields.next(), fields.next()) {
            return Ok(Some(Command::Set {
                pin: parse_int(pin)?,
                value: parse_int(value)?,
            }));
        }
        // short arity: fall through to Unknown
    } else if verb.eq_ignore_ascii_case("GET") {
        if let Some(pin) = fields.next() {
            return Ok(Some(Command::Get {
                pin: parse_int(pin)?,
            }));
        }
    } else if verb.eq_ignore_ascii_case("GETALL") {
        return Ok(Some(Command::GetAll));
    } else if verb.eq_ignore_ascii_case("PING") {
        return Ok(Some(Command::Ping));
    }

    Ok(Some(Command::Unknown(verb)))
}

/// Parse an integer field, tolerating surrounding whitespace.
fn parse_int(field: &str) -> Result<i32, CommandError> {
    field
        .trim()
        .parse::<i32>()
        .map_err(|_| CommandError::parse(field.trim()))
}
