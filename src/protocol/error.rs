//! Protocol error types.

use heapless::String;

use crate::hal::HalError;
use crate::registry::RegistryError;

/// Most characters of an offending token kept for the error detail.
pub const TOKEN_SIZE: usize = 24;

/// Fault raised while parsing or executing one command.
///
/// Reported on the wire as `ERR,EXCEPTION,<kind>,<detail>` and fully
/// contained within the command that raised it; the serial loop never
/// sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A required integer field failed to parse.
    Parse { token: String<TOKEN_SIZE> },
    /// The pin-access layer rejected the index or the write.
    Hardware(HalError),
    /// The registry's bounded pin map is full.
    RegistryFull,
}

impl CommandError {
    /// Build a parse error carrying (a truncated copy of) the bad token.
    pub fn parse(token: &str) -> Self {
        let mut copy = String::new();
        for c in token.chars() {
            if copy.push(c).is_err() {
                break;
            }
        }
        CommandError::Parse { token: copy }
    }

    /// Error kind for the wire format.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Parse { .. } => "ParseError",
            CommandError::Hardware(_) => "HardwareFault",
            CommandError::RegistryFull => "RegistryFull",
        }
    }
}

impl From<RegistryError> for CommandError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Hardware(e) => CommandError::Hardware(e),
            RegistryError::Capacity => CommandError::RegistryFull,
        }
    }
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::Parse { token } => write!(f, "invalid integer '{}'", token),
            CommandError::Hardware(e) => write!(f, "{}", e),
            CommandError::RegistryFull => write!(f, "pin capacity exhausted"),
        }
    }
}
