//! Hardware abstraction for PinBridge.
//!
//! Thin trait seams over the pin, delay and serial peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod sim;

#[cfg(target_os = "espidf")]
pub mod esp;

/// Error from the pin-access layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// The index does not name a usable pin on this platform.
    InvalidPin(i32),
    /// The platform driver rejected the operation (raw error code).
    Platform(i32),
}

impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::InvalidPin(pin) => write!(f, "invalid pin {}", pin),
            HalError::Platform(code) => write!(f, "platform error {}", code),
        }
    }
}

/// A single digital output pin, already configured for output.
pub trait PinHandle {
    /// Drive the pin high (`true`) or low (`false`).
    fn set_level(&mut self, high: bool) -> Result<(), HalError>;
}

/// Acquires output pins by platform index.
pub trait PinProvider {
    type Pin: PinHandle;

    /// Configure the pin at `index` as an output and hand it over.
    ///
    /// An index the platform cannot drive surfaces as [`HalError`];
    /// it must never panic.
    fn acquire_output(&mut self, index: i32) -> Result<Self::Pin, HalError>;
}

/// Blocking millisecond delay.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// One poll of the serial input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialEvent {
    /// A byte arrived.
    Byte(u8),
    /// Nothing yet; poll again.
    Idle,
    /// The stream ended (peer closed / external interrupt).
    Closed,
}

/// Byte-at-a-time serial input.
pub trait SerialInput {
    fn poll(&mut self) -> SerialEvent;
}
