//! ESP-IDF implementations of the HAL traits.
//!
//! Pins are acquired dynamically by index via `AnyOutputPin`, so the
//! remote operator decides pin purpose at runtime; an index the GPIO
//! matrix rejects comes back as an `EspError`, not a panic.

use esp_idf_svc::hal::delay::{FreeRtos, NON_BLOCK};
use esp_idf_svc::hal::gpio::{AnyOutputPin, Level, Output, PinDriver};
use esp_idf_svc::hal::uart::{UartRxDriver, UartTxDriver};

use super::{Delay, HalError, PinHandle, PinProvider, SerialEvent, SerialInput};

impl PinHandle for PinDriver<'static, AnyOutputPin, Output> {
    fn set_level(&mut self, high: bool) -> Result<(), HalError> {
        PinDriver::set_level(self, Level::from(high))
            .map_err(|e| HalError::Platform(e.code()))
    }
}

/// Acquires ESP-IDF output pins by GPIO number.
#[derive(Default)]
pub struct EspPinProvider;

impl EspPinProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl PinProvider for EspPinProvider {
    type Pin = PinDriver<'static, AnyOutputPin, Output>;

    fn acquire_output(&mut self, index: i32) -> Result<Self::Pin, HalError> {
        if index < 0 {
            return Err(HalError::InvalidPin(index));
        }
        // SAFETY: the driver init below validates the index against the
        // GPIO matrix; a bad index fails there with ESP_ERR_INVALID_ARG.
        let pin = unsafe { AnyOutputPin::new(index) };
        PinDriver::output(pin).map_err(|e| HalError::Platform(e.code()))
    }
}

/// Non-blocking byte reads from a UART.
pub struct SerialRx<'d> {
    uart: UartRxDriver<'d>,
}

impl<'d> SerialRx<'d> {
    pub fn new(uart: UartRxDriver<'d>) -> Self {
        Self { uart }
    }
}

impl SerialInput for SerialRx<'_> {
    fn poll(&mut self) -> SerialEvent {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte, NON_BLOCK) {
            Ok(0) => SerialEvent::Idle,
            Ok(_) => SerialEvent::Byte(byte[0]),
            // UART errors are transient (fifo overflow etc); keep polling.
            Err(_) => SerialEvent::Idle,
        }
    }
}

/// Response sink writing to a UART.
pub struct SerialTx<'d> {
    uart: UartTxDriver<'d>,
}

impl<'d> SerialTx<'d> {
    pub fn new(uart: UartTxDriver<'d>) -> Self {
        Self { uart }
    }
}

impl core::fmt::Write for SerialTx<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            match self.uart.write(bytes) {
                Ok(0) | Err(_) => return Err(core::fmt::Error),
                Ok(n) => bytes = &bytes[n..],
            }
        }
        Ok(())
    }
}

/// FreeRTOS-backed delay.
pub struct RtosDelay;

impl Delay for RtosDelay {
    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
