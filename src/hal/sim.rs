//! Simulated pin backend for host runs.
//!
//! Stands in for the ESP-IDF GPIO driver when the bridge runs off-target;
//! level changes go to the log side channel instead of hardware.

use super::{HalError, PinHandle, PinProvider};

/// Highest pin index the simulator accepts.
///
/// Indices past this report [`HalError::InvalidPin`], exercising the same
/// fault path a real GPIO driver takes for an out-of-range index.
pub const SIM_PIN_COUNT: i32 = 64;

/// A simulated output pin.
pub struct SimPin {
    index: i32,
    level: bool,
}

impl SimPin {
    /// Current driven level.
    pub fn level(&self) -> bool {
        self.level
    }
}

impl PinHandle for SimPin {
    fn set_level(&mut self, high: bool) -> Result<(), HalError> {
        self.level = high;
        log::debug!("gpio{} -> {}", self.index, if high { 1 } else { 0 });
        Ok(())
    }
}

/// Hands out [`SimPin`]s for any index in range.
#[derive(Default)]
pub struct SimPinProvider;

impl SimPinProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl PinProvider for SimPinProvider {
    type Pin = SimPin;

    fn acquire_output(&mut self, index: i32) -> Result<SimPin, HalError> {
        if !(0..SIM_PIN_COUNT).contains(&index) {
            return Err(HalError::InvalidPin(index));
        }
        log::debug!("gpio{} configured as output", index);
        Ok(SimPin {
            index,
            level: false,
        })
    }
}
