//! LED blink helper.
//!
//! Cosmetic on/off sequencing for a status LED, used at startup to show
//! the firmware is alive before the serial loop takes over.

use crate::hal::{Delay, HalError, PinHandle};

/// A status LED on a dedicated output pin.
pub struct Led<H: PinHandle> {
    pin: H,
}

impl<H: PinHandle> Led<H> {
    pub fn new(pin: H) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) -> Result<(), HalError> {
        self.pin.set_level(true)
    }

    pub fn off(&mut self) -> Result<(), HalError> {
        self.pin.set_level(false)
    }

    /// Blink `times` times with the given on/off durations.
    pub fn blink(
        &mut self,
        delay: &mut impl Delay,
        on_ms: u32,
        off_ms: u32,
        times: u8,
    ) -> Result<(), HalError> {
        for _ in 0..times {
            self.on()?;
            delay.delay_ms(on_ms);
            self.off()?;
            delay.delay_ms(off_ms);
        }
        Ok(())
    }

    /// Quick attention blink.
    pub fn blink_fast(&mut self, delay: &mut impl Delay) -> Result<(), HalError> {
        self.blink(delay, 200, 100, 6)
    }

    /// Slow steady blink.
    pub fn blink_slow(&mut self, delay: &mut impl Delay) -> Result<(), HalError> {
        self.blink(delay, 1000, 1000, 6)
    }

    /// Turn off and release the pin.
    pub fn shutdown(mut self) -> Result<(), HalError> {
        self.off()
    }
}
