//! Dynamic pin registry.
//!
//! Pins come under software control lazily: the first command that
//! addresses an index configures it as an output and stores the handle.
//! There is no upfront pin manifest; pin purpose is whatever the remote
//! operator makes of it.

use heapless::{FnvIndexMap, Vec};

use crate::hal::{Delay, HalError, PinHandle, PinProvider};

/// Most pins the registry can hold (must be a power of two).
pub const PIN_CAPACITY: usize = 64;

/// Error from a registry operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The pin-access layer rejected the index or the write.
    Hardware(HalError),
    /// The bounded pin map is full.
    Capacity,
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::Hardware(e) => write!(f, "{}", e),
            RegistryError::Capacity => write!(f, "pin capacity exhausted"),
        }
    }
}

/// A registered pin: the hardware handle plus its recorded output level.
pub struct PinEntry<H> {
    handle: H,
    level: bool,
}

impl<H: PinHandle> PinEntry<H> {
    /// Recorded logical level (0/1).
    pub fn level(&self) -> u8 {
        self.level as u8
    }

    /// Drive the pin and record the new level.
    ///
    /// The record is only updated once the hardware write succeeds.
    pub fn drive(&mut self, high: bool) -> Result<(), RegistryError> {
        self.handle
            .set_level(high)
            .map_err(RegistryError::Hardware)?;
        self.level = high;
        Ok(())
    }
}

/// Insertion-ordered map of pins under software control.
///
/// One entry per index for the process lifetime; re-addressing an index
/// reuses the existing entry. Enumeration follows first-registration order.
pub struct PinRegistry<P: PinProvider> {
    provider: P,
    pins: FnvIndexMap<i32, PinEntry<P::Pin>, PIN_CAPACITY>,
}

impl<P: PinProvider> PinRegistry<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            pins: FnvIndexMap::new(),
        }
    }

    /// Look up the entry for `index`, configuring the pin as an output on
    /// first reference.
    pub fn get_or_create(&mut self, index: i32) -> Result<&mut PinEntry<P::Pin>, RegistryError> {
        if !self.pins.contains_key(&index) {
            let handle = self
                .provider
                .acquire_output(index)
                .map_err(RegistryError::Hardware)?;
            let entry = PinEntry {
                handle,
                level: false,
            };
            let _ = self
                .pins
                .insert(index, entry)
                .map_err(|_| RegistryError::Capacity)?;
        }
        self.pins.get_mut(&index).ok_or(RegistryError::Capacity)
    }

    /// Drive `index` to `value` (nonzero = high) and record it.
    pub fn set(&mut self, index: i32, value: i32) -> Result<(), RegistryError> {
        self.get_or_create(index)?.drive(value != 0)
    }

    /// Recorded level of `index`, registering the pin if needed.
    pub fn get(&mut self, index: i32) -> Result<u8, RegistryError> {
        Ok(self.get_or_create(index)?.level())
    }

    /// All `(index, level)` pairs in first-registration order.
    pub fn all(&self) -> impl Iterator<Item = (i32, u8)> + '_ {
        self.pins.iter().map(|(index, entry)| (*index, entry.level()))
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Drive every registered pin low, best effort.
    ///
    /// A failing pin is recorded and skipped; the remaining pins are still
    /// lowered. Recorded levels are updated only for pins that went low.
    pub fn shutdown(&mut self) -> Vec<(i32, HalError), PIN_CAPACITY> {
        let mut failures = Vec::new();
        for (index, entry) in self.pins.iter_mut() {
            match entry.handle.set_level(false) {
                Ok(()) => entry.level = false,
                Err(e) => {
                    let _ = failures.push((*index, e));
                }
            }
        }
        failures
    }

    /// Toggle `index` on/off `times` times, then restore the level it held
    /// before the pulse.
    ///
    /// The recorded level is never modified, so a `GET` during or after a
    /// pulse reports the persisted state. A pin that was never registered
    /// is left alone.
    pub fn pulse(
        &mut self,
        index: i32,
        times: u8,
        duration_ms: u32,
        delay: &mut impl Delay,
    ) -> Result<(), HalError> {
        let Some(entry) = self.pins.get_mut(&index) else {
            return Ok(());
        };
        let restore = entry.level;
        for _ in 0..times {
            entry.handle.set_level(true)?;
            delay.delay_ms(duration_ms);
            entry.handle.set_level(false)?;
            delay.delay_ms(duration_ms);
        }
        entry.handle.set_level(restore)
    }
}
