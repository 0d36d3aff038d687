//! Shared test doubles for the hardware seams.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use rust_pin_bridge::hal::{Delay, HalError, PinHandle, PinProvider, SerialEvent, SerialInput};

/// One observed hardware write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub pin: i32,
    pub high: bool,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

/// Mock output pin recording every successful write into a shared log.
pub struct MockPin {
    index: i32,
    fail: bool,
    events: EventLog,
}

impl PinHandle for MockPin {
    fn set_level(&mut self, high: bool) -> Result<(), HalError> {
        if self.fail {
            return Err(HalError::Platform(-1));
        }
        self.events.lock().unwrap().push(Event {
            pin: self.index,
            high,
        });
        Ok(())
    }
}

/// Mock pin backend with injectable acquire/drive failures.
pub struct MockProvider {
    events: EventLog,
    fail_acquire: HashSet<i32>,
    fail_drive: HashSet<i32>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            fail_acquire: HashSet::new(),
            fail_drive: HashSet::new(),
        }
    }

    /// Acquiring this index will fail, as a rejected platform index would.
    pub fn fail_acquire(mut self, index: i32) -> Self {
        self.fail_acquire.insert(index);
        self
    }

    /// Writes to this index will fail after a successful acquire.
    pub fn fail_drive(mut self, index: i32) -> Self {
        self.fail_drive.insert(index);
        self
    }

    /// Handle onto the shared write log.
    pub fn events(&self) -> EventLog {
        Arc::clone(&self.events)
    }
}

impl PinProvider for MockProvider {
    type Pin = MockPin;

    fn acquire_output(&mut self, index: i32) -> Result<MockPin, HalError> {
        if self.fail_acquire.contains(&index) {
            return Err(HalError::InvalidPin(index));
        }
        Ok(MockPin {
            index,
            fail: self.fail_drive.contains(&index),
            events: self.events(),
        })
    }
}

/// Serial input replaying a fixed script, then reporting `Closed`.
pub struct ScriptedInput {
    events: VecDeque<SerialEvent>,
}

impl ScriptedInput {
    pub fn new(events: Vec<SerialEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Script that delivers `input` byte by byte and then closes.
    pub fn from_str(input: &str) -> Self {
        Self::new(input.bytes().map(SerialEvent::Byte).collect())
    }
}

impl SerialInput for ScriptedInput {
    fn poll(&mut self) -> SerialEvent {
        self.events.pop_front().unwrap_or(SerialEvent::Closed)
    }
}

/// Delay that just records what it was asked to wait.
#[derive(Default)]
pub struct RecordingDelay {
    pub calls: Vec<u32>,
}

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}

/// Delay that does nothing.
pub struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}
