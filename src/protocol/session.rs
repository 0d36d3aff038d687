//! Serial control loop.
//!
//! Single-threaded: read a byte, accumulate, dispatch on newline, write
//! the response, repeat. Commands never overlap, so the registry needs no
//! locking.

use core::fmt::Write;

use super::dispatch;
use super::line_buffer::LineBuffer;
use crate::config::BridgeConfig;
use crate::feedback::Feedback;
use crate::hal::{Delay, PinProvider, SerialEvent, SerialInput};
use crate::registry::PinRegistry;

/// One control session over a serial link.
pub struct Session<P: PinProvider> {
    line: LineBuffer,
    registry: PinRegistry<P>,
    feedback: Feedback,
    idle_poll_ms: u32,
}

impl<P: PinProvider> Session<P> {
    pub fn new(provider: P, config: &BridgeConfig) -> Self {
        Self {
            line: LineBuffer::new(),
            registry: PinRegistry::new(provider),
            feedback: Feedback::from_config(config),
            idle_poll_ms: config.idle_poll_ms,
        }
    }

    /// Access the pin registry.
    pub fn registry(&mut self) -> &mut PinRegistry<P> {
        &mut self.registry
    }

    /// Process a single input byte.
    ///
    /// On newline the buffered line is dispatched as one command; a blank
    /// line dispatches nothing and emits nothing. Every other byte is
    /// accumulated (the parser trims, so CR before LF is harmless).
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write, delay: &mut impl Delay) {
        if byte != b'\n' {
            self.line.push(byte);
            return;
        }

        if !self.line.is_empty() {
            let responded = dispatch::execute(self.line.as_str(), &mut self.registry, out);
            if responded {
                self.feedback.acknowledge(&mut self.registry, delay);
            }
            self.line.clear();
        }
    }

    /// Run until the input stream closes, then shut the pins down.
    ///
    /// An idle poll is retried after a short sleep; it is never an error.
    pub fn run(
        &mut self,
        input: &mut impl SerialInput,
        out: &mut dyn Write,
        delay: &mut impl Delay,
    ) {
        loop {
            match input.poll() {
                SerialEvent::Byte(byte) => self.process_byte(byte, out, delay),
                SerialEvent::Idle => delay.delay_ms(self.idle_poll_ms),
                SerialEvent::Closed => break,
            }
        }
        self.shutdown();
    }

    /// Drive every registered pin low and report the outcome on the log
    /// side channel, never on the response stream.
    pub fn shutdown(&mut self) {
        let failures = self.registry.shutdown();
        for (pin, err) in &failures {
            log::warn!("pin {} failed to go low: {}", pin, err);
        }
        log::info!("all pins set low");
    }
}
