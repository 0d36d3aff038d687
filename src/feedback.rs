//! Activity feedback indicator.
//!
//! Pulses a designated LED pin to visually acknowledge protocol activity.
//! Logically inert: the pulse restores the pin's previous level and never
//! touches its recorded value, so the protocol state is undisturbed.
//! Disabled in the reference configuration.

use crate::config::BridgeConfig;
use crate::hal::{Delay, PinProvider};
use crate::registry::PinRegistry;

/// Feedback pulse settings.
pub struct Feedback {
    pub pin: i32,
    pub times: u8,
    pub duration_ms: u32,
    pub enabled: bool,
}

impl Feedback {
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            pin: config.feedback_pin,
            times: config.feedback_times,
            duration_ms: config.feedback_duration_ms,
            enabled: config.feedback_enabled,
        }
    }

    /// Pulse the indicator after a response went out.
    ///
    /// No-op when disabled or when the indicator pin was never addressed
    /// by the protocol. A pulse failure is cosmetic and only logged.
    pub fn acknowledge<P: PinProvider>(
        &self,
        registry: &mut PinRegistry<P>,
        delay: &mut impl Delay,
    ) {
        if !self.enabled {
            return;
        }
        if let Err(err) = registry.pulse(self.pin, self.times, self.duration_ms, delay) {
            log::debug!("feedback pulse failed: {}", err);
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Feedback::from_config(&BridgeConfig::default())
    }
}
