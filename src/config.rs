//! Firmware configuration.

/// Bridge settings with board defaults.
pub struct BridgeConfig {
    /// Baud rate of the control link UART.
    pub uart_baud: u32,
    /// Control link UART TX pin.
    pub uart_tx_pin: i32,
    /// Control link UART RX pin.
    pub uart_rx_pin: i32,
    /// Indicator pin pulsed to acknowledge activity (onboard LED on most
    /// devkits).
    pub feedback_pin: i32,
    /// Toggles per feedback pulse.
    pub feedback_times: u8,
    /// On/off time of one feedback toggle, in ms.
    pub feedback_duration_ms: u32,
    /// Feedback pulsing on response emission. Off in the reference setup.
    pub feedback_enabled: bool,
    /// Sleep between empty serial polls, in ms.
    pub idle_poll_ms: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            uart_baud: 115_200,
            uart_tx_pin: 17,
            uart_rx_pin: 18,
            feedback_pin: 2,
            feedback_times: 3,
            feedback_duration_ms: 50,
            feedback_enabled: false,
            idle_poll_ms: 1,
        }
    }
}
