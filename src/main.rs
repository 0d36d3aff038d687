//! PinBridge entry point.
//!
//! On ESP-IDF: bring up logging and the control UART, blink the status
//! LED to show liveness, then hand the link to the serial session until
//! the stream closes.
//!
//! Off-target the same session runs over stdin/stdout with simulated
//! pins, which is enough to drive the whole protocol from a desktop
//! shell.

#[cfg(target_os = "espidf")]
fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    use esp_idf_svc::hal::gpio::AnyIOPin;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::{config::Config as UartConfig, UartDriver};
    use esp_idf_svc::hal::units::Hertz;

    use rust_pin_bridge::hal::esp::{EspPinProvider, RtosDelay, SerialRx, SerialTx};
    use rust_pin_bridge::hal::PinProvider;
    use rust_pin_bridge::{BridgeConfig, Led, Session, VERSION};

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let config = BridgeConfig::default();
    log::info!("{} starting", VERSION);

    let peripherals = Peripherals::take()?;
    let uart_config = UartConfig::default().baudrate(Hertz(config.uart_baud));
    let uart = UartDriver::new(
        peripherals.uart1,
        unsafe { AnyIOPin::new(config.uart_tx_pin) },
        unsafe { AnyIOPin::new(config.uart_rx_pin) },
        Option::<AnyIOPin>::None, // CTS
        Option::<AnyIOPin>::None, // RTS
        &uart_config,
    )?;
    let (tx, rx) = uart.split();

    let mut delay = RtosDelay;
    let mut provider = EspPinProvider::new();

    // Show alive before entering the loop; the handle is released again so
    // the protocol can claim the pin later.
    match provider.acquire_output(config.feedback_pin) {
        Ok(pin) => {
            let mut led = Led::new(pin);
            let _ = led.blink_fast(&mut delay);
            let _ = led.shutdown();
        }
        Err(err) => log::warn!("status LED unavailable: {}", err),
    }

    let mut session = Session::new(provider, &config);
    session.run(&mut SerialRx::new(rx), &mut SerialTx::new(tx), &mut delay);

    log::info!("serial link closed, bridge stopped");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    host::run();
}

#[cfg(not(target_os = "espidf"))]
mod host {
    use std::io::{Read, Write as IoWrite};

    use rust_pin_bridge::hal::sim::SimPinProvider;
    use rust_pin_bridge::hal::{Delay, SerialEvent, SerialInput};
    use rust_pin_bridge::{BridgeConfig, Session, VERSION};

    /// Blocking stdin reader; EOF closes the session.
    struct StdinInput<R: Read> {
        reader: R,
    }

    impl<R: Read> SerialInput for StdinInput<R> {
        fn poll(&mut self) -> SerialEvent {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) | Err(_) => SerialEvent::Closed,
                Ok(_) => SerialEvent::Byte(byte[0]),
            }
        }
    }

    /// Response sink flushing each write so a piped peer sees lines
    /// immediately.
    struct StdoutSink;

    impl core::fmt::Write for StdoutSink {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let mut stdout = std::io::stdout();
            stdout
                .write_all(s.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|_| core::fmt::Error)
        }
    }

    struct SleepDelay;

    impl Delay for SleepDelay {
        fn delay_ms(&mut self, ms: u32) {
            std::thread::sleep(std::time::Duration::from_millis(ms as u64));
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
        log::info!("{} starting (host simulation)", VERSION);

        let config = BridgeConfig::default();
        let mut session = Session::new(SimPinProvider::new(), &config);
        let mut input = StdinInput {
            reader: std::io::stdin().lock(),
        };

        session.run(&mut input, &mut StdoutSink, &mut SleepDelay);

        log::info!("input closed, bridge stopped");
    }
}
