//! Pin registry tests: lazy registration, ordering, shutdown, pulse.

mod common;

use common::{Event, MockProvider, NoDelay, RecordingDelay};
use rust_pin_bridge::hal::HalError;
use rust_pin_bridge::registry::{PinRegistry, RegistryError, PIN_CAPACITY};

#[test]
fn test_first_reference_registers_pin() {
    let mut registry = PinRegistry::new(MockProvider::new());

    assert!(registry.is_empty());
    assert_eq!(registry.get(5).unwrap(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_readdressing_reuses_the_entry() {
    let mut registry = PinRegistry::new(MockProvider::new());

    registry.get(5).unwrap();
    registry.set(5, 1).unwrap();
    registry.get(5).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.all().collect::<Vec<_>>(), vec![(5, 1)]);
}

#[test]
fn test_set_records_level() {
    let mut registry = PinRegistry::new(MockProvider::new());

    registry.set(3, 1).unwrap();
    assert_eq!(registry.get(3).unwrap(), 1);

    registry.set(3, 0).unwrap();
    assert_eq!(registry.get(3).unwrap(), 0);
}

#[test]
fn test_nonzero_value_drives_high() {
    let provider = MockProvider::new();
    let events = provider.events();
    let mut registry = PinRegistry::new(provider);

    registry.set(3, 42).unwrap();

    assert_eq!(registry.get(3).unwrap(), 1);
    assert_eq!(*events.lock().unwrap(), vec![Event { pin: 3, high: true }]);
}

#[test]
fn test_all_enumerates_in_registration_order() {
    let mut registry = PinRegistry::new(MockProvider::new());

    registry.set(7, 1).unwrap();
    registry.set(3, 0).unwrap();
    registry.get(11).unwrap();

    assert_eq!(
        registry.all().collect::<Vec<_>>(),
        vec![(7, 1), (3, 0), (11, 0)]
    );
}

#[test]
fn test_acquire_failure_surfaces_without_registering() {
    let mut registry = PinRegistry::new(MockProvider::new().fail_acquire(99));

    let err = registry.get(99).unwrap_err();
    assert_eq!(err, RegistryError::Hardware(HalError::InvalidPin(99)));
    assert!(registry.is_empty());
}

#[test]
fn test_shutdown_drives_all_pins_low() {
    let provider = MockProvider::new();
    let events = provider.events();
    let mut registry = PinRegistry::new(provider);

    registry.set(3, 1).unwrap();
    registry.set(7, 1).unwrap();

    let failures = registry.shutdown();

    assert!(failures.is_empty());
    let events = events.lock().unwrap();
    let tail: &[Event] = &events.as_slice()[events.len() - 2..];
    assert_eq!(
        tail,
        &[
            Event {
                pin: 3,
                high: false
            },
            Event {
                pin: 7,
                high: false
            }
        ]
    );
    assert_eq!(registry.all().collect::<Vec<_>>(), vec![(3, 0), (7, 0)]);
}

#[test]
fn test_shutdown_collects_failures_and_continues() {
    let provider = MockProvider::new().fail_drive(5);
    let events = provider.events();
    let mut registry = PinRegistry::new(provider);

    registry.set(3, 1).unwrap();
    let _ = registry.set(5, 1); // write fails, pin stays registered
    registry.set(7, 1).unwrap();

    let failures = registry.shutdown();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0], (5, HalError::Platform(-1)));
    // the pins after the failing one were still lowered
    let events = events.lock().unwrap();
    assert!(events.contains(&Event {
        pin: 7,
        high: false
    }));
}

#[test]
fn test_capacity_exhaustion_is_reported() {
    let mut registry = PinRegistry::new(MockProvider::new());

    for pin in 0..PIN_CAPACITY as i32 {
        registry.get(pin).unwrap();
    }

    let err = registry.get(PIN_CAPACITY as i32).unwrap_err();
    assert_eq!(err, RegistryError::Capacity);
    assert_eq!(registry.len(), PIN_CAPACITY);
}

#[test]
fn test_pulse_toggles_and_restores_high_pin() {
    let provider = MockProvider::new();
    let events = provider.events();
    let mut registry = PinRegistry::new(provider);
    let mut delay = RecordingDelay::default();

    registry.set(2, 1).unwrap();
    registry.pulse(2, 2, 30, &mut delay).unwrap();

    let expected = [
        Event { pin: 2, high: true },  // SET
        Event { pin: 2, high: true },  // pulse 1 on
        Event {
            pin: 2,
            high: false,
        },
        Event { pin: 2, high: true }, // pulse 2 on
        Event {
            pin: 2,
            high: false,
        },
        Event { pin: 2, high: true }, // restore
    ];
    assert_eq!(*events.lock().unwrap(), expected);
    assert_eq!(delay.calls, vec![30, 30, 30, 30]);
    // the recorded value never moved
    assert_eq!(registry.get(2).unwrap(), 1);
}

#[test]
fn test_pulse_restores_low_pin() {
    let provider = MockProvider::new();
    let events = provider.events();
    let mut registry = PinRegistry::new(provider);

    registry.set(2, 0).unwrap();
    registry.pulse(2, 1, 10, &mut NoDelay).unwrap();

    let last = *events.lock().unwrap().last().unwrap();
    assert_eq!(
        last,
        Event {
            pin: 2,
            high: false
        }
    );
    assert_eq!(registry.get(2).unwrap(), 0);
}

#[test]
fn test_pulse_skips_unregistered_pin() {
    let provider = MockProvider::new();
    let events = provider.events();
    let mut registry = PinRegistry::new(provider);

    registry.pulse(9, 3, 10, &mut NoDelay).unwrap();

    assert!(events.lock().unwrap().is_empty());
    assert!(registry.is_empty());
}
