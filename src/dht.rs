//! Environment sensor client over the DHT11 single-wire driver.
//!
//! The `dht11` crate owns the timing-critical wire protocol and speaks
//! `embedded-hal 0.2` traits; the shims below let it drive an embassy-rp
//! `Flex` pin and the embassy blocking delay. The line idles high through the
//! internal pull-up: "high" releases the pin to input, "low" drives it.

use core::cell::RefCell;
use core::convert::Infallible;

use dht11::Dht11;
use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, block_for};
use embedded_hal_02::blocking::delay::{DelayMs, DelayUs};
use embedded_hal_02::digital::v2::{InputPin, OutputPin};

use airmon_pico2::cycle::EnvironmentSense;

/// Open-drain emulation over a `Flex` pin for the single-wire bus.
///
/// The pin sits in a `RefCell` because `embedded-hal 0.2` reads the line
/// through `&self` while the HAL pin wants `&mut self`; the bus is strictly
/// single-threaded so the borrow can never conflict.
pub struct DhtPin<'d> {
    pin: RefCell<Flex<'d>>,
}

impl<'d> DhtPin<'d> {
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self {
            pin: RefCell::new(pin),
        }
    }
}

impl OutputPin for DhtPin<'_> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut pin = self.pin.borrow_mut();
        pin.set_low();
        pin.set_as_output();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        // Release the line; the pull-up raises it.
        self.pin.borrow_mut().set_as_input();
        Ok(())
    }
}

impl InputPin for DhtPin<'_> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.pin.borrow_mut().is_high())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.pin.borrow_mut().is_low())
    }
}

/// Blocking microsecond/millisecond delay for the wire protocol.
pub struct DhtDelay;

impl DelayUs<u16> for DhtDelay {
    fn delay_us(&mut self, us: u16) {
        block_for(Duration::from_micros(u64::from(us)));
    }
}

impl DelayMs<u16> for DhtDelay {
    fn delay_ms(&mut self, ms: u16) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Temperature/humidity client over the DHT11 driver.
pub struct EnvironmentSensorClient<'d> {
    dht: Dht11<DhtPin<'d>>,
    delay: DhtDelay,
}

impl<'d> EnvironmentSensorClient<'d> {
    pub fn new(pin: Flex<'d>) -> Self {
        Self {
            dht: Dht11::new(DhtPin::new(pin)),
            delay: DhtDelay,
        }
    }

    /// One wire transaction. The driver reports both values in tenths; a
    /// failed checksum or timeout surfaces as `None`.
    fn measure(&mut self) -> Option<dht11::Measurement> {
        self.dht.perform_measurement(&mut self.delay).ok()
    }
}

impl EnvironmentSense for EnvironmentSensorClient<'_> {
    fn temperature(&mut self) -> Option<f32> {
        self.measure().map(|m| f32::from(m.temperature) / 10.0)
    }

    fn humidity(&mut self) -> Option<f32> {
        self.measure().map(|m| f32::from(m.humidity) / 10.0)
    }
}
