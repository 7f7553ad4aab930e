//! I2C client for the four-channel gas sensor.
//!
//! Each channel lives behind its own register: the sensor answers a one-byte
//! command with a four-byte little-endian concentration value. The device has
//! no validity reporting; after a power-up it also needs a preheat period
//! before returned values stabilise, so [`GasSensorClient::init`] turns the
//! heater on and discards a fixed number of reads.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{GAS_SENSOR_ADDR, WARMUP_DISCARD_READS, WARMUP_READ_DELAY_MS};
use crate::cycle::{GasReading, GasSense};

// Vendor register commands.
const CMD_NO2: u8 = 0x01;
const CMD_ETHYL: u8 = 0x03;
const CMD_VOC: u8 = 0x05;
const CMD_CO: u8 = 0x07;

/// Turns the sensing element heater on.
const CMD_PREHEAT: u8 = 0xFE;

/// The four gas channels, each backed by an independent register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GasChannel {
    Voc,
    Co,
    No2,
    Ethyl,
}

impl GasChannel {
    /// All channels, in warm-up read order.
    pub const ALL: [Self; 4] = [Self::Voc, Self::Co, Self::No2, Self::Ethyl];

    /// Register command byte for this channel.
    const fn command(self) -> u8 {
        match self {
            Self::Voc => CMD_VOC,
            Self::Co => CMD_CO,
            Self::No2 => CMD_NO2,
            Self::Ethyl => CMD_ETHYL,
        }
    }
}

/// Client for the multichannel gas sensor on an I2C bus.
pub struct GasSensorClient<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> GasSensorClient<I2C> {
    /// Bind the sensor at its default address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, GAS_SENSOR_ADDR)
    }

    /// Bind the sensor at a non-default address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Start the heater and run the warm-up: discard a fixed number of reads
    /// of every channel, spaced by a short delay. Skipping this leaves the
    /// first several samples unreliable.
    ///
    /// Discard-read errors are ignored; the preheat command itself must
    /// succeed for the sensor to be considered bound.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CMD_PREHEAT])?;

        for _ in 0..WARMUP_DISCARD_READS {
            delay.delay_ms(WARMUP_READ_DELAY_MS);
            for channel in GasChannel::ALL {
                let _ = self.read(channel);
            }
        }

        Ok(())
    }

    /// Read one channel's current concentration value.
    pub fn read(&mut self, channel: GasChannel) -> Result<u32, I2C::Error> {
        let mut value = [0u8; 4];
        self.i2c.write(self.address, &[channel.command()])?;
        self.i2c.read(self.address, &mut value)?;
        Ok(u32::from_le_bytes(value))
    }
}

impl<I2C: I2c> GasSense for GasSensorClient<I2C> {
    fn read_channel(&mut self, channel: GasChannel) -> GasReading {
        match self.read(channel) {
            Ok(raw) => GasReading {
                raw: raw.min(i32::MAX as u32) as i32,
                ok: true,
            },
            Err(_) => GasReading { raw: 0, ok: false },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;

    #[derive(Debug)]
    struct MockBusError;

    impl embedded_hal::i2c::Error for MockBusError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records written commands and answers every read with a fixed payload.
    struct MockBus {
        written: Vec<Vec<u8>>,
        response: [u8; 4],
        fail: bool,
    }

    impl MockBus {
        fn answering(response: [u8; 4]) -> Self {
            Self {
                written: Vec::new(),
                response,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                written: Vec::new(),
                response: [0; 4],
                fail: true,
            }
        }
    }

    impl ErrorType for MockBus {
        type Error = MockBusError;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockBusError);
            }
            assert_eq!(address, GAS_SENSOR_ADDR);
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.written.push(bytes.to_vec()),
                    Operation::Read(buffer) => buffer.copy_from_slice(&self.response),
                }
            }
            Ok(())
        }
    }

    /// Counts warm-up delay rounds.
    struct MockDelay {
        ms_calls: usize,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, _ms: u32) {
            self.ms_calls += 1;
        }
    }

    #[test]
    fn test_read_sends_channel_command_and_decodes_le() {
        // 300 = 0x012C little-endian
        let mut client = GasSensorClient::new(MockBus::answering([0x2C, 0x01, 0x00, 0x00]));

        let value = client.read(GasChannel::Voc).unwrap();
        assert_eq!(value, 300);
        assert_eq!(client.i2c.written, vec![vec![CMD_VOC]]);
    }

    #[test]
    fn test_each_channel_has_its_own_register() {
        let mut client = GasSensorClient::new(MockBus::answering([0; 4]));
        for channel in GasChannel::ALL {
            client.read(channel).unwrap();
        }
        assert_eq!(
            client.i2c.written,
            vec![vec![CMD_VOC], vec![CMD_CO], vec![CMD_NO2], vec![CMD_ETHYL]]
        );
    }

    #[test]
    fn test_init_preheats_then_discards_warmup_reads() {
        let mut client = GasSensorClient::new(MockBus::answering([0xFF; 4]));
        let mut delay = MockDelay { ms_calls: 0 };

        client.init(&mut delay).unwrap();

        assert_eq!(client.i2c.written[0], vec![CMD_PREHEAT]);
        // One command write per discarded channel read, after the preheat.
        assert_eq!(client.i2c.written.len(), 1 + WARMUP_DISCARD_READS * GasChannel::ALL.len());
        assert_eq!(delay.ms_calls, WARMUP_DISCARD_READS);
    }

    #[test]
    fn test_bus_error_maps_to_invalid_reading() {
        let mut client = GasSensorClient::new(MockBus::failing());

        let reading = client.read_channel(GasChannel::Co);
        assert!(!reading.ok);
        assert_eq!(reading.raw, 0);
    }

    #[test]
    fn test_successful_read_maps_to_ok_reading() {
        let mut client = GasSensorClient::new(MockBus::answering([0xB0, 0x04, 0x00, 0x00]));

        let reading = client.read_channel(GasChannel::Ethyl);
        assert!(reading.ok);
        assert_eq!(reading.raw, 1200);
    }

    #[test]
    fn test_oversized_register_value_saturates_to_i32() {
        let mut client = GasSensorClient::new(MockBus::answering([0xFF; 4]));

        let reading = client.read_channel(GasChannel::Voc);
        assert!(reading.ok);
        assert_eq!(reading.raw, i32::MAX);
    }
}
