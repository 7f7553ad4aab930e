//! Sampling cadence and sensor bus constants.
//!
//! These are compiled-in tunables, not runtime configuration: the hardware
//! they describe (bus wiring, sensor warm-up behaviour) does not change after
//! flashing.

/// Interval between sample-and-render passes, in milliseconds.
pub const SAMPLE_INTERVAL_MS: u64 = 5000;

/// How often the main loop polls the cycle for a due tick. This is the yield
/// point between passes, not the sampling cadence.
pub const POLL_PERIOD_MS: u64 = 50;

/// I2C address of the multichannel gas sensor.
pub const GAS_SENSOR_ADDR: u8 = 0x08;

/// I2C bus clock for the gas sensor.
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Number of throwaway reads of every gas channel after power-up. The analog
/// sensing elements need to stabilise before returned values can be trusted.
pub const WARMUP_DISCARD_READS: usize = 5;

/// Delay between warm-up discard rounds, in milliseconds.
pub const WARMUP_READ_DELAY_MS: u32 = 200;

// A warm-up that outlasts the sample interval would delay the first pass
// indefinitely on a due-at-boot cycle.
const _: () =
    assert!((WARMUP_DISCARD_READS as u64) * (WARMUP_READ_DELAY_MS as u64) < SAMPLE_INTERVAL_MS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(SAMPLE_INTERVAL_MS, 5000);
        assert_eq!(GAS_SENSOR_ADDR, 0x08);
        assert!(POLL_PERIOD_MS < SAMPLE_INTERVAL_MS);
        assert!(WARMUP_DISCARD_READS > 0);
    }
}
