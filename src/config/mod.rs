//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed layout constants
//! - `tuning`: Sampling cadence and sensor bus constants

pub mod layout;
pub mod tuning;

// Re-export layout constants at config level for convenience
pub use layout::{
    DIVIDER_WEIGHT,
    MIN_SCREEN_HEIGHT,
    MIN_SCREEN_WIDTH,
    PANEL_COLS,
    PANEL_CORNER_RADIUS,
    PANEL_INSET,
    PANEL_ROWS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TITLE_HEIGHT,
};
// Re-export tuning constants at config level for convenience
pub use tuning::{
    GAS_SENSOR_ADDR,
    I2C_FREQUENCY_HZ,
    POLL_PERIOD_MS,
    SAMPLE_INTERVAL_MS,
    WARMUP_DISCARD_READS,
    WARMUP_READ_DELAY_MS,
};
