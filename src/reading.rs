//! Reading kinds and the validate/clamp policy applied to every sample.
//!
//! Each raw sensor value passes through exactly one policy constructor before
//! it reaches the display or the diagnostic stream. The constructors make the
//! "fallback on invalid" rule an explicit, testable branch instead of an
//! implicit float comparison against NaN.

#[cfg(target_arch = "arm")]
use micromath::F32Ext;

// =============================================================================
// Display Bands
// =============================================================================

/// Largest value the gas panels display; higher raw values are clamped.
pub const GAS_DISPLAY_MAX: i32 = 999;

/// Largest value the humidity panel displays.
pub const HUMIDITY_DISPLAY_MAX: i32 = 99;

/// Display value substituted for an invalid reading.
pub const FALLBACK_DISPLAY: i32 = 0;

const _: () = assert!(GAS_DISPLAY_MAX > HUMIDITY_DISPLAY_MAX);

// =============================================================================
// Reading Kind
// =============================================================================

/// The six reading kinds, one per display panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadingKind {
    /// Volatile organic compounds (gas channel).
    Voc,
    /// Carbon monoxide (gas channel).
    Co,
    /// Nitrogen dioxide (gas channel).
    No2,
    /// Ethyl alcohol (gas channel).
    Ethyl,
    /// Air temperature (environment sensor).
    Temperature,
    /// Relative humidity (environment sensor).
    Humidity,
}

impl ReadingKind {
    /// Fixed per-cycle sampling order. Left column top-to-bottom, then right
    /// column top-to-bottom.
    pub const ALL: [Self; 6] = [
        Self::Voc,
        Self::Co,
        Self::Temperature,
        Self::No2,
        Self::Humidity,
        Self::Ethyl,
    ];

    /// Position of this kind in [`Self::ALL`] (also its panel slot).
    pub const fn index(self) -> usize {
        match self {
            Self::Voc => 0,
            Self::Co => 1,
            Self::Temperature => 2,
            Self::No2 => 3,
            Self::Humidity => 4,
            Self::Ethyl => 5,
        }
    }

    /// Panel and diagnostic label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Voc => "VOC",
            Self::Co => "CO",
            Self::No2 => "NO2",
            Self::Ethyl => "Ethyl",
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
        }
    }

    /// Unit suffix for the panel and the diagnostic line.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Voc | Self::Co | Self::No2 | Self::Ethyl => "ppm",
            Self::Temperature => "C",
            Self::Humidity => "%",
        }
    }

    /// Whether this kind is read from the multichannel gas sensor.
    pub const fn is_gas(self) -> bool {
        matches!(self, Self::Voc | Self::Co | Self::No2 | Self::Ethyl)
    }
}

// =============================================================================
// Clamp Helpers
// =============================================================================

/// Clamp a raw gas channel value into the displayable band `[0, 999]`.
pub const fn clamp_gas(raw: i32) -> i32 {
    if raw < 0 {
        0
    } else if raw > GAS_DISPLAY_MAX {
        GAS_DISPLAY_MAX
    } else {
        raw
    }
}

/// Clamp a raw humidity value into the displayable band `[0, 99]`.
/// The fractional part is truncated, matching the integer panel format.
pub fn clamp_humidity(raw: f32) -> i32 {
    raw.clamp(0.0, HUMIDITY_DISPLAY_MAX as f32) as i32
}

// =============================================================================
// Reading
// =============================================================================

/// One validated sample, ready for the panel and the diagnostic stream.
#[derive(Clone, Copy, Debug)]
pub struct Reading {
    /// Which panel this sample belongs to.
    pub kind: ReadingKind,
    /// Sensor-native value before clamping (0.0 when the read failed).
    pub raw: f32,
    /// False when the underlying sensor reported an unreadable state.
    pub valid: bool,
    /// Integer value shown on the panel; 0 when `valid` is false.
    pub display: i32,
}

impl Reading {
    /// Build a gas channel reading. `ok == false` marks a bus-level failure;
    /// the raw value is otherwise clamped defensively, since the sensor has no
    /// validity reporting of its own.
    pub fn gas(kind: ReadingKind, raw: i32, ok: bool) -> Self {
        debug_assert!(kind.is_gas());
        if ok {
            Self {
                kind,
                raw: raw as f32,
                valid: true,
                display: clamp_gas(raw),
            }
        } else {
            Self::invalid(kind)
        }
    }

    /// Build a temperature reading. The value is rounded to the nearest
    /// integer with no clamping band.
    pub fn temperature(raw: Option<f32>) -> Self {
        match raw {
            Some(t) if t.is_finite() => Self {
                kind: ReadingKind::Temperature,
                raw: t,
                valid: true,
                display: t.round() as i32,
            },
            _ => Self::invalid(ReadingKind::Temperature),
        }
    }

    /// Build a humidity reading, clamped into `[0, 99]`.
    pub fn humidity(raw: Option<f32>) -> Self {
        match raw {
            Some(h) if h.is_finite() => Self {
                kind: ReadingKind::Humidity,
                raw: h,
                valid: true,
                display: clamp_humidity(h),
            },
            _ => Self::invalid(ReadingKind::Humidity),
        }
    }

    /// The fallback reading substituted when a sensor could not be read.
    pub const fn invalid(kind: ReadingKind) -> Self {
        Self {
            kind,
            raw: 0.0,
            valid: false,
            display: FALLBACK_DISPLAY,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
