//! The periodic sample-and-render orchestrator.
//!
//! [`SampleCycle`] owns the only mutable cross-pass state in the firmware:
//! the timestamp of the last completed pass. On each due tick it reads all
//! six channels, validates each into a [`Reading`], paints the value into its
//! panel, and mirrors it to the diagnostic sink - paired per reading, never
//! interleaved.
//!
//! Everything the cycle touches comes in through traits, so the whole
//! orchestration runs on the host against mock sensors and an in-memory
//! screen.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::gas::GasChannel;
use crate::panel::PanelSet;
use crate::reading::{Reading, ReadingKind};
use crate::widgets::draw_panel_value;

/// Longest diagnostic line the cycle emits.
const DIAG_LINE_LEN: usize = 48;

// =============================================================================
// Sensor and Diagnostic Seams
// =============================================================================

/// One raw gas channel result. `ok == false` marks a bus-level failure; the
/// raw value is never trusted beyond the clamp either way.
#[derive(Clone, Copy, Debug)]
pub struct GasReading {
    pub raw: i32,
    pub ok: bool,
}

/// Four-channel gas sensor seam.
pub trait GasSense {
    fn read_channel(&mut self, channel: GasChannel) -> GasReading;
}

/// Temperature/humidity sensor seam. `None` means "no valid reading this
/// cycle" - the reading is reported once and retried on the next cycle.
pub trait EnvironmentSense {
    fn temperature(&mut self) -> Option<f32>;
    fn humidity(&mut self) -> Option<f32>;
}

/// Diagnostic text stream, one line per call.
pub trait DiagSink {
    fn line(&mut self, text: &str);
}

// =============================================================================
// Sample Cycle
// =============================================================================

/// Periodic orchestrator with a single scalar of state.
pub struct SampleCycle {
    interval_ms: u64,
    last_update_ms: Option<u64>,
}

impl SampleCycle {
    /// Create a cycle that samples every `interval_ms`. The first poll after
    /// construction is always due.
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_update_ms: None,
        }
    }

    /// Timestamp of the last completed pass, if any.
    #[inline]
    pub const fn last_update_ms(&self) -> Option<u64> {
        self.last_update_ms
    }

    /// Whether a tick at `now_ms` would run a pass.
    #[inline]
    fn is_due(&self, now_ms: u64) -> bool {
        match self.last_update_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Non-blocking tick. Returns `false` immediately when the interval has
    /// not elapsed (no sensor reads, no draw calls). Otherwise runs one full
    /// sample-and-render pass and returns `true`.
    pub fn poll<G, E, D, L>(
        &mut self,
        now_ms: u64,
        gas: &mut G,
        env: &mut E,
        panels: &PanelSet,
        display: &mut D,
        diag: &mut L,
    ) -> bool
    where
        G: GasSense,
        E: EnvironmentSense,
        D: DrawTarget<Color = Rgb565>,
        L: DiagSink,
    {
        if !self.is_due(now_ms) {
            return false;
        }
        self.last_update_ms = Some(now_ms);

        for kind in ReadingKind::ALL {
            let reading = acquire(kind, gas, env, diag);
            draw_panel_value(display, panels.for_kind(kind), reading.display);
            report(diag, &reading);
        }

        true
    }
}

/// Read and validate one channel, emitting a warning line on failure.
fn acquire<G, E, L>(kind: ReadingKind, gas: &mut G, env: &mut E, diag: &mut L) -> Reading
where
    G: GasSense,
    E: EnvironmentSense,
    L: DiagSink,
{
    let reading = match kind {
        ReadingKind::Voc => gas_reading(kind, GasChannel::Voc, gas),
        ReadingKind::Co => gas_reading(kind, GasChannel::Co, gas),
        ReadingKind::No2 => gas_reading(kind, GasChannel::No2, gas),
        ReadingKind::Ethyl => gas_reading(kind, GasChannel::Ethyl, gas),
        ReadingKind::Temperature => Reading::temperature(env.temperature()),
        ReadingKind::Humidity => Reading::humidity(env.humidity()),
    };

    if !reading.valid {
        let cause = if kind.is_gas() { "bus" } else { "NaN" };
        let mut line: String<DIAG_LINE_LEN> = String::new();
        let _ = write!(line, "Warning: {} read failed ({})", kind.label(), cause);
        diag.line(&line);
    }

    reading
}

fn gas_reading<G: GasSense>(kind: ReadingKind, channel: GasChannel, gas: &mut G) -> Reading {
    let result = gas.read_channel(channel);
    Reading::gas(kind, result.raw, result.ok)
}

/// Mirror one reading to the diagnostic stream: `"<Label>: <value> <unit>"`.
fn report<L: DiagSink>(diag: &mut L, reading: &Reading) {
    let mut line: String<DIAG_LINE_LEN> = String::new();
    let _ = write!(
        line,
        "{}: {} {}",
        reading.kind.label(),
        reading.display,
        reading.kind.unit()
    );
    diag.line(&line);
}

// =============================================================================
// Unit Tests
// =============================================================================
