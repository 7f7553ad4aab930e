//! Air Quality Monitor Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Polls a multichannel gas sensor (I2C) and a DHT11 temperature/humidity
//! sensor on a fixed interval, and renders the six most recent readings into
//! six bordered panels on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! - Static chrome (title, divider, panel borders) is drawn once at startup.
//! - The sample cycle polls a monotonic clock; every 5 seconds it reads all
//!   six channels, clamps each value, and repaints each panel's number
//!   through an off-screen sprite.
//! - Every reading is mirrored to the diagnostic stream (defmt over RTT).
//!
//! The binary only targets the RP2350; everything testable lives in the
//! library crate and runs on the host (see `lib.rs`).

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod dht;
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod st7789;

#[cfg(target_arch = "arm")]
use defmt::{info, warn};
#[cfg(target_arch = "arm")]
use embassy_executor::Spawner;
#[cfg(target_arch = "arm")]
use embassy_rp::gpio::{Flex, Level, Output};
#[cfg(target_arch = "arm")]
use embassy_rp::i2c::{self, I2c};
#[cfg(target_arch = "arm")]
use embassy_rp::spi::Spi;
#[cfg(target_arch = "arm")]
use embassy_time::{Delay, Instant, Timer};
#[cfg(target_arch = "arm")]
use static_cell::StaticCell;
#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_arch = "arm")]
use airmon_pico2::config::{
    I2C_FREQUENCY_HZ,
    POLL_PERIOD_MS,
    SAMPLE_INTERVAL_MS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
#[cfg(target_arch = "arm")]
use airmon_pico2::cycle::{DiagSink, SampleCycle};
#[cfg(target_arch = "arm")]
use airmon_pico2::gas::GasSensorClient;
#[cfg(target_arch = "arm")]
use airmon_pico2::panel::PanelSet;
#[cfg(target_arch = "arm")]
use airmon_pico2::widgets::draw_layout;

#[cfg(target_arch = "arm")]
use crate::dht::EnvironmentSensorClient;
#[cfg(target_arch = "arm")]
use crate::display::display_spi_config;
#[cfg(target_arch = "arm")]
use crate::st7789::{BUFFER_SIZE, St7789};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"airmon-pico2"),
    embassy_rp::binary_info::rp_program_description!(c"Air quality monitor on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Diagnostic sink backed by defmt over RTT.
#[cfg(target_arch = "arm")]
struct RttDiag;

#[cfg(target_arch = "arm")]
impl DiagSink for RttDiag {
    fn line(&mut self, text: &str) {
        info!("{=str}", text);
    }
}

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Air quality monitor starting...");

    let p = embassy_rp::init(Default::default());

    // Display pins (PIM715): CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut _backlight = Output::new(p.PIN_20, Level::High); // Turn on backlight

    // Async SPI with DMA (TX-only, display doesn't need MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());

    static FRAMEBUFFER: StaticCell<[u8; BUFFER_SIZE]> = StaticCell::new();
    let framebuffer = FRAMEBUFFER.init([0u8; BUFFER_SIZE]);

    let mut screen = St7789::new(spi, dc, cs, framebuffer);
    screen.init().await;
    info!("Display initialized");

    let mut diag = RttDiag;

    // I2C0 for the gas sensor: SDA=GPIO4, SCL=GPIO5
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    // Preheat and warm-up discard reads; unreliable first samples otherwise.
    let mut gas = GasSensorClient::new(i2c);
    match gas.init(&mut Delay) {
        Ok(()) => diag.line("Gas sensor initialized..."),
        Err(_) => warn!("Gas sensor preheat failed, readings will fall back"),
    }

    // DHT11 on a single digital pin
    let mut env = EnvironmentSensorClient::new(Flex::new(p.PIN_22));

    // Static chrome is drawn exactly once, before the first sample tick.
    let panels = PanelSet::layout(SCREEN_WIDTH, SCREEN_HEIGHT);
    draw_layout(&mut screen, &panels);
    screen.flush().await;

    diag.line("Setup complete");

    let mut cycle = SampleCycle::new(SAMPLE_INTERVAL_MS);

    loop {
        let now_ms = Instant::now().as_millis();
        if cycle.poll(now_ms, &mut gas, &mut env, &panels, &mut screen, &mut diag) {
            screen.flush().await;
        }

        // Yield between polls so background housekeeping can run.
        Timer::after_millis(POLL_PERIOD_MS).await;
    }
}

// The firmware only targets the RP2350. On the host this crate exists for
// `cargo test --lib`; the binary compiles to a stub so workspace-wide builds
// succeed without a cross toolchain.
#[cfg(not(target_arch = "arm"))]
fn main() {}
