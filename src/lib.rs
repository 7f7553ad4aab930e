//! Air quality monitor library - testable modules for the sensor dashboard.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code
//! (ST7789 driver, DHT wiring, embassy main loop).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Reading policy and the sample cycle orchestrator
pub mod cycle;
pub mod panel;
pub mod reading;

// Sensor clients
mod sensors {
    pub mod gas;
}

// UI building blocks
mod ui {
    pub mod colors;
    pub mod styles;
}

// Drawing: static chrome and the value sprite
pub mod widgets;

// Shared in-memory draw target for host tests
#[cfg(test)]
pub(crate) mod testutil;

// Re-export at top level for existing imports
pub use sensors::gas;
pub use ui::{colors, styles};
