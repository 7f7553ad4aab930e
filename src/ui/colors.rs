//! Color constants for the monitor display.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue. This
//! format is native to the ST7789 and requires no conversion when writing to
//! the display buffer. Standard colors come from the `RgbColor` trait
//! constants; custom ones are application-specific.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Screen and sprite background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Value and title text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). CO panel accent.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). VOC panel accent.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Humidity panel accent.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Ethyl panel accent.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange accent for the NO2 panel.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for the divider line. Subtle enough to not distract from data.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Teal accent for the temperature panel.
/// RGB565: (0, 40, 20) - blue-green.
pub const TEAL: Rgb565 = Rgb565::new(0, 40, 20);
