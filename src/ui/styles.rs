//! Pre-computed static text styles to avoid per-pass object construction.
//!
//! `MonoTextStyle` and `TextStyle` are defined as `const` so the compiler
//! computes them at compile time and stores them in the binary's read-only
//! data section; draw functions reference them without runtime construction.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::{GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for the title and panel labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned, top-anchored text. Used for drawing values into the sprite.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text. Used for unit strings at panel edges.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Exposed for creating dynamic-color styles
/// per panel: `MonoTextStyle::new(LABEL_FONT, panel.color)`.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large value font (`ProFont` 24pt). Shared by the value sprite sizing and
/// the value drawing code.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Medium white text for the title bar (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text for sensor values.
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Small gray text for unit strings.
pub const UNIT_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);
