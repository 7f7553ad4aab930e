//! Drawing code: static panel chrome and the off-screen value sprite.
//!
//! Everything here draws through the `embedded-graphics` `DrawTarget` trait,
//! so the same code renders to the ST7789 framebuffer on target and to an
//! in-memory screen in host tests.

pub mod chrome;
pub mod sprite;

pub use chrome::{draw_layout, draw_panel_value};
pub use sprite::ValueSprite;
