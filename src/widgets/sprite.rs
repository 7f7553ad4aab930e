//! Off-screen numeric sprite for flicker-free value redraw.
//!
//! Repainting digits directly over the previous frame's digits shows stale
//! and new glyphs overlapping mid-draw. The sprite is a small RGB565 buffer:
//! cleared, drawn into, then transferred to the target in one contiguous
//! blit. The buffer is owned by the sprite, so it is released on every exit
//! path when the sprite goes out of scope.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Sprite width in pixels. Fits a signed 4-digit integer in the 16px-wide
/// value font ("-1234" is five glyphs).
pub const SPRITE_WIDTH: u32 = 80;

/// Sprite height in pixels. Covers the value font's glyph height.
pub const SPRITE_HEIGHT: u32 = 32;

const BUFFER_SIZE: usize = (SPRITE_WIDTH * SPRITE_HEIGHT) as usize * 2;

/// A small raster buffer composited to the display in one atomic transfer.
pub struct ValueSprite {
    buffer: [u8; BUFFER_SIZE],
}

impl ValueSprite {
    /// Acquire a sprite cleared to the given background color.
    pub fn new(background: Rgb565) -> Self {
        let mut sprite = Self {
            buffer: [0u8; BUFFER_SIZE],
        };
        sprite.clear(background).ok();
        sprite
    }

    /// Transfer the sprite to `target` with its top-left corner at `top_left`.
    ///
    /// The pixels are pushed as one contiguous fill of the destination
    /// rectangle, so the previous contents are replaced in a single step.
    pub fn blit<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::new(top_left, Size::new(SPRITE_WIDTH, SPRITE_HEIGHT));
        target.fill_contiguous(&area, self.pixels())
    }

    /// Iterate over the sprite's pixels in row-major order.
    fn pixels(&self) -> impl Iterator<Item = Rgb565> + '_ {
        self.buffer
            .chunks_exact(2)
            .map(|pair| Rgb565::from(RawU16::new(u16::from_be_bytes([pair[0], pair[1]]))))
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && x < SPRITE_WIDTH as i32 && y >= 0 && y < SPRITE_HEIGHT as i32 {
            let idx = (y as usize * SPRITE_WIDTH as usize + x as usize) * 2;
            let raw: RawU16 = color.into();
            let bytes = raw.into_inner().to_be_bytes();
            self.buffer[idx] = bytes[0];
            self.buffer[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for ValueSprite {
    fn size(&self) -> Size {
        Size::new(SPRITE_WIDTH, SPRITE_HEIGHT)
    }
}

impl DrawTarget for ValueSprite {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        for pair in self.buffer.chunks_exact_mut(2) {
            pair[0] = bytes[0];
            pair[1] = bytes[1];
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
