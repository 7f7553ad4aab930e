//! In-memory draw target for host tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;

/// A host-side screen: a plain pixel grid plus a draw-call counter, standing
/// in for the ST7789 framebuffer in tests.
pub struct TestScreen {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
    /// Number of `DrawTarget` operations performed (any kind).
    pub draw_ops: usize,
}

impl TestScreen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
            draw_ops: 0,
        }
    }

    /// Color at the given point (panics when out of bounds).
    pub fn pixel(&self, point: Point) -> Rgb565 {
        assert!(point.x >= 0 && (point.x as u32) < self.width);
        assert!(point.y >= 0 && (point.y as u32) < self.height);
        self.pixels[point.y as usize * self.width as usize + point.x as usize]
    }

    /// Count pixels of `color` inside the given rectangle.
    pub fn count_in_rect(&self, top_left: Point, size: Size, color: Rgb565) -> usize {
        let mut count = 0;
        for y in top_left.y..top_left.y + size.height as i32 {
            for x in top_left.x..top_left.x + size.width as i32 {
                if self.pixel(Point::new(x, y)) == color {
                    count += 1;
                }
            }
        }
        count
    }
}

impl OriginDimensions for TestScreen {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestScreen {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.draw_ops += 1;
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && (point.x as u32) < self.width
                && point.y >= 0
                && (point.y as u32) < self.height
            {
                self.pixels[point.y as usize * self.width as usize + point.x as usize] = color;
            }
        }
        Ok(())
    }
}
