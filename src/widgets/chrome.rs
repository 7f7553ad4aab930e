//! Static screen chrome and per-panel value dispatch.
//!
//! [`draw_layout`] paints everything that never changes: title, divider, and
//! the six bordered panels with their labels and units. It runs exactly once
//! at startup. [`draw_panel_value`] is the per-reading render step, called by
//! the sample cycle every pass.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, GRAY};
use crate::config::{DIVIDER_WEIGHT, PANEL_CORNER_RADIUS, TITLE_HEIGHT};
use crate::panel::{PanelRegion, PanelSet};
use crate::styles::{CENTERED, LABEL_FONT, LEFT_TOP, RIGHT_ALIGNED, TITLE_STYLE_WHITE, UNIT_STYLE_GRAY, VALUE_STYLE_WHITE};
use crate::widgets::sprite::{SPRITE_HEIGHT, ValueSprite};

/// Title string drawn in the top bar.
const TITLE: &str = "Air Quality Monitor";

/// Baseline of the title text inside the title bar.
const TITLE_BASELINE: i32 = 20;

/// Horizontal gap between the panel border and the unit text.
const UNIT_MARGIN: i32 = 6;

/// Draw the one-shot static chrome: clear, title, divider, panel borders with
/// labels and units. Numeric values are painted later by the sample cycle.
pub fn draw_layout<D>(display: &mut D, panels: &PanelSet)
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = display.bounding_box().size.width;

    display.clear(BLACK).ok();

    Text::with_text_style(
        TITLE,
        Point::new(width as i32 / 2, TITLE_BASELINE),
        TITLE_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();

    // Thick divider between the title bar and the panel grid.
    let divider_y = TITLE_HEIGHT as i32 + DIVIDER_WEIGHT as i32 / 2;
    Line::new(Point::new(0, divider_y), Point::new(width as i32 - 1, divider_y))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, DIVIDER_WEIGHT))
        .draw(display)
        .ok();

    for panel in panels.iter() {
        draw_panel_chrome(display, panel);
    }
}

/// Draw one panel's border, label, and unit text.
fn draw_panel_chrome<D>(display: &mut D, panel: &PanelRegion)
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        panel.rect,
        Size::new(PANEL_CORNER_RADIUS, PANEL_CORNER_RADIUS),
    )
    .into_styled(PrimitiveStyle::with_stroke(panel.color, 1))
    .draw(display)
    .ok();

    let label_style = MonoTextStyle::new(LABEL_FONT, panel.color);
    let center_x = panel.rect.top_left.x + panel.rect.size.width as i32 / 2;
    Text::with_text_style(
        panel.label,
        Point::new(center_x, panel.rect.top_left.y + 12),
        label_style,
        CENTERED,
    )
    .draw(display)
    .ok();

    // Unit sits at the panel's right edge, on the value line.
    let unit_x = panel.rect.top_left.x + panel.rect.size.width as i32 - UNIT_MARGIN;
    let unit_y = panel.value_anchor.y + SPRITE_HEIGHT as i32 - 6;
    Text::with_text_style(panel.unit, Point::new(unit_x, unit_y), UNIT_STYLE_GRAY, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Render one numeric value into its panel.
///
/// The value is drawn left-justified into a [`ValueSprite`] and the whole
/// sprite is blitted to the panel's value anchor, replacing the previous
/// digits in one transfer.
pub fn draw_panel_value<D>(display: &mut D, panel: &PanelRegion, value: i32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut sprite = ValueSprite::new(BLACK);

    let mut text: String<8> = String::new();
    let _ = write!(text, "{value}");
    Text::with_text_style(&text, Point::new(1, 0), VALUE_STYLE_WHITE, LEFT_TOP)
        .draw(&mut sprite)
        .ok();

    sprite.blit(display, panel.value_anchor).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::reading::ReadingKind;
    use crate::testutil::TestScreen;
    use crate::widgets::sprite::SPRITE_WIDTH;

    fn layout_screen() -> (TestScreen, PanelSet) {
        let mut screen = TestScreen::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let panels = PanelSet::layout(SCREEN_WIDTH, SCREEN_HEIGHT);
        draw_layout(&mut screen, &panels);
        (screen, panels)
    }

    #[test]
    fn test_layout_draws_divider() {
        let (screen, _) = layout_screen();
        let divider_y = TITLE_HEIGHT as i32 + DIVIDER_WEIGHT as i32 / 2;
        assert_eq!(screen.pixel(Point::new(SCREEN_WIDTH as i32 / 2, divider_y)), GRAY);
    }

    #[test]
    fn test_layout_draws_title_text() {
        let (screen, _) = layout_screen();
        // Some white title pixels must land inside the title bar.
        let title_pixels = (0..TITLE_HEIGHT as i32)
            .flat_map(|y| (0..SCREEN_WIDTH as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| screen.pixel(p) == WHITE)
            .count();
        assert!(title_pixels > 0);
    }

    #[test]
    fn test_layout_draws_each_panel_border_in_accent_color() {
        let (screen, panels) = layout_screen();
        for panel in panels.iter() {
            // Top edge midpoint lies on the rounded border's straight run.
            let probe = Point::new(
                panel.rect.top_left.x + panel.rect.size.width as i32 / 2,
                panel.rect.top_left.y,
            );
            assert_eq!(screen.pixel(probe), panel.color, "border of {:?}", panel.kind);
        }
    }

    #[test]
    fn test_panel_value_draws_digits_inside_sprite_area() {
        let (mut screen, panels) = layout_screen();
        let panel = *panels.for_kind(ReadingKind::Voc);
        draw_panel_value(&mut screen, &panel, 999);

        let lit = screen.count_in_rect(
            panel.value_anchor,
            Size::new(SPRITE_WIDTH, SPRITE_HEIGHT),
            WHITE,
        );
        assert!(lit > 0, "digits should light pixels in the sprite area");
    }

    #[test]
    fn test_panel_value_overwrite_clears_previous_digits() {
        let (mut screen, panels) = layout_screen();
        let panel = *panels.for_kind(ReadingKind::Co);

        draw_panel_value(&mut screen, &panel, 888);
        let before = screen.count_in_rect(
            panel.value_anchor,
            Size::new(SPRITE_WIDTH, SPRITE_HEIGHT),
            WHITE,
        );

        draw_panel_value(&mut screen, &panel, 1);
        let after = screen.count_in_rect(
            panel.value_anchor,
            Size::new(SPRITE_WIDTH, SPRITE_HEIGHT),
            WHITE,
        );

        // "1" lights far fewer pixels than "888"; stale digits must be gone.
        assert!(after < before);
    }
}
