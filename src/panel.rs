//! Static panel layout computed once from the display dimensions.
//!
//! Six panels, one per [`ReadingKind`], arranged in a 2x3 grid below the
//! title bar. The grid scales with the display size; only the title height,
//! divider weight, insets, and corner radius are fixed pixel constants.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLUE, GREEN, ORANGE, RED, TEAL, YELLOW};
use crate::config::{DIVIDER_WEIGHT, PANEL_COLS, PANEL_INSET, PANEL_ROWS, TITLE_HEIGHT};
use crate::reading::ReadingKind;

/// Offset of the numeric value anchor from the panel's top-left corner.
const VALUE_OFFSET_X: i32 = 10;
const VALUE_OFFSET_Y: i32 = 20;

/// One fixed screen region dedicated to a reading kind.
#[derive(Clone, Copy, Debug)]
pub struct PanelRegion {
    /// The reading kind shown in this panel.
    pub kind: ReadingKind,
    /// Outer border rectangle of the panel.
    pub rect: Rectangle,
    /// Label text drawn at the top of the panel.
    pub label: &'static str,
    /// Unit text drawn at the panel's right edge.
    pub unit: &'static str,
    /// Top-left corner of the numeric value sprite.
    pub value_anchor: Point,
    /// Accent color for border and label.
    pub color: Rgb565,
}

/// Accent color assigned to each panel.
const fn accent(kind: ReadingKind) -> Rgb565 {
    match kind {
        ReadingKind::Voc => GREEN,
        ReadingKind::Co => RED,
        ReadingKind::No2 => ORANGE,
        ReadingKind::Ethyl => YELLOW,
        ReadingKind::Temperature => TEAL,
        ReadingKind::Humidity => BLUE,
    }
}

/// The six panel regions, fixed for the process lifetime.
pub struct PanelSet {
    panels: [PanelRegion; 6],
}

impl PanelSet {
    /// Compute the panel grid for a display of the given size.
    ///
    /// Callers must respect [`crate::config::MIN_SCREEN_WIDTH`] and
    /// [`crate::config::MIN_SCREEN_HEIGHT`]; the panels are non-overlapping
    /// for any display at least that large.
    pub fn layout(width: u32, height: u32) -> Self {
        let grid_top = TITLE_HEIGHT + DIVIDER_WEIGHT;
        let col_width = width / PANEL_COLS;
        let row_height = (height - grid_top) / PANEL_ROWS;

        let panels = ReadingKind::ALL.map(|kind| {
            let slot = kind.index() as u32;
            let col = slot / PANEL_ROWS;
            let row = slot % PANEL_ROWS;

            let x = (col * col_width + PANEL_INSET) as i32;
            let y = (grid_top + row * row_height + PANEL_INSET) as i32;
            let rect = Rectangle::new(
                Point::new(x, y),
                Size::new(col_width - 2 * PANEL_INSET, row_height - 2 * PANEL_INSET),
            );

            PanelRegion {
                kind,
                rect,
                label: kind.label(),
                unit: kind.unit(),
                value_anchor: Point::new(x + VALUE_OFFSET_X, y + VALUE_OFFSET_Y),
                color: accent(kind),
            }
        });

        Self { panels }
    }

    /// The panel owning the given reading kind.
    #[inline]
    pub fn for_kind(&self, kind: ReadingKind) -> &PanelRegion {
        &self.panels[kind.index()]
    }

    /// Iterate over all six panels in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &PanelRegion> {
        self.panels.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
