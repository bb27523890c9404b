use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that would otherwise be used for
/// bounds, making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Default logical tick rate in ticks per second (100ms per tick).
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Points granted per food eaten.
pub const FOOD_POINTS: u32 = 10;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Glyph drawn for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph drawn for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph drawn for food.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Default theme: bright yellow snake on deep purple.
pub const THEME_DEFAULT: Theme = Theme {
    snake_head: Color::Rgb(0xCB, 0xF8, 0x31),
    snake_body: Color::Rgb(0xA3, 0xC6, 0x27),
    food: Color::Rgb(0xCD, 0xE4, 0xF6),
    play_bg: Color::Rgb(0x2A, 0x02, 0x29),
    border_fg: Color::White,
    hud_score: Color::White,
    overlay_title: Color::Rgb(0xCB, 0xF8, 0x31),
    overlay_footer: Color::DarkGray,
};

#[cfg(test)]
mod tests {
    use super::GridSize;

    #[test]
    fn total_cells_multiplies_dimensions() {
        let grid = GridSize {
            width: 32,
            height: 24,
        };
        assert_eq!(grid.total_cells(), 768);
    }
}
