use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD};
use crate::game::{GameStatus, Snapshot};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::overlay::render_game_over_overlay;

/// Renders one full frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, bounds: GridSize, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);
    let play_area = clip_to_grid(play_area, bounds);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, bounds, snapshot, theme);
    render_snake(frame, inner, bounds, snapshot, theme);

    if snapshot.status == GameStatus::GameOver {
        render_game_over_overlay(frame, play_area, snapshot, theme);
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

/// Shrinks the available area so the border hugs the playfield.
fn clip_to_grid(area: Rect, bounds: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(bounds.width.saturating_add(2)),
        height: area.height.min(bounds.height.saturating_add(2)),
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{clip_to_grid, logical_to_terminal};

    const BOUNDS: GridSize = GridSize {
        width: 8,
        height: 6,
    };

    #[test]
    fn logical_origin_maps_to_inner_origin() {
        let inner = Rect::new(3, 2, 10, 8);
        let mapped = logical_to_terminal(inner, BOUNDS, Position { x: 0, y: 0 });
        assert_eq!(mapped, Some((3, 2)));
    }

    #[test]
    fn out_of_grid_positions_are_not_drawn() {
        let inner = Rect::new(0, 0, 20, 20);
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: -1, y: 0 }),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 8, y: 0 }),
            None
        );
    }

    #[test]
    fn cells_outside_the_terminal_are_clipped() {
        let inner = Rect::new(0, 0, 4, 4);
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 5, y: 1 }),
            None
        );
    }

    #[test]
    fn play_area_hugs_the_grid_plus_border() {
        let clipped = clip_to_grid(Rect::new(0, 0, 80, 40), BOUNDS);
        assert_eq!(clipped.width, 10);
        assert_eq!(clipped.height, 8);
    }
}
