use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{DeathReason, Snapshot};

/// Draws the game-over overlay as a centered popup over the play area.
pub fn render_game_over_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let title_style = Style::default()
        .fg(theme.overlay_title)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from("GAME OVER").style(title_style),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(death_reason_text(snapshot.death_reason)),
        Line::from(""),
        Line::from("[Space] Play Again").style(Style::default().fg(theme.overlay_footer)),
        Line::from("[Q] Quit").style(Style::default().fg(theme.overlay_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn death_reason_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "Cause: board complete",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
