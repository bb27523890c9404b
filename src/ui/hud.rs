use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::Snapshot;

/// Renders the one-line score HUD and returns the remaining play area below.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(score_line(snapshot.score)))
            .alignment(Alignment::Left)
            .style(
                Style::default()
                    .fg(theme.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    play_area
}

fn score_line(score: u32) -> String {
    format!("Score: {score}")
}
