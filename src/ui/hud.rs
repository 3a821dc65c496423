use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::theme::Theme;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, score_area, help_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, theme)).alignment(Alignment::Left),
        inset_horizontal(score_area, HUD_MARGIN_X),
    );

    frame.render_widget(
        Paragraph::new(Line::from(help_text(state)))
            .alignment(Alignment::Left)
            .style(Style::default().fg(theme.hud_muted)),
        inset_horizontal(help_area, HUD_MARGIN_X),
    );

    play_area
}

fn score_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let value_style = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.hud_muted);
    let grid = state.grid();

    Line::from(vec![
        Span::styled("Score: ", label_style),
        Span::styled(state.score().to_string(), value_style),
        Span::styled(SEPARATOR, label_style),
        Span::styled("Length: ", label_style),
        Span::styled(state.snake.len().to_string(), value_style),
        Span::styled(SEPARATOR, label_style),
        Span::styled("Speed: ", label_style),
        Span::styled(format!("{}/s", state.tick_rate()), value_style),
        Span::styled(SEPARATOR, label_style),
        Span::styled(format!("{}x{}", grid.width, grid.height), label_style),
    ])
}

fn help_text(state: &GameState) -> &'static str {
    if state.is_game_over() {
        "[Space]/[R] restart  [Q] quit"
    } else if state.is_paused() {
        "[Space]/[P] resume  [Q] quit"
    } else {
        "arrows/WASD/hjkl move  [Space]/[P] pause  [Q] quit"
    }
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GameConfig;
    use crate::game::GameState;

    use super::{help_text, inset_horizontal};

    #[test]
    fn inset_never_underflows() {
        let inset = inset_horizontal(Rect::new(0, 0, 1, 1), 2);
        assert_eq!(inset.width, 0);
        assert_eq!(inset.x, 2);
    }

    #[test]
    fn help_text_follows_status() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);
        assert!(help_text(&state).contains("pause"));
        assert!(help_text(&state).contains("hjkl"));

        state.toggle_pause();
        assert!(help_text(&state).contains("resume"));
    }
}
