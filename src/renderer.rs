use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::config::GridSize;
use crate::game::{GameState, GameStatus};
use crate::snake::Cell;
use crate::theme::Theme;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyphs used to draw entities; each must be exactly one cell wide.
#[derive(Debug)]
pub struct GlyphSet {
    pub name: &'static str,
    pub snake_head: &'static str,
    pub snake_body: &'static str,
    pub food: &'static str,
}

impl GlyphSet {
    /// Returns true when every glyph renders exactly [`CELL_COLUMNS`] wide.
    #[must_use]
    pub fn fits_cell(&self) -> bool {
        [self.snake_head, self.snake_body, self.food]
            .iter()
            .all(|glyph| glyph.width() == usize::from(CELL_COLUMNS))
    }
}

pub const GLYPHS_UNICODE: GlyphSet = GlyphSet {
    name: "unicode",
    snake_head: "██",
    snake_body: "▓▓",
    food: "🍎",
};

pub const GLYPHS_ASCII: GlyphSet = GlyphSet {
    name: "ascii",
    snake_head: "@@",
    snake_body: "[]",
    food: "<>",
};

/// Picks `preferred` when its glyphs fit a cell, otherwise the ASCII set.
#[must_use]
pub fn select_glyphs(preferred: &'static GlyphSet) -> &'static GlyphSet {
    if preferred.fits_cell() {
        preferred
    } else {
        &GLYPHS_ASCII
    }
}

/// Presentation choices fixed for the whole session.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub theme: &'static Theme,
    pub glyphs: &'static GlyphSet,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, options: RenderOptions) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, options.theme);

    let Some(board) = board_area(play_area, state.grid()) else {
        render_too_small(frame, play_area, state.grid(), options.theme);
        return;
    };

    let block = Block::bordered()
        .border_style(Style::new().fg(options.theme.border_fg))
        .style(Style::new().bg(options.theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, options);
    render_snake(frame, inner, state, options);

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, board, options.theme),
        GameStatus::GameOver => render_game_over_menu(frame, board, state.score(), options.theme),
        GameStatus::Playing => {}
    }
}

/// Board rectangle (grid plus border) centered in `area`, or `None` when the
/// grid does not fit.
#[must_use]
pub fn board_area(area: Rect, grid: GridSize) -> Option<Rect> {
    let width = grid.width.checked_mul(CELL_COLUMNS)?.checked_add(2)?;
    let height = grid.height.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, grid: GridSize, theme: &Theme) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {}x{}, have {}x{}",
            u32::from(grid.width) * u32::from(CELL_COLUMNS) + 2,
            u32::from(grid.height) + 2,
            area.width,
            area.height
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(theme.game_over)),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, options: RenderOptions) {
    let Some((x, y)) = cell_to_terminal(inner, state.grid(), state.food.position()) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, options.glyphs.food, Style::new().fg(options.theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, options: RenderOptions) {
    let body_style = Style::new().fg(options.theme.snake_body);
    let head_style = Style::new()
        .fg(options.theme.snake_head)
        .add_modifier(Modifier::BOLD);

    let buffer = frame.buffer_mut();
    // Tail first so the head wins when segments overlap.
    for segment in state.snake.segments().skip(1).rev() {
        if let Some((x, y)) = cell_to_terminal(inner, state.grid(), *segment) {
            buffer.set_string(x, y, options.glyphs.snake_body, body_style);
        }
    }

    if let Some((x, y)) = cell_to_terminal(inner, state.grid(), state.snake.head()) {
        buffer.set_string(x, y, options.glyphs.snake_head, head_style);
    }
}

/// Maps a grid cell to the terminal position of its left column.
#[must_use]
pub fn cell_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(cell.col).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
