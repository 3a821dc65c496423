use ratatui::style::Color;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub game_over: Color,
    pub paused: Color,
}

/// Green snake on black, red food.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::Rgb(0, 200, 0),
    snake_body: Color::Rgb(0, 255, 0),
    food: Color::Rgb(255, 0, 0),
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    game_over: Color::Rgb(255, 0, 0),
    paused: Color::White,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
    game_over: Color::LightRed,
    paused: Color::Cyan,
};

/// Terminal default colors only, for monochrome or low-color terminals.
pub const THEME_MONO: Theme = Theme {
    name: "mono",
    snake_head: Color::White,
    snake_body: Color::Gray,
    food: Color::White,
    play_bg: Color::Reset,
    border_fg: Color::Reset,
    hud_score: Color::Reset,
    hud_muted: Color::Reset,
    game_over: Color::Reset,
    paused: Color::Reset,
};

/// All available themes; the first one is the default.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_MONO];

/// Looks up a theme by case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Comma-separated theme names for help and error messages.
#[must_use]
pub fn theme_names() -> String {
    THEMES
        .iter()
        .map(|theme| theme.name)
        .collect::<Vec<_>>()
        .join(", ")
}
