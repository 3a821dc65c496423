use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info, warn};
use wrap_snake::config::{ConfigFile, GameConfig};
use wrap_snake::error::AppError;
use wrap_snake::game::GameState;
use wrap_snake::input::{GameInput, InputHandler};
use wrap_snake::logging;
use wrap_snake::renderer::{self, GLYPHS_ASCII, GLYPHS_UNICODE, RenderOptions, select_glyphs};
use wrap_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use wrap_snake::theme::{theme_by_name, theme_names};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file. Defaults to `<config dir>/wrap-snake/config.json` when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Window width in pixels; must be a multiple of the cell size.
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Window height in pixels; must be a multiple of the cell size.
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Cell size in pixels.
    #[arg(long, value_name = "PX")]
    cell_size: Option<u32>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Draw with ASCII glyphs only.
    #[arg(long)]
    ascii: bool,

    /// Do not ring the terminal bell on food and game over.
    #[arg(long = "no-bell")]
    no_bell: bool,

    /// Log file path. Defaults to the platform data directory.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    // Configuration problems are reported before the terminal is touched.
    let config = load_config(&cli)?;
    let theme = theme_by_name(&cli.theme).ok_or_else(|| AppError::UnknownTheme {
        name: cli.theme.clone(),
        available: theme_names(),
    })?;

    if let Err(error) = logging::init(cli.log_file.as_deref(), cli.log_level.into()) {
        eprintln!("warning: {error}; continuing without a log file");
    }

    let glyphs = if cli.ascii {
        &GLYPHS_ASCII
    } else {
        select_glyphs(&GLYPHS_UNICODE)
    };
    let options = RenderOptions { theme, glyphs };

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    info!(
        "starting: window={}x{}px grid={}x{} cell={}px rates={}..{} (+{}/point) seed={:?} theme={} glyphs={}",
        config.window_width(),
        config.window_height(),
        config.grid().width,
        config.grid().height,
        config.cell_size(),
        config.base_rate(),
        config.max_rate(),
        config.rate_increment(),
        cli.seed,
        theme.name,
        glyphs.name
    );

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    game_loop(&mut session, &mut state, options, !cli.no_bell)?;

    info!("quit: score={}", state.score());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut raw = ConfigFile::load(cli.config.as_deref())?;

    if let Some(width) = cli.width {
        raw.window_width = width;
    }
    if let Some(height) = cli.height {
        raw.window_height = height;
    }
    if let Some(cell_size) = cli.cell_size {
        raw.cell_size = cell_size;
    }

    Ok(GameConfig::new(raw)?)
}

/// Drains input until the next tick is due, then updates once and redraws.
fn game_loop(
    session: &mut TerminalSession,
    state: &mut GameState,
    options: RenderOptions,
    bell: bool,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut next_tick = Instant::now() + state.tick_interval();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state, options))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            match resolve_confirm(state, game_input) {
                GameInput::Quit => return Ok(()),
                other => state.apply_input(other),
            }
        }

        if Instant::now() < next_tick {
            continue;
        }

        let events = state.update();
        if bell && (events.ate_food || events.game_over) {
            if let Err(error) = session.ring_bell() {
                warn!("bell failed: {error}");
            }
        }
        next_tick = Instant::now() + state.tick_interval();
    }
}

/// Space/Enter restarts a finished game and toggles pause otherwise.
fn resolve_confirm(state: &GameState, input: GameInput) -> GameInput {
    match input {
        GameInput::Confirm if state.is_game_over() => GameInput::Restart,
        GameInput::Confirm => GameInput::Pause,
        other => other,
    }
}
