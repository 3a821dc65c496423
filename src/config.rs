use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const APP_DIR_NAME: &str = "wrap-snake";
const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_CELL_SIZE: u32 = 20;
pub const DEFAULT_INITIAL_SNAKE_LENGTH: u32 = 3;

/// Shortest snake a game may start with. Growth copies the tail, so a
/// one-cell snake would land its copy on its own head.
pub const MIN_INITIAL_SNAKE_LENGTH: u32 = 3;

/// Ticks per second at score zero.
pub const DEFAULT_BASE_RATE: u32 = 8;

/// Ticks per second added for every point scored.
pub const DEFAULT_RATE_INCREMENT: u32 = 1;

/// Upper bound for the tick rate.
pub const DEFAULT_MAX_RATE: u32 = 30;

/// Logical grid dimensions in cells.
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

    /// Number of cells a snake travels to circle the grid once on each axis.
    #[must_use]
    pub fn perimeter(self) -> usize {
        2 * (usize::from(self.width) + usize::from(self.height))
    }
}

/// Startup configuration failures. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("window {axis} {length}px is not a multiple of the {cell_size}px cell size")]
    NotCellAligned {
        axis: &'static str,
        length: u32,
        cell_size: u32,
    },
    #[error("window must be at least one cell wide and tall")]
    EmptyGrid,
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: u32, height: u32 },
    #[error(
        "initial snake length {length} must be between {} and the grid width {grid_width}",
        MIN_INITIAL_SNAKE_LENGTH
    )]
    InitialLength { length: u32, grid_width: u16 },
    #[error("base tick rate must be at least 1")]
    ZeroBaseRate,
    #[error("max tick rate {max} is below the base tick rate {base}")]
    MaxRateBelowBase { base: u32, max: u32 },
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk configuration. Every field is optional and falls back to the
/// built-in default.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub initial_snake_length: u32,
    pub base_rate: u32,
    pub rate_increment: u32,
    pub max_rate: u32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            base_rate: DEFAULT_BASE_RATE,
            rate_increment: DEFAULT_RATE_INCREMENT,
            max_rate: DEFAULT_MAX_RATE,
        }
    }
}

impl ConfigFile {
    /// Loads configuration from `explicit` when given, otherwise from the
    /// platform config directory when that file exists, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads and parses one JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

/// Validated, immutable game configuration.
///
/// Only obtainable through [`GameConfig::new`] (or `Default`), so every value
/// of this type has a cell size that divides both window dimensions and a
/// consistent speed ramp.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    window_width: u32,
    window_height: u32,
    cell_size: u32,
    initial_snake_length: u32,
    base_rate: u32,
    rate_increment: u32,
    max_rate: u32,
    grid: GridSize,
}

impl GameConfig {
    /// Validates raw settings and derives the grid geometry.
    pub fn new(raw: ConfigFile) -> Result<Self, ConfigError> {
        if raw.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        for (axis, length) in [("width", raw.window_width), ("height", raw.window_height)] {
            if length % raw.cell_size != 0 {
                return Err(ConfigError::NotCellAligned {
                    axis,
                    length,
                    cell_size: raw.cell_size,
                });
            }
        }

        let columns = raw.window_width / raw.cell_size;
        let rows = raw.window_height / raw.cell_size;
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let (Ok(width), Ok(height)) = (u16::try_from(columns), u16::try_from(rows)) else {
            return Err(ConfigError::GridTooLarge {
                width: columns,
                height: rows,
            });
        };

        if raw.initial_snake_length < MIN_INITIAL_SNAKE_LENGTH
            || raw.initial_snake_length > u32::from(width)
        {
            return Err(ConfigError::InitialLength {
                length: raw.initial_snake_length,
                grid_width: width,
            });
        }

        if raw.base_rate == 0 {
            return Err(ConfigError::ZeroBaseRate);
        }

        if raw.max_rate < raw.base_rate {
            return Err(ConfigError::MaxRateBelowBase {
                base: raw.base_rate,
                max: raw.max_rate,
            });
        }

        Ok(Self {
            window_width: raw.window_width,
            window_height: raw.window_height,
            cell_size: raw.cell_size,
            initial_snake_length: raw.initial_snake_length,
            base_rate: raw.base_rate,
            rate_increment: raw.rate_increment,
            max_rate: raw.max_rate,
            grid: GridSize { width, height },
        })
    }

    #[must_use]
    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    #[must_use]
    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[must_use]
    pub fn initial_snake_length(&self) -> usize {
        self.initial_snake_length as usize
    }

    #[must_use]
    pub fn base_rate(&self) -> u32 {
        self.base_rate
    }

    #[must_use]
    pub fn rate_increment(&self) -> u32 {
        self.rate_increment
    }

    #[must_use]
    pub fn max_rate(&self) -> u32 {
        self.max_rate
    }

    /// Grid dimensions in cells.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Grid cell nearest the window center, where a new snake's head starts.
    #[must_use]
    pub fn initial_head(&self) -> (i32, i32) {
        (
            i32::from(self.grid.width / 2),
            i32::from(self.grid.height / 2),
        )
    }

    /// Tick rate for a given score: linear ramp from the base rate, capped.
    #[must_use]
    pub fn tick_rate_for_score(&self, score: u32) -> u32 {
        self.base_rate
            .saturating_add(score.saturating_mul(self.rate_increment))
            .min(self.max_rate)
    }

    /// Wall-clock time between two ticks at `rate` ticks per second.
    #[must_use]
    pub fn tick_interval(rate: u32) -> Duration {
        Duration::from_secs(1) / rate.max(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            base_rate: DEFAULT_BASE_RATE,
            rate_increment: DEFAULT_RATE_INCREMENT,
            max_rate: DEFAULT_MAX_RATE,
            grid: GridSize {
                width: (DEFAULT_WINDOW_WIDTH / DEFAULT_CELL_SIZE) as u16,
                height: (DEFAULT_WINDOW_HEIGHT / DEFAULT_CELL_SIZE) as u16,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{ConfigError, ConfigFile, GameConfig, GridSize, default_config_path};

    #[test]
    fn default_config_matches_validated_defaults() {
        let validated = GameConfig::new(ConfigFile::default()).expect("defaults should be valid");

        assert_eq!(validated, GameConfig::default());
        assert_eq!(
            validated.grid(),
            GridSize {
                width: 40,
                height: 30
            }
        );
        assert_eq!(validated.initial_head(), (20, 15));
    }

    #[test]
    fn cell_size_must_divide_window() {
        let raw = ConfigFile {
            window_width: 810,
            ..ConfigFile::default()
        };

        assert!(matches!(
            GameConfig::new(raw),
            Err(ConfigError::NotCellAligned { axis: "width", .. })
        ));

        let raw = ConfigFile {
            window_height: 590,
            ..ConfigFile::default()
        };

        assert!(matches!(
            GameConfig::new(raw),
            Err(ConfigError::NotCellAligned { axis: "height", .. })
        ));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let raw = ConfigFile {
            cell_size: 0,
            ..ConfigFile::default()
        };

        assert!(matches!(GameConfig::new(raw), Err(ConfigError::ZeroCellSize)));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let raw = ConfigFile {
            window_width: 0,
            ..ConfigFile::default()
        };

        assert!(matches!(GameConfig::new(raw), Err(ConfigError::EmptyGrid)));
    }

    #[test]
    fn initial_length_must_be_at_least_three_and_fit_one_row() {
        let too_long = ConfigFile {
            initial_snake_length: 41,
            ..ConfigFile::default()
        };
        let empty = ConfigFile {
            initial_snake_length: 0,
            ..ConfigFile::default()
        };
        let single = ConfigFile {
            initial_snake_length: 1,
            ..ConfigFile::default()
        };
        let pair = ConfigFile {
            initial_snake_length: 2,
            ..ConfigFile::default()
        };
        let minimum = ConfigFile {
            initial_snake_length: 3,
            ..ConfigFile::default()
        };

        assert!(matches!(
            GameConfig::new(too_long),
            Err(ConfigError::InitialLength { length: 41, .. })
        ));
        assert!(matches!(
            GameConfig::new(empty),
            Err(ConfigError::InitialLength { length: 0, .. })
        ));
        assert!(matches!(
            GameConfig::new(single),
            Err(ConfigError::InitialLength { length: 1, .. })
        ));
        assert!(matches!(
            GameConfig::new(pair),
            Err(ConfigError::InitialLength { length: 2, .. })
        ));
        assert!(GameConfig::new(minimum).is_ok());
    }

    #[test]
    fn rates_must_be_consistent() {
        let zero_base = ConfigFile {
            base_rate: 0,
            ..ConfigFile::default()
        };
        let low_max = ConfigFile {
            max_rate: 4,
            ..ConfigFile::default()
        };

        assert!(matches!(
            GameConfig::new(zero_base),
            Err(ConfigError::ZeroBaseRate)
        ));
        assert!(matches!(
            GameConfig::new(low_max),
            Err(ConfigError::MaxRateBelowBase { base: 8, max: 4 })
        ));
    }

    #[test]
    fn tick_rate_ramps_linearly_and_caps() {
        let config = GameConfig::default();

        for score in 0..=22 {
            assert_eq!(config.tick_rate_for_score(score), 8 + score);
        }
        assert_eq!(config.tick_rate_for_score(23), 30);
        assert_eq!(config.tick_rate_for_score(500), 30);
        assert_eq!(config.tick_rate_for_score(u32::MAX), 30);
    }

    #[test]
    fn tick_interval_is_inverse_of_rate() {
        assert_eq!(GameConfig::tick_interval(8), Duration::from_millis(125));
        assert_eq!(GameConfig::tick_interval(1), Duration::from_secs(1));
        assert_eq!(GameConfig::tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn config_file_fills_missing_fields_with_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "cell_size": 40, "max_rate": 12 }"#);

        let raw = ConfigFile::from_path(&path).expect("partial config should parse");
        cleanup_test_path(&path);

        assert_eq!(raw.cell_size, 40);
        assert_eq!(raw.max_rate, 12);
        assert_eq!(raw.window_width, 800);

        let config = GameConfig::new(raw).expect("partial config should validate");
        assert_eq!(
            config.grid(),
            GridSize {
                width: 20,
                height: 15
            }
        );
    }

    #[test]
    fn config_file_rejects_unknown_fields() {
        let path = unique_test_path("unknown");
        write_test_file(&path, r#"{ "difficulty": "hard" }"#);

        let result = ConfigFile::from_path(&path);
        cleanup_test_path(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn load_without_path_uses_defaults_when_no_user_file_exists() {
        if default_config_path().is_some_and(|path| path.is_file()) {
            return;
        }

        let raw = ConfigFile::load(None).expect("implicit load should not fail");

        assert_eq!(raw, ConfigFile::default());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            ConfigFile::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("wrap-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
