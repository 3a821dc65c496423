use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::LoggingError;

const APP_DIR_NAME: &str = "wrap-snake";
const LOG_FILE_NAME: &str = "wrap-snake.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger.
///
/// The terminal belongs to the game while it runs, so log records never go to
/// stdout or stderr. Returns the path written to, or `None` when logging is
/// switched off.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<Option<PathBuf>, LoggingError> {
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let path = path.map_or_else(default_log_path, Path::to_path_buf);
    let file = create_log_file(&path)?;

    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;

    Ok(Some(path))
}

fn create_log_file(path: &Path) -> Result<File, LoggingError> {
    let to_error = |source| LoggingError::Create {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    File::create(path).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use log::{LevelFilter, info};

    use super::{default_log_path, init};

    #[test]
    fn default_path_ends_with_log_file() {
        let path = default_log_path();
        assert!(path.ends_with("wrap-snake/wrap-snake.log"));
    }

    // The only test in this crate that installs the global logger.
    #[test]
    fn init_creates_parent_directory_and_log_file() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let dir = std::env::temp_dir()
            .join("wrap-snake-log-tests")
            .join(format!("nested-{nanos}"));
        let path = dir.join("game.log");

        let written = init(Some(&path), LevelFilter::Info).expect("logger should install");
        info!("logger test record");

        assert_eq!(written.as_deref(), Some(path.as_path()));
        assert!(path.is_file());
        let contents = fs::read_to_string(&path).expect("log file should be readable");
        assert!(contents.contains("logger test record"));

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn off_level_installs_nothing() {
        let result = init(None, LevelFilter::Off).expect("off should never fail");
        assert!(result.is_none());
    }
}
