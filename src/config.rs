use crate::consts;
use crate::game::Board;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Size of the board, walls included
    pub(crate) board: Board,

    /// Length of the snake at the start of each game
    pub(crate) initial_length: usize,

    /// Time between frames
    pub(crate) frame_interval: Duration,

    /// Characters used to draw the board
    pub(crate) glyphs: Glyphs,

    /// File to write log messages to
    pub(crate) log_file: Option<PathBuf>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("asciisnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or described an unplayable game.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            board: Board::default(),
            initial_length: consts::INITIAL_SNAKE_LENGTH,
            frame_interval: consts::FRAME_INTERVAL,
            glyphs: Glyphs::default(),
            log_file: None,
        }
    }
}

/// The characters used for each kind of cell when drawing the board
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Glyphs {
    pub(crate) head: char,
    pub(crate) body: char,
    pub(crate) food: char,
    pub(crate) empty: char,
    pub(crate) border: char,
}

impl Default for Glyphs {
    fn default() -> Glyphs {
        Glyphs {
            head: consts::SNAKE_HEAD_SYMBOL,
            body: consts::SNAKE_BODY_SYMBOL,
            food: consts::FOOD_SYMBOL,
            empty: consts::EMPTY_SYMBOL,
            border: consts::BORDER_SYMBOL,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    width: u16,
    height: u16,
    initial_length: usize,
    frame_interval_ms: u64,
    glyphs: Glyphs,
    log_file: Option<PathBuf>,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        let board = Board::default();
        RawConfig {
            width: board.width,
            height: board.height,
            initial_length: consts::INITIAL_SNAKE_LENGTH,
            frame_interval_ms: consts::FRAME_INTERVAL_MS,
            glyphs: Glyphs::default(),
            log_file: None,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        if value.width < consts::MIN_BOARD_WIDTH || value.height < consts::MIN_BOARD_HEIGHT {
            return Err(InvalidConfig::BoardTooSmall {
                width: value.width,
                height: value.height,
            });
        }
        let board = Board::new(value.width, value.height);
        if value.initial_length == 0 {
            return Err(InvalidConfig::EmptySnake);
        }
        let max = board.max_initial_length();
        if value.initial_length > max {
            return Err(InvalidConfig::SnakeTooLong {
                length: value.initial_length,
                max,
            });
        }
        if value.frame_interval_ms == 0 {
            return Err(InvalidConfig::ZeroFrameInterval);
        }
        Ok(Config {
            board,
            initial_length: value.initial_length,
            frame_interval: Duration::from_millis(value.frame_interval_ms),
            glyphs: value.glyphs,
            log_file: value.log_file,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

/// A configuration that parsed but describes a game that can't be played
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("board must be at least 4x3 including walls, got {width}x{height}")]
    BoardTooSmall { width: u16, height: u16 },
    #[error("initial snake length must be at least 1")]
    EmptySnake,
    #[error("initial snake length {length} does not fit on the board (at most {max})")]
    SnakeTooLong { length: usize, max: usize },
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
}
