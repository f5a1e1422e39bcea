//! Assorted constants & default configuration
use std::time::Duration;

/// Default width of the board, border included
pub(crate) const BOARD_WIDTH: u16 = 20;

/// Default height of the board, border included
pub(crate) const BOARD_HEIGHT: u16 = 10;

/// Smallest board that still leaves room for a snake and a piece of food
pub(crate) const MIN_BOARD_WIDTH: u16 = 4;

/// Cf. [`MIN_BOARD_WIDTH`]
pub(crate) const MIN_BOARD_HEIGHT: u16 = 3;

/// Length of the snake at the start of each game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Time between frames, in milliseconds
pub(crate) const FRAME_INTERVAL_MS: u64 = 200;

/// Cf. [`FRAME_INTERVAL_MS`]
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = 'O';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '@';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '*';

/// Glyph for unoccupied cells inside the walls
pub(crate) const EMPTY_SYMBOL: char = ' ';

/// Glyph for the wall around the board
pub(crate) const BORDER_SYMBOL: char = '#';

/// How many random cells to try when placing food before falling back to a
/// scan of all free cells
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 256;
