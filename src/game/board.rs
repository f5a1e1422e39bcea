use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// Dimensions of the playing field.  The outermost ring of cells is wall; the
/// snake and the food live strictly inside it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Board {
    pub(crate) const fn new(width: u16, height: u16) -> Board {
        Board { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The playable area: everything but the border
    pub(crate) fn interior(self) -> Rect {
        Rect::new(
            1,
            1,
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
    }

    pub(crate) fn in_interior(self, pos: Position) -> bool {
        self.interior().contains(pos)
    }

    pub(crate) fn is_border(self, pos: Position) -> bool {
        pos.x < self.width
            && pos.y < self.height
            && (pos.x == 0
                || pos.y == 0
                || pos.x == self.width - 1
                || pos.y == self.height - 1)
    }

    pub(crate) fn interior_positions(self) -> Positions {
        self.interior().positions()
    }

    /// Number of cells inside the border
    pub(crate) fn capacity(self) -> usize {
        let Size { width, height } = self.interior().as_size();
        usize::from(width) * usize::from(height)
    }

    /// Where a fresh snake's head is placed: a quarter of the way across,
    /// halfway down
    pub(crate) fn snake_start(self) -> Position {
        Position::new(self.width / 4, self.height / 2)
    }

    /// The longest snake that fits between [`Board::snake_start()`] and the
    /// left wall
    pub(crate) fn max_initial_length(self) -> usize {
        usize::from(self.snake_start().x)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(consts::BOARD_WIDTH, consts::BOARD_HEIGHT)
    }
}
