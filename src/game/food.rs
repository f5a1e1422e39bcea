use super::board::Board;
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Rect};

/// Pick a cell inside the walls of `board` that isn't covered by `snake`,
/// uniformly at random.
///
/// Random cells are tried first; if [`consts::FOOD_PLACEMENT_ATTEMPTS`] of
/// them all land on the snake, a random cell is chosen from a scan of every
/// free cell instead.  Returns `None` only if the snake fills the interior.
pub(super) fn place_food<R: Rng>(rng: &mut R, board: Board, snake: &Snake) -> Option<Position> {
    if snake.len() >= board.capacity() {
        return None;
    }
    let interior = board.interior();
    for _ in 0..consts::FOOD_PLACEMENT_ATTEMPTS {
        let pos = random_cell(rng, interior);
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
    log::debug!("Random food placement kept hitting the snake; scanning for free cells");
    board
        .interior_positions()
        .filter(|&p| !snake.occupies(p))
        .choose(rng)
}

fn random_cell<R: Rng>(rng: &mut R, area: Rect) -> Position {
    Position::new(
        rng.random_range(area.left()..area.right()),
        rng.random_range(area.top()..area.bottom()),
    )
}
