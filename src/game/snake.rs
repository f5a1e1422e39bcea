use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are absolute board coordinates, so the border occupies row
/// and column 0.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the rest of the snake, starting with the segment
    /// right behind the head and ending with the tail
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake `length` cells long with its head at `head`, facing in
    /// `direction`, and its body trailing straight out behind it.  The body
    /// is cut short if it would run off the coordinate space.
    pub(super) fn new(head: Position, length: usize, direction: Direction) -> Snake {
        let behind = direction.reverse();
        let body = std::iter::successors(Some(head), |&p| behind.advance(p))
            .skip(1)
            .take(length.saturating_sub(1))
            .collect();
        Snake {
            head,
            body,
            direction,
        }
    }

    /// Iterate over every segment of the snake, head first
    pub(super) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Does any segment of the snake occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction` unless that would turn it
    /// straight back onto itself.  Returns whether the turn was accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// The cell the head will move into next, if it exists at all
    pub(super) fn next_head(&self) -> Option<Position> {
        self.direction.advance(self.head)
    }

    /// Move the head to `pos`.  Unless `grow` is true, the tail moves up
    /// behind it, keeping the length constant.
    pub(super) fn slither(&mut self, pos: Position, grow: bool) {
        self.body.push_front(self.head);
        self.head = pos;
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}
