use super::{Game, GameState};
use crate::config::Glyphs;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Text,
    widgets::Widget,
    Frame,
};

/// Text shown under the board once the game has ended
static GAME_OVER_LINES: &[&str] = &["GAME OVER!", "Press 'r' to Restart or 'q' to Quit."];

/// A complete frame of the game: the board drawn as a grid of characters,
/// followed by the score and, if the game is over, instructions for what to do
/// next.
#[derive(Debug)]
pub(crate) struct GameView<'a, R> {
    game: &'a Game<R>,
    glyphs: &'a Glyphs,
}

impl<'a, R> GameView<'a, R> {
    pub(crate) fn new(game: &'a Game<R>, glyphs: &'a Glyphs) -> Self {
        GameView { game, glyphs }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Render the frame as lines of plain text
    pub(crate) fn lines(&self) -> Vec<String> {
        let board = self.game.board;
        let mut canvas = Canvas::new(board.width, board.height, self.glyphs.empty);
        for pos in Rect::from((Position::ORIGIN, board.size())).positions() {
            if board.is_border(pos) {
                canvas.draw_char(pos, self.glyphs.border);
            }
        }
        // Anything outside the walls is an error elsewhere; just don't draw it.
        for (i, pos) in self.game.snake.segments().enumerate() {
            if board.in_interior(pos) {
                let symbol = if i == 0 {
                    self.glyphs.head
                } else {
                    self.glyphs.body
                };
                canvas.draw_char(pos, symbol);
            }
        }
        if let Some(pos) = self.game.food.filter(|&p| board.in_interior(p)) {
            canvas.draw_char(pos, self.glyphs.food);
        }

        let mut lines = canvas.into_lines();
        lines.push(String::new());
        lines.push(format!("Score: {}", self.game.score));
        if self.game.state == GameState::GameOver {
            lines.push(String::new());
            lines.extend(GAME_OVER_LINES.iter().map(|&s| String::from(s)));
        }
        lines
    }
}

impl<R> Widget for &GameView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(self.lines()).render(area, buf);
    }
}

/// A grid of characters that silently ignores writes outside of itself
#[derive(Clone, Debug, Eq, PartialEq)]
struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    fn new(width: u16, height: u16, fill: char) -> Canvas {
        Canvas {
            rows: vec![vec![fill; usize::from(width)]; usize::from(height)],
        }
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self
            .rows
            .get_mut(usize::from(pos.y))
            .and_then(|row| row.get_mut(usize::from(pos.x)))
        {
            *cell = symbol;
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }
}
