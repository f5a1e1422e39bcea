use crate::command::Command;
use crate::config::{Config, Glyphs};
use crate::game::{Game, GameView, Tick};
use crate::term::KeySource;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

#[derive(Debug)]
pub(crate) struct App<K, R = rand::rngs::ThreadRng> {
    game: Game<R>,
    keys: K,
    glyphs: Glyphs,
    frame_interval: Duration,
}

impl<K: KeySource> App<K> {
    pub(crate) fn new(config: &Config, keys: K) -> Self {
        App::new_with_rng(config, keys, rand::rng())
    }
}

impl<K: KeySource, R: Rng> App<K, R> {
    pub(crate) fn new_with_rng(config: &Config, keys: K, rng: R) -> App<K, R> {
        App {
            game: Game::new(config.board, config.initial_length, rng),
            keys,
            glyphs: config.glyphs,
            frame_interval: config.frame_interval,
        }
    }

    /// Play until the player quits.  Game over does not end the loop; only an
    /// explicit quit or an I/O error does.
    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;
            if self.tick()?.is_break() {
                log::info!("Quitting with score {}", self.game.score());
                return self.park_cursor(terminal);
            }
            std::thread::sleep(self.frame_interval);
        }
    }

    /// Everything that happens in a frame apart from drawing & waiting: read
    /// at most one key, act on it, and move the snake
    fn tick(&mut self) -> io::Result<ControlFlow<()>> {
        if let Some(cmd) = self.keys.poll_key()?.and_then(Command::from_char) {
            if self.game.handle_command(cmd).is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        match self.game.advance() {
            Tick::Crashed(crash) => {
                log::info!(
                    "Game over: crashed into {crash:?} with score {}",
                    self.game.score()
                );
            }
            Tick::Filled => {
                log::info!("Game over: board filled with score {}", self.game.score());
            }
            Tick::Ate => log::debug!("Food eaten; score is now {}", self.game.score()),
            Tick::Moved | Tick::Idle => (),
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl<K, R> App<K, R> {
    fn view(&self) -> GameView<'_, R> {
        GameView::new(&self.game, &self.glyphs)
    }

    /// Wipe the screen and draw the whole frame from scratch
    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.clear()?;
        terminal.draw(|frame| self.view().draw(frame))?;
        Ok(())
    }

    /// Leave the cursor on the line below the last frame so that anything
    /// printed after exit doesn't overwrite it
    fn park_cursor<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let rows = u16::try_from(self.view().lines().len()).unwrap_or(u16::MAX);
        let bottom = terminal.size()?.height.saturating_sub(1);
        terminal.set_cursor_position((0, rows.min(bottom)))
    }
}
