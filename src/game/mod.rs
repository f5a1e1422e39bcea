mod board;
mod direction;
mod food;
mod snake;
mod view;
pub(crate) use self::board::Board;
use self::direction::Direction;
use self::snake::Snake;
pub(crate) use self::view::GameView;
use crate::command::Command;
use rand::Rng;
use ratatui::layout::Position;
use std::ops::ControlFlow;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    initial_length: usize,
    score: u32,
    snake: Snake,
    /// `None` only once the snake has filled the whole board
    food: Option<Position>,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(board: Board, initial_length: usize, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            board,
            initial_length,
            score: 0,
            snake: Snake::new(board.snake_start(), initial_length, Direction::East),
            food: None,
            state: GameState::Running,
        };
        game.place_food();
        game
    }

    /// Throw away everything about the current game and start a fresh one on
    /// the same board
    pub(crate) fn restart(&mut self) {
        self.score = 0;
        self.snake = Snake::new(
            self.board.snake_start(),
            self.initial_length,
            Direction::East,
        );
        self.food = None;
        self.state = GameState::Running;
        self.place_food();
    }

    /// React to a player command.  Returns `Break` if the player asked to
    /// quit.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match (self.state, cmd) {
            (_, Command::Quit) => return ControlFlow::Break(()),
            (GameState::Running, Command::Up) => self.turn(Direction::North),
            (GameState::Running, Command::Left) => self.turn(Direction::West),
            (GameState::Running, Command::Down) => self.turn(Direction::South),
            (GameState::Running, Command::Right) => self.turn(Direction::East),
            (GameState::GameOver, Command::Restart) => {
                log::info!("Restarting after game ended with score {}", self.score);
                self.restart();
            }
            _ => (),
        }
        ControlFlow::Continue(())
    }

    /// Move the snake one cell forwards, eating & dying as appropriate
    pub(crate) fn advance(&mut self) -> Tick {
        if !self.running() {
            return Tick::Idle;
        }
        let Some(head) = self
            .snake
            .next_head()
            .filter(|&p| self.board.in_interior(p))
        else {
            return self.crash(Crash::Wall);
        };
        // The tail has not moved out of the way yet, so it still counts.
        if self.snake.occupies(head) {
            return self.crash(Crash::Snake);
        }
        let ate = self.food == Some(head);
        self.snake.slither(head, ate);
        if !ate {
            return Tick::Moved;
        }
        self.score += 1;
        self.place_food();
        if self.food.is_some() {
            Tick::Ate
        } else {
            Tick::Filled
        }
    }

    fn place_food(&mut self) {
        self.food = food::place_food(&mut self.rng, self.board, &self.snake);
        match self.food {
            Some(pos) => log::debug!("Placed food at ({}, {})", pos.x, pos.y),
            None => {
                log::info!("No room left for food; ending game");
                self.state = GameState::GameOver;
            }
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn turn(&mut self, direction: Direction) {
        if !self.snake.turn(direction) {
            log::debug!("Ignoring attempt to reverse direction to {direction:?}");
        }
    }

    fn crash(&mut self, crash: Crash) -> Tick {
        self.state = GameState::GameOver;
        Tick::Crashed(crash)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Running,
    GameOver,
}

/// What happened during a call to [`Game::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game was not running, so nothing moved
    Idle,
    Moved,
    Ate,
    Crashed(Crash),
    /// The snake ate and now covers every cell, leaving nowhere for food
    Filled,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Crash {
    Wall,
    Snake,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::HashSet;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new(Board::default(), 3, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn snake_at(cells: &[(u16, u16)], direction: Direction) -> Snake {
        let mut positions = cells.iter().map(|&(x, y)| Position::new(x, y));
        let head = positions.next().expect("snake should have a head");
        Snake {
            head,
            body: positions.collect(),
            direction,
        }
    }

    fn segments<R>(game: &Game<R>) -> Vec<Position> {
        game.snake.segments().collect()
    }

    #[test]
    fn fresh_game() {
        let game = new_game();
        assert_eq!(
            segments(&game),
            [
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
        assert_eq!(game.snake.direction, Direction::East);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state, GameState::Running);
        let food = game.food.expect("new game should have food");
        assert!(game.board.in_interior(food));
        assert!(!game.snake.occupies(food));
    }

    #[test]
    fn move_without_eating() {
        let mut game = new_game();
        game.snake = snake_at(&[(5, 5), (4, 5), (3, 5)], Direction::East);
        game.food = Some(Position::new(10, 2));
        assert_eq!(game.advance(), Tick::Moved);
        assert_eq!(
            segments(&game),
            [
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5)
            ]
        );
        assert_eq!(game.score(), 0);
        assert_eq!(game.food, Some(Position::new(10, 2)));
    }

    #[test]
    fn eat_food() {
        let mut game = new_game();
        game.snake = snake_at(&[(5, 5), (4, 5), (3, 5)], Direction::East);
        game.food = Some(Position::new(6, 5));
        assert_eq!(game.advance(), Tick::Ate);
        assert_eq!(
            segments(&game),
            [
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
        assert_eq!(game.score(), 1);
        let food = game.food.expect("food should have been replaced");
        assert!(!game.snake.occupies(food));
        assert!(game.board.in_interior(food));
        assert!(game.running());
    }

    #[test]
    fn hit_wall() {
        let mut game = new_game();
        game.snake = snake_at(&[(1, 5), (2, 5), (3, 5)], Direction::West);
        game.food = Some(Position::new(10, 2));
        assert_eq!(game.advance(), Tick::Crashed(Crash::Wall));
        assert_eq!(game.state, GameState::GameOver);
        assert_eq!(
            segments(&game),
            [
                Position::new(1, 5),
                Position::new(2, 5),
                Position::new(3, 5)
            ]
        );
    }

    #[test]
    fn hit_far_walls() {
        let mut game = new_game();
        game.snake = snake_at(&[(18, 8), (17, 8)], Direction::East);
        assert_eq!(game.advance(), Tick::Crashed(Crash::Wall));
        game.restart();
        game.snake = snake_at(&[(18, 8), (18, 7)], Direction::South);
        assert_eq!(game.advance(), Tick::Crashed(Crash::Wall));
        game.restart();
        game.snake = snake_at(&[(4, 1), (4, 2)], Direction::North);
        assert_eq!(game.advance(), Tick::Crashed(Crash::Wall));
    }

    #[test]
    fn hit_self() {
        let mut game = new_game();
        game.snake = snake_at(
            &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6), (4, 5), (4, 4)],
            Direction::South,
        );
        game.food = Some(Position::new(10, 2));
        assert_eq!(game.advance(), Tick::Crashed(Crash::Snake));
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn chasing_tail_is_fatal() {
        let mut game = new_game();
        game.snake = snake_at(&[(1, 1), (2, 1), (2, 2), (1, 2)], Direction::South);
        game.food = Some(Position::new(10, 2));
        assert_eq!(game.advance(), Tick::Crashed(Crash::Snake));
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn reversing_is_ignored() {
        let mut game = new_game();
        game.food = Some(Position::new(10, 2));
        assert_eq!(
            game.handle_command(Command::Left),
            ControlFlow::Continue(())
        );
        assert_eq!(game.snake.direction, Direction::East);
        assert_eq!(game.advance(), Tick::Moved);
        assert_eq!(game.snake.head, Position::new(6, 5));
        let _ = game.handle_command(Command::Up);
        assert_eq!(game.snake.direction, Direction::North);
        let _ = game.handle_command(Command::Down);
        assert_eq!(game.snake.direction, Direction::North);
    }

    #[test]
    fn turning_ignored_after_game_over() {
        let mut game = new_game();
        game.state = GameState::GameOver;
        let _ = game.handle_command(Command::Up);
        assert_eq!(game.snake.direction, Direction::East);
        assert_eq!(game.advance(), Tick::Idle);
        assert_eq!(game.snake.head, Position::new(5, 5));
    }

    #[test]
    fn quit_from_any_state() {
        let mut game = new_game();
        assert_eq!(game.handle_command(Command::Quit), ControlFlow::Break(()));
        game.state = GameState::GameOver;
        assert_eq!(game.handle_command(Command::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn restart_after_game_over() {
        let mut game = new_game();
        game.snake = snake_at(&[(1, 5), (2, 5), (3, 5), (4, 5)], Direction::West);
        game.score = 7;
        assert_eq!(game.advance(), Tick::Crashed(Crash::Wall));
        assert_eq!(
            game.handle_command(Command::Restart),
            ControlFlow::Continue(())
        );
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake.direction, Direction::East);
        assert_eq!(
            segments(&game),
            [
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
        let food = game.food.expect("restarted game should have food");
        assert!(!game.snake.occupies(food));
    }

    #[test]
    fn restart_ignored_while_running() {
        let mut game = new_game();
        game.snake = snake_at(&[(9, 4), (8, 4), (7, 4), (6, 4)], Direction::East);
        game.score = 2;
        let _ = game.handle_command(Command::Restart);
        assert_eq!(game.score(), 2);
        assert_eq!(game.snake.len(), 4);
    }

    #[test]
    fn fill_board() {
        let mut game = Game::new(Board::new(4, 3), 1, ChaCha12Rng::seed_from_u64(RNG_SEED));
        assert_eq!(segments(&game), [Position::new(1, 1)]);
        assert_eq!(game.food, Some(Position::new(2, 1)));
        assert_eq!(game.advance(), Tick::Filled);
        assert_eq!(game.score(), 1);
        assert_eq!(game.food, None);
        assert_eq!(game.state, GameState::GameOver);
        let _ = game.handle_command(Command::Restart);
        assert!(game.running());
        assert_eq!(game.food, Some(Position::new(2, 1)));
    }

    #[test]
    fn random_play_keeps_invariants() {
        let commands = [
            Command::Up,
            Command::Down,
            Command::Left,
            Command::Right,
            Command::Restart,
        ];
        let mut game = new_game();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED ^ 0xFFFF);
        let mut games = 1;
        for _ in 0..5000 {
            if rng.random_bool(0.3) {
                let cmd = *commands.choose(&mut rng).expect("commands is nonempty");
                let before = game.snake.direction;
                let was_running = game.running();
                let _ = game.handle_command(cmd);
                // A restart resets the heading, so only turns are checked
                if was_running && cmd != Command::Restart {
                    assert_ne!(
                        game.snake.direction,
                        before.reverse(),
                        "{cmd:?} reversed the snake"
                    );
                }
            }
            if !game.running() {
                games += 1;
                let _ = game.handle_command(Command::Restart);
            }
            let len_before = game.snake.len();
            let score_before = game.score();
            match game.advance() {
                Tick::Moved => assert_eq!(game.snake.len(), len_before),
                Tick::Ate => {
                    assert_eq!(game.snake.len(), len_before + 1);
                    assert_eq!(game.score(), score_before + 1);
                }
                Tick::Crashed(_) | Tick::Filled => assert!(!game.running()),
                Tick::Idle => panic!("running game did not advance"),
            }
            if game.running() {
                let cells = segments(&game);
                for &p in &cells {
                    assert!(game.board.in_interior(p), "segment {p:?} outside walls");
                }
                let unique = cells.iter().copied().collect::<HashSet<_>>();
                assert_eq!(unique.len(), cells.len(), "snake overlaps itself");
                let food = game.food.expect("running game should have food");
                assert!(!game.snake.occupies(food), "food is on the snake");
            }
        }
        assert!(games > 1, "random play never lost a game");
    }
}
