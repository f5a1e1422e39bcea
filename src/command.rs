/// Character delivered by a terminal for Ctrl-C while in raw mode
pub(crate) const CTRL_C: char = '\u{3}';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl Command {
    pub(crate) fn from_char(ch: char) -> Option<Command> {
        match ch.to_ascii_lowercase() {
            'q' | CTRL_C => Some(Command::Quit),
            'w' => Some(Command::Up),
            's' => Some(Command::Down),
            'a' => Some(Command::Left),
            'd' => Some(Command::Right),
            'r' => Some(Command::Restart),
            _ => None,
        }
    }
}
