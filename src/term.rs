//! Keyboard input & terminal mode handling
use crate::command::CTRL_C;
use crossterm::{
    cursor,
    event::{poll, read, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use enum_dispatch::enum_dispatch;
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Something that can be asked, without waiting, whether a key has been
/// pressed
#[enum_dispatch]
pub(crate) trait KeySource {
    /// Return the next pending keystroke, lower-cased, or `None` if there
    /// isn't one.  Never blocks.
    fn poll_key(&mut self) -> io::Result<Option<char>>;
}

/// The keyboard backend chosen at startup
#[enum_dispatch(KeySource)]
#[derive(Debug)]
pub(crate) enum Keyboard {
    TerminalKeys,
    DetachedKeys,
}

/// Keystrokes read from the controlling terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> io::Result<Option<char>> {
        // Skip over mouse, resize, and key-release events until we find a
        // keystroke or run out.
        while poll(Duration::ZERO)? {
            if let Some(ch) = key_char(read()?) {
                return Ok(Some(ch));
            }
        }
        Ok(None)
    }
}

/// Used when standard input isn't a terminal: no key is ever pressed
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct DetachedKeys;

impl KeySource for DetachedKeys {
    fn poll_key(&mut self) -> io::Result<Option<char>> {
        Ok(None)
    }
}

/// Translate a terminal event into the character the game understands.
/// Arrow keys stand in for `w`/`a`/`s`/`d`.
fn key_char(event: Event) -> Option<char> {
    let ev = event.as_key_press_event()?;
    let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
    match (ev.modifiers, ev.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(CTRL_C),
        (m, KeyCode::Char(ch)) if normal_modifiers.contains(m) => Some(ch.to_ascii_lowercase()),
        (_, KeyCode::Up) => Some('w'),
        (_, KeyCode::Left) => Some('a'),
        (_, KeyCode::Down) => Some('s'),
        (_, KeyCode::Right) => Some('d'),
        _ => None,
    }
}

/// Ownership of the terminal's input mode for the length of a session.  The
/// original mode is put back by [`Console::restore()`] or, failing that, when
/// the `Console` is dropped.
#[derive(Debug)]
pub(crate) struct Console {
    raw: bool,
}

impl Console {
    /// Put the terminal into raw mode so that keystrokes arrive one at a time
    /// without echoing.  If standard input isn't a terminal, the mode is left
    /// alone and the game will receive no input.
    pub(crate) fn open() -> io::Result<Console> {
        if io::stdin().is_terminal() {
            enable_raw_mode()?;
            log::debug!("Enabled raw mode");
            restore_on_panic();
            Ok(Console { raw: true })
        } else {
            log::warn!("Standard input is not a terminal; keyboard input is disabled");
            Ok(Console { raw: false })
        }
    }

    /// Return the keyboard backend appropriate for this console
    pub(crate) fn keyboard(&self) -> Keyboard {
        if self.raw {
            TerminalKeys.into()
        } else {
            DetachedKeys.into()
        }
    }

    /// Put the terminal back the way it was found.  Calling this more than
    /// once is harmless.
    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if self.raw {
            disable_raw_mode()?;
            self.raw = false;
            log::debug!("Disabled raw mode");
        }
        execute!(io::stdout(), cursor::Show)
    }
}

/// Leave raw mode before a panic message is printed so that it isn't
/// garbled, then hand off to whatever hook was there before
fn restore_on_panic() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        hook(info);
    }));
}

impl Drop for Console {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {e}");
        }
    }
}
