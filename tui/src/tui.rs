//! Terminal runner -- ratatui event loop with setup and cleanup.
//!
//! [`Tui`] owns the ratatui terminal and the application state machine. It
//! runs the synchronous main loop: draw a frame, block on the next key
//! event, route it through [`App::handle_key`], and execute any resulting
//! effects. Raw mode and the alternate screen are restored on drop.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use termfolio_core::content::Portfolio;

use crate::app::{App, AppAction, Key};
use crate::effects;
use crate::render::{render_frame, RenderState};
use crate::theme::Theme;


/// The main terminal application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    theme: Theme,
}

impl Tui {
    /// Create a runner, entering raw mode and the alternate screen.
    pub fn new(portfolio: Portfolio, theme: Theme) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(portfolio),
            theme,
        })
    }

    /// Run the main event loop until quit is requested.
    pub fn run(&mut self) -> Result<(), io::Error> {
        loop {
            let state = RenderState {
                app: &self.app,
                theme: &self.theme,
            };
            self.terminal.draw(|frame| render_frame(frame, &state))?;

            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Release {
                        continue;
                    }
                    let Some(key) = decode_key(key_event.code, key_event.modifiers) else {
                        continue;
                    };
                    match self.app.handle_key(key) {
                        Some(AppAction::Quit) => break,
                        Some(AppAction::Run(batch)) => effects::run_all(&batch),
                        None => {}
                    }
                }
                // Resize and the rest just trigger a redraw.
                _ => {}
            }
        }

        self.shutdown()
    }

    /// Restore the terminal to its normal state.
    fn shutdown(&mut self) -> Result<(), io::Error> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}


/// Map a crossterm key event to an application key.
fn decode_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char(ch) => Some(Key::Ctrl(ch.to_ascii_lowercase())),
            KeyCode::Left => Some(Key::CtrlLeft),
            KeyCode::Right => Some(Key::CtrlRight),
            _ => None,
        };
    }
    match code {
        KeyCode::Char(ch) => Some(Key::Char(ch)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_plain_keys() {
        assert_eq!(
            decode_key(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(Key::Char('a'))
        );
        assert_eq!(decode_key(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Enter));
        assert_eq!(decode_key(KeyCode::Tab, KeyModifiers::NONE), Some(Key::Tab));
        assert_eq!(decode_key(KeyCode::Up, KeyModifiers::NONE), Some(Key::Up));
    }

    #[test]
    fn decode_shifted_chars_keep_their_case() {
        assert_eq!(
            decode_key(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Some(Key::Char('A'))
        );
    }

    #[test]
    fn decode_control_combinations() {
        assert_eq!(
            decode_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Key::Ctrl('c'))
        );
        assert_eq!(
            decode_key(KeyCode::Char('Y'), KeyModifiers::CONTROL),
            Some(Key::Ctrl('y'))
        );
        assert_eq!(
            decode_key(KeyCode::Left, KeyModifiers::CONTROL),
            Some(Key::CtrlLeft)
        );
    }

    #[test]
    fn unhandled_keys_decode_to_none() {
        assert_eq!(decode_key(KeyCode::F(5), KeyModifiers::NONE), None);
        assert_eq!(decode_key(KeyCode::Esc, KeyModifiers::NONE), None);
    }
}
