//! Application state machine -- key routing over the session.
//!
//! `App` is the top-level owner of all UI state: the core session, the
//! line editor, the completer, and the review-scroll offset. It performs
//! no I/O; key handling either mutates state or hands an [`AppAction`]
//! back to the runner.

use termfolio_core::content::Portfolio;
use termfolio_core::session::{Effect, Session};

use crate::completion::Completer;
use crate::input::InputLine;


/// Lines moved per PageUp/PageDown step.
const REVIEW_PAGE: usize = 10;


// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A decoded key press, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    CtrlLeft,
    CtrlRight,
    Enter,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}


// ---------------------------------------------------------------------------
// AppAction
// ---------------------------------------------------------------------------

/// An instruction for the runner produced by key handling.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Quit the application.
    Quit,
    /// Execute side-effect requests from the session.
    Run(Vec<Effect>),
}


// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level UI state for the portfolio terminal.
pub struct App {
    session: Session,
    input: InputLine,
    completer: Completer,
    /// How many lines above the bottom the view is anchored. 0 means live;
    /// any new output snaps back to 0.
    review_offset: usize,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        App {
            session: Session::new(portfolio),
            input: InputLine::new(),
            completer: Completer::new(),
            review_offset: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn review_offset(&self) -> usize {
        self.review_offset
    }

    /// Handle one key press.
    ///
    /// Returns `None` when the key only mutated UI state.
    pub fn handle_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Ctrl('c') | Key::Ctrl('d') => Some(AppAction::Quit),

            Key::Enter => {
                let text = self.input.take();
                let effects = self.session.submit(&text);
                self.review_offset = 0;
                if effects.is_empty() {
                    None
                } else {
                    Some(AppAction::Run(effects))
                }
            }

            Key::Up => {
                if let Some(entry) = self.session.history_mut().older() {
                    self.input.set_text(&entry);
                }
                None
            }

            Key::Down => {
                // An empty string here means browsing ended; it clears the field.
                if let Some(entry) = self.session.history_mut().newer() {
                    self.input.set_text(&entry);
                }
                None
            }

            Key::Tab => {
                if let Some(completed) = self.completer.complete(&self.input.text()) {
                    self.input.set_text(&completed);
                }
                None
            }

            // Activation of the contact block's copy element.
            Key::Ctrl('y') => {
                let effects = self.session.copy_email();
                self.review_offset = 0;
                Some(AppAction::Run(effects))
            }

            Key::Char(ch) => {
                self.input.insert(ch);
                None
            }
            Key::Backspace => {
                self.input.delete_back();
                None
            }
            Key::Delete => {
                self.input.delete_forward();
                None
            }
            Key::Left => {
                self.input.move_left();
                None
            }
            Key::Right => {
                self.input.move_right();
                None
            }
            Key::Home | Key::Ctrl('a') => {
                self.input.move_home();
                None
            }
            Key::End | Key::Ctrl('e') => {
                self.input.move_end();
                None
            }
            Key::CtrlLeft => {
                self.input.move_word_left();
                None
            }
            Key::CtrlRight => {
                self.input.move_word_right();
                None
            }
            Key::Ctrl('w') => {
                self.input.delete_word_back();
                None
            }
            Key::Ctrl('u') => {
                self.input.clear();
                None
            }

            Key::PageUp => {
                let max = self.session.scrollback().len();
                self.review_offset = (self.review_offset + REVIEW_PAGE).min(max);
                None
            }
            Key::PageDown => {
                self.review_offset = self.review_offset.saturating_sub(REVIEW_PAGE);
                None
            }

            Key::Ctrl(_) => None,
        }
    }
}
