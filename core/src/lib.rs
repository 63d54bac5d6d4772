//! Core domain logic for the termfolio terminal portfolio.
//!
//! Everything in this crate is renderer-agnostic: the session produces
//! structured output lines and typed side-effect requests, and performs no
//! terminal or file I/O of its own. The `termfolio-tui` crate draws the
//! state and executes the effects.

pub mod command;
pub mod content;
pub mod history;
pub mod line;
pub mod scrollback;
pub mod session;
