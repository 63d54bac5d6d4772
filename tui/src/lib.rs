//! Terminal front end for termfolio.
//!
//! This crate owns everything that touches the terminal or the outside
//! world: the ratatui event loop, line editing, tab completion, theming,
//! frame rendering, and the execution of side-effect requests produced by
//! the core session.
//!
//! # Modules
//!
//! - [`app`] — key-to-action state machine over the session
//! - [`completion`] — prefix completion over the command set
//! - [`effects`] — clipboard, document open, and download execution
//! - [`input`] — single-line editor for the prompt
//! - [`render`] — frame layout and span styling
//! - [`theme`] — color theme configuration
//! - [`tui`] — terminal lifecycle and event loop

pub mod app;
pub mod completion;
pub mod effects;
pub mod input;
pub mod render;
pub mod theme;
pub mod tui;
