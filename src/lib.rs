//! Translate the editor selection through a remote translation API.
//!
//! The pure pieces (`languages`, `command::shape_replacement`) have no I/O.
//! Editor effects go through [`host::EditorHost`] and network calls through
//! [`translate::TranslationApi`], so the command can run against any editor
//! bridge. The binary serves the websocket bridge in `websocket`.

pub mod command;
pub mod config_manager;
pub mod error;
pub mod handlers;
pub mod host;
pub mod languages;
pub mod routes;
pub mod state;
pub mod translate;
pub mod websocket;

pub use command::{shape_replacement, translate_selection, CommandOutcome};
pub use error::{CommandError, TranslateError};
