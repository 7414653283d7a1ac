//! Dialogue domain module: the per-user finite-state engine behind every
//! guided flow.
//!
//! # Module Structure
//!
//! - `state`: Session state types (`DialogueState`, `PendingEntry`,
//!   `UserSession`)
//! - `command`: Tagged user input (`ChatCommand`, `MenuCommand`,
//!   `UserInput`)
//! - `prompt`: Prompt text, button labels, and menu layouts
//! - `engine`: The transition engine (`DialogueEngine`, `Response`)

mod command;
mod engine;
pub mod prompt;
mod state;

// Re-export public API
pub use command::{ChatCommand, MenuCommand, UserInput};
pub use engine::{ChartKind, DialogueEngine, Response};
pub use state::{DialogueState, PendingEntry, UserSession};
