//! Keyword-matching meal assistant for neurodivergent needs.
//!
//! Given a free-text question and a static JSON dataset of meals, the
//! responder classifies the question into a topic bucket (sensory
//! preferences, quick meals, executive-function support) and assembles a
//! reply from dataset fields. One process handles one query and prints one
//! line; `--interactive` keeps the process alive for a session instead.

pub mod config;
pub mod data;
pub mod repl;
pub mod responder;
