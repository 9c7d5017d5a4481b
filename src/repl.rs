//! Interactive session: a line-editing loop over the once-loaded dataset.

use crate::data::Dataset;
use crate::responder::{self, Responder};
use anyhow::Result;
use rustyline::error::ReadlineError;

/// Banner printed when the session starts.
const BANNER: &str = "Welcome to NeuroChef!";

/// Usage hint printed under the banner.
const HINT: &str =
    "Ask about textures, quick meals, or executive function support. Type 'exit' to leave.";

/// Run the interactive loop until "exit"/"quit" or end of input.
pub fn run(responder: &Responder, dataset: &Dataset) -> Result<()> {
    let mut editor = rustyline::DefaultEditor::new()?;
    println!("{BANNER}");
    println!("{HINT}");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let query = line.trim();
                if query.is_empty() {
                    println!("{}", responder::EMPTY_INPUT_MESSAGE);
                    continue;
                }
                if responder::is_farewell(query) {
                    println!("{}", responder::FAREWELL_MESSAGE);
                    break;
                }
                let _ = editor.add_history_entry(query);
                println!("{}", responder.respond(query, dataset)?);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("{}", responder::FAREWELL_MESSAGE);
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
