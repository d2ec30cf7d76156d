//! Command handlers
//!
//! Each handler runs one load, mutate, save cycle against the store and
//! renders the result through `Output`.

pub mod clear;
pub mod config;
pub mod idea;
pub mod note;
pub mod search;
pub mod stats;
pub mod tag;
pub mod todo;

use anyhow::Result;

use crate::editor::prompt_line;

/// Join positional words into the record text, prompting when none were given
///
/// Emptiness is checked by the store, so a blank answer still fails there.
pub(crate) fn text_or_prompt(words: Vec<String>, prompt: &str) -> Result<String> {
    let text = words.join(" ");
    if !text.trim().is_empty() {
        return Ok(text);
    }
    prompt_line(prompt)
}
