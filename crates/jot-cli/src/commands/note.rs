//! Note command handlers

use anyhow::{Context, Result};

use jot_core::{query, Store};

use crate::editor::{edit_text, is_interactive, strip_comments};
use crate::output::{numbered, Output};

const EDITOR_HINT: &str = "<!-- New note. Lines starting with <!-- are ignored. -->\n\
<!-- Use #tags anywhere in the text. -->\n\n";

/// Create a new note
///
/// Without text on the command line, opens $EDITOR when attached to a terminal.
pub fn add(store: &Store, words: Vec<String>, output: &Output) -> Result<()> {
    let mut content = words.join(" ");
    if content.trim().is_empty() && is_interactive() {
        let edited = edit_text(EDITOR_HINT).context("Failed to edit note")?;
        content = strip_comments(&edited);
    }

    let note = store.add_note(&content).context("Failed to add note")?;

    output.record_success("Added note", &note);
    if !note.tags.is_empty() && output.should_prompt() {
        let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("  tags: {}", tags.join(" "));
    }
    Ok(())
}

/// List notes, optionally filtered by tag
pub fn list(store: &Store, tag: Option<String>, output: &Output) -> Result<()> {
    let notes = store.load_notes();
    let shown = match tag {
        Some(ref t) => query::filter_by_tag(&notes, t),
        None => notes.clone(),
    };

    output.print_notes(&numbered(&notes, &shown));
    Ok(())
}

/// Delete a note by position or id prefix
pub fn remove(store: &Store, reference: String, output: &Output) -> Result<()> {
    let note = store.remove_note(&reference)?;
    output.record_success("Removed note", &note);
    Ok(())
}

/// Search note content
pub fn search(store: &Store, text: String, output: &Output) -> Result<()> {
    let notes = store.load_notes();
    let found = query::filter_by_text(&notes, &text);
    output.print_notes(&numbered(&notes, &found));
    Ok(())
}
