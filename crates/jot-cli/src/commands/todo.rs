//! Todo command handlers

use anyhow::{Context, Result};

use jot_core::{query, Priority, Store};

use crate::output::{numbered, Output};

use super::text_or_prompt;

/// Create a new todo
pub fn add(store: &Store, words: Vec<String>, priority: Priority, output: &Output) -> Result<()> {
    let task = text_or_prompt(words, "Task")?;
    let todo = store
        .add_todo(&task, priority)
        .context("Failed to add todo")?;
    output.record_success(&format!("Added {} priority todo", todo.priority), &todo);
    Ok(())
}

/// List todos; completed ones are hidden unless `all` is set
pub fn list(store: &Store, all: bool, priority: Option<Priority>, output: &Output) -> Result<()> {
    let todos = store.load_todos();
    let mut shown = if all {
        todos.clone()
    } else {
        query::filter_undone(&todos)
    };
    if let Some(p) = priority {
        shown = query::filter_by_priority(&shown, p);
    }

    output.print_todos(&numbered(&todos, &shown));
    Ok(())
}

/// Mark a todo as done
pub fn done(store: &Store, reference: String, output: &Output) -> Result<()> {
    let todo = store.complete_todo(&reference)?;
    output.record_success("Completed", &todo);
    Ok(())
}

/// Reopen a completed todo
pub fn undo(store: &Store, reference: String, output: &Output) -> Result<()> {
    let todo = store.reopen_todo(&reference)?;
    output.record_success("Reopened", &todo);
    Ok(())
}

/// Delete a todo
pub fn remove(store: &Store, reference: String, output: &Output) -> Result<()> {
    let todo = store.remove_todo(&reference)?;
    output.record_success("Removed todo", &todo);
    Ok(())
}

/// Search todo text, including completed todos
pub fn search(store: &Store, text: String, output: &Output) -> Result<()> {
    let todos = store.load_todos();
    let found = query::filter_by_text(&todos, &text);
    output.print_todos(&numbered(&todos, &found));
    Ok(())
}

/// Remove all completed todos
pub fn clear_done(store: &Store, output: &Output) -> Result<()> {
    let removed = store.clear_completed_todos()?;
    if removed == 0 {
        output.message("No completed todos to clear.");
    } else {
        output.success(&format!("Cleared {} completed todo(s)", removed));
    }
    Ok(())
}
