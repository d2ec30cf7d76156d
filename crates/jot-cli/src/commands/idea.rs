//! Idea command handlers

use anyhow::{Context, Result};

use jot_core::{query, IdeaStatus, Store};

use crate::output::{numbered, Output};

use super::text_or_prompt;

/// Capture a new idea
pub fn add(store: &Store, words: Vec<String>, output: &Output) -> Result<()> {
    let content = text_or_prompt(words, "Idea")?;
    let idea = store.add_idea(&content).context("Failed to add idea")?;
    output.record_success("Added idea", &idea);
    Ok(())
}

/// List ideas, optionally by status and sorted by votes
pub fn list(
    store: &Store,
    by_votes: bool,
    status: Option<IdeaStatus>,
    output: &Output,
) -> Result<()> {
    let ideas = store.load_ideas();
    let mut shown = match status {
        Some(s) => query::filter_by_status(&ideas, s),
        None => ideas.clone(),
    };
    if by_votes {
        shown = query::sort_by_votes_descending(&shown);
    }

    output.print_ideas(&numbered(&ideas, &shown));
    Ok(())
}

/// Add a vote to an idea
pub fn upvote(store: &Store, reference: String, output: &Output) -> Result<()> {
    let idea = store.upvote_idea(&reference)?;
    output.record_success(&format!("Upvoted to {}", idea.votes()), &idea);
    Ok(())
}

/// Move an idea to another workflow state
pub fn set_status(
    store: &Store,
    reference: String,
    status: IdeaStatus,
    output: &Output,
) -> Result<()> {
    let idea = store.set_idea_status(&reference, status)?;
    output.record_success(&format!("Marked {}", idea.status), &idea);
    Ok(())
}

/// Delete an idea
pub fn remove(store: &Store, reference: String, output: &Output) -> Result<()> {
    let idea = store.remove_idea(&reference)?;
    output.record_success("Removed idea", &idea);
    Ok(())
}

/// Search idea text
pub fn search(store: &Store, text: String, output: &Output) -> Result<()> {
    let ideas = store.load_ideas();
    let found = query::filter_by_text(&ideas, &text);
    output.print_ideas(&numbered(&ideas, &found));
    Ok(())
}
