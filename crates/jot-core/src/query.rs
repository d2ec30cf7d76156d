//! In-memory queries over loaded collections
//!
//! Everything here is pure: functions take records already read from disk
//! and return new vectors or indexes. Text matching is case-insensitive
//! substring containment unless noted otherwise.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{Idea, IdeaStatus, Note, Priority, Record, Todo};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").expect("valid tag regex"));

/// Errors from resolving a record reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Reference was blank
    #[error("No record reference given")]
    EmptyReference,

    /// Neither a valid position nor an id prefix
    #[error("No {kind} found matching '{reference}' (have {len})")]
    NotFound {
        kind: &'static str,
        reference: String,
        len: usize,
    },

    /// Id prefix matched more than one record
    #[error("Ambiguous id '{reference}' matches {} {kind}s: {}", .matches.len(), .matches.join(", "))]
    AmbiguousId {
        kind: &'static str,
        reference: String,
        matches: Vec<String>,
    },
}

/// Keep records whose primary text contains `query`
pub fn filter_by_text<R: Record + Clone>(records: &[R], query: &str) -> Vec<R> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keep notes carrying exactly `tag` (a leading `#` is ignored)
pub fn filter_by_tag(notes: &[Note], tag: &str) -> Vec<Note> {
    let tag = normalize_tag(tag);
    notes.iter().filter(|n| n.has_tag(&tag)).cloned().collect()
}

/// Keep todos that are still open
pub fn filter_undone(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| !t.is_done()).cloned().collect()
}

pub fn filter_by_priority(todos: &[Todo], priority: Priority) -> Vec<Todo> {
    todos
        .iter()
        .filter(|t| t.priority == priority)
        .cloned()
        .collect()
}

pub fn filter_by_status(ideas: &[Idea], status: IdeaStatus) -> Vec<Idea> {
    ideas
        .iter()
        .filter(|i| i.status == status)
        .cloned()
        .collect()
}

/// Most voted first; equal votes keep their original order
pub fn sort_by_votes_descending(ideas: &[Idea]) -> Vec<Idea> {
    let mut sorted = ideas.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.votes().cmp(&a.votes()));
    sorted
}

/// Pull `#tags` out of text
///
/// Tags are lowercased, deduplicated, and returned in order of first
/// appearance.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for cap in TAG_RE.captures_iter(text) {
        let tag = cap[1].to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Tag usage across notes, most used first, then alphabetical
pub fn tag_counts(notes: &[Note]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for tag in notes.iter().flat_map(|n| n.tags.iter()) {
        match counts.iter_mut().find(|(name, _)| name == tag) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

const ELLIPSIS: &str = "...";

/// Shorten text to `max_len` characters, ending in "..." when cut
///
/// Widths below 3 get a clipped ellipsis, so the result never exceeds
/// `max_len`.
pub fn truncate_for_display(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len < ELLIPSIS.len() {
        return ELLIPSIS[..max_len].to_string();
    }
    let mut out: String = text.chars().take(max_len - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Resolve a user reference to an index into `records`
///
/// The reference is first read as a 1-based position. If it is not a number
/// or is out of range, it is matched as a unique prefix of a record id.
pub fn resolve<R: Record>(
    records: &[R],
    reference: &str,
    kind: &'static str,
) -> Result<usize, QueryError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(QueryError::EmptyReference);
    }

    if let Ok(position) = reference.parse::<usize>() {
        if (1..=records.len()).contains(&position) {
            return Ok(position - 1);
        }
    }

    let matches: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id().starts_with(reference))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(QueryError::NotFound {
            kind,
            reference: reference.to_string(),
            len: records.len(),
        }),
        _ => Err(QueryError::AmbiguousId {
            kind,
            reference: reference.to_string(),
            matches: matches.iter().map(|&i| records[i].id().to_string()).collect(),
        }),
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('#').to_lowercase()
}
