//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)
//!
//! Human listings number each record by its position in the full
//! collection, so the number shown is the one `done`, `up` and `rm` accept
//! no matter which filter produced the list.

use jot_core::query::truncate_for_display;
use jot_core::{Idea, IdeaStatus, Note, Priority, Record, Stats, Todo};
use serde::Serialize;

/// Width of the text column in listings
const TEXT_WIDTH: usize = 60;

/// Characters of the id shown in listings
const SHORT_ID: usize = 7;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// A record paired with its 1-based position in the loaded collection
pub struct Numbered<'a, R> {
    pub position: usize,
    pub record: &'a R,
}

/// Pair each shown record with its position in `all`
pub fn numbered<'a, R: Record>(all: &[R], shown: &'a [R]) -> Vec<Numbered<'a, R>> {
    shown
        .iter()
        .map(|record| Numbered {
            position: all
                .iter()
                .position(|r| r.id() == record.id())
                .map_or(0, |i| i + 1),
            record,
        })
        .collect()
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a list of notes
    pub fn print_notes(&self, notes: &[Numbered<'_, Note>]) {
        match self.format {
            OutputFormat::Human => {
                if notes.is_empty() {
                    println!("No notes found.");
                    return;
                }
                for n in notes {
                    let note = n.record;
                    println!(
                        "{:>3}. {} {}  {}",
                        n.position,
                        short_id(&note.id),
                        note.created_at.format("%Y-%m-%d"),
                        truncate_for_display(&first_line(&note.content), TEXT_WIDTH)
                    );
                }
                println!("\n{} note(s)", notes.len());
            }
            OutputFormat::Json => print_json(&records(notes)),
            OutputFormat::Quiet => print_ids(notes),
        }
    }

    /// Print a list of todos
    pub fn print_todos(&self, todos: &[Numbered<'_, Todo>]) {
        match self.format {
            OutputFormat::Human => {
                if todos.is_empty() {
                    println!("No todos found.");
                    return;
                }
                for n in todos {
                    let todo = n.record;
                    println!(
                        "{:>3}. [{}] {} {} {}",
                        n.position,
                        if todo.is_done() { "x" } else { " " },
                        priority_icon(todo.priority),
                        short_id(&todo.id),
                        truncate_for_display(&first_line(&todo.task), TEXT_WIDTH)
                    );
                }
                let done = todos.iter().filter(|n| n.record.is_done()).count();
                println!("\n{} todo(s), {} done", todos.len(), done);
            }
            OutputFormat::Json => print_json(&records(todos)),
            OutputFormat::Quiet => print_ids(todos),
        }
    }

    /// Print a list of ideas
    pub fn print_ideas(&self, ideas: &[Numbered<'_, Idea>]) {
        match self.format {
            OutputFormat::Human => {
                if ideas.is_empty() {
                    println!("No ideas found.");
                    return;
                }
                for n in ideas {
                    let idea = n.record;
                    println!(
                        "{:>3}. ★{:<3} {} {:<8} {}",
                        n.position,
                        idea.votes(),
                        short_id(&idea.id),
                        status_label(idea.status),
                        truncate_for_display(&first_line(&idea.content), TEXT_WIDTH)
                    );
                }
                println!("\n{} idea(s)", ideas.len());
            }
            OutputFormat::Json => print_json(&records(ideas)),
            OutputFormat::Quiet => print_ids(ideas),
        }
    }

    /// Print a list of tags
    pub fn print_tags(&self, tags: &[(String, usize)]) {
        match self.format {
            OutputFormat::Human => {
                if tags.is_empty() {
                    println!("No tags found.");
                    return;
                }
                for (name, count) in tags {
                    println!("#{} ({})", name, count);
                }
                println!("\n{} tag(s)", tags.len());
            }
            OutputFormat::Json => {
                let json_tags: Vec<_> = tags
                    .iter()
                    .map(|(name, count)| serde_json::json!({"name": name, "count": count}))
                    .collect();
                print_json(&json_tags);
            }
            OutputFormat::Quiet => {
                for (name, _) in tags {
                    println!("{}", name);
                }
            }
        }
    }

    pub fn print_stats(&self, stats: &Stats) {
        match self.format {
            OutputFormat::Human => {
                println!("Notes:  {} ({} tag(s))", stats.notes.total, stats.notes.tags);
                println!(
                    "Todos:  {} ({} pending, {} done)",
                    stats.todos.total, stats.todos.pending, stats.todos.done
                );
                println!(
                    "        pending by priority: {} high, {} medium, {} low",
                    stats.todos.pending_high, stats.todos.pending_medium, stats.todos.pending_low
                );
                println!(
                    "Ideas:  {} ({} vote(s))",
                    stats.ideas.total, stats.ideas.votes
                );
                println!(
                    "        {} new, {} wip, {} done, {} archived",
                    stats.ideas.new, stats.ideas.wip, stats.ideas.done, stats.ideas.archived
                );
            }
            OutputFormat::Json => print_json(stats),
            OutputFormat::Quiet => {
                println!(
                    "{} {} {}",
                    stats.notes.total, stats.todos.total, stats.ideas.total
                );
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a success message and the id of the affected record
    pub fn record_success<R: Record>(&self, message: &str, record: &R) {
        match self.format {
            OutputFormat::Human => println!(
                "✓ {}: {} ({})",
                message,
                truncate_for_display(&first_line(record.text()), TEXT_WIDTH),
                short_id(record.id())
            ),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message, "id": record.id()})
                );
            }
            OutputFormat::Quiet => println!("{}", record.id()),
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn records<'a, R>(numbered: &[Numbered<'a, R>]) -> Vec<&'a R> {
    numbered.iter().map(|n| n.record).collect()
}

fn print_ids<R: Record>(numbered: &[Numbered<'_, R>]) {
    for n in numbered {
        println!("{}", n.record.id());
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to render JSON: {}", e),
    }
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID) {
        Some((i, _)) => &id[..i],
        None => id,
    }
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or("").to_string()
}

/// Marker shown next to a todo
pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "!!!",
        Priority::Medium => "!! ",
        Priority::Low => "!  ",
    }
}

fn status_label(status: IdeaStatus) -> String {
    format!("[{}]", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_numbered_uses_full_collection_positions() {
        let all = vec![
            Note::new("aaa", "one #x"),
            Note::new("bbb", "two"),
            Note::new("ccc", "three #x"),
        ];
        let shown = jot_core::query::filter_by_tag(&all, "x");
        let positions: Vec<usize> = numbered(&all, &shown).iter().map(|n| n.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abcdefghij"), "abcdefg");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("line one\nline two"), "line one");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_priority_icon_width() {
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(priority_icon(p).len(), 3);
        }
    }
}
