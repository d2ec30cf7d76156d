//! Data models for jot
//!
//! Defines the three record kinds: Note, Todo and Idea.
//! Field names serialize in camelCase to match the on-disk JSON layout.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::query::extract_tags;

/// Behaviour shared by every persisted record
pub trait Record {
    /// Unique identifier within the collection
    fn id(&self) -> &str;

    /// Primary text field used by search
    fn text(&self) -> &str;
}

/// A free-form note with hashtags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    /// Lowercase tags taken from `content` when the note was created
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a note, extracting `#tags` from the content
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: id.into(),
            tags: extract_tags(&content),
            content,
            created_at: Utc::now(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.content
    }
}

/// A string that names no variant of a record enum
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Read an enum field, mapping unknown or missing values to the default
///
/// Hand-edited files with a bad `priority` or `status` must still load.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse().ok()).unwrap_or_default())
}

/// Todo urgency
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseEnumError {
                kind: "priority",
                value: s.to_string(),
                expected: "high, medium, low",
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task that can be completed and reopened
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub task: String,
    #[serde(default, deserialize_with = "lenient")]
    pub priority: Priority,
    #[serde(default)]
    done: bool,
    pub created_at: DateTime<Utc>,
    /// Present iff `done` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn new(id: impl Into<String>, task: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            priority,
            done: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Mark as done, stamping `completedAt`
    ///
    /// Completing an already-done todo keeps the original timestamp.
    pub fn complete(&mut self) {
        if !self.done {
            self.done = true;
            self.completed_at = Some(Utc::now());
        }
    }

    /// Mark as not done, dropping `completedAt`
    pub fn reopen(&mut self) {
        self.done = false;
        self.completed_at = None;
    }
}

impl Record for Todo {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.task
    }
}

/// Idea workflow state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    New,
    Wip,
    Done,
    Archived,
}

impl IdeaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::New => "new",
            IdeaStatus::Wip => "wip",
            IdeaStatus::Done => "done",
            IdeaStatus::Archived => "archived",
        }
    }
}

impl FromStr for IdeaStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(IdeaStatus::New),
            "wip" => Ok(IdeaStatus::Wip),
            "done" => Ok(IdeaStatus::Done),
            "archived" => Ok(IdeaStatus::Archived),
            _ => Err(ParseEnumError {
                kind: "status",
                value: s.to_string(),
                expected: "new, wip, done, archived",
            }),
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An idea that collects votes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub content: String,
    #[serde(default)]
    votes: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub status: IdeaStatus,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            votes: 0,
            status: IdeaStatus::New,
            created_at: Utc::now(),
        }
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    /// Add one vote; the count never goes down
    pub fn upvote(&mut self) {
        self.votes = self.votes.saturating_add(1);
    }
}

impl Record for Idea {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new_extracts_tags() {
        let note = Note::new("n1", "Standup #Work and #home");
        assert_eq!(note.id, "n1");
        assert_eq!(note.tags, vec!["work", "home"]);
        assert!(note.has_tag("work"));
        assert!(!note.has_tag("Work"));
    }

    #[test]
    fn test_note_tags_not_recomputed() {
        let mut note = Note::new("n1", "plain text");
        note.content = "now with #tag".to_string();
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_todo_complete_and_reopen() {
        let mut todo = Todo::new("t1", "Write docs", Priority::High);
        assert!(!todo.is_done());
        assert!(todo.completed_at().is_none());

        todo.complete();
        assert!(todo.is_done());
        let stamped = todo.completed_at();
        assert!(stamped.is_some());

        // Completing twice keeps the first timestamp
        todo.complete();
        assert_eq!(todo.completed_at(), stamped);

        todo.reopen();
        assert!(!todo.is_done());
        assert!(todo.completed_at().is_none());
    }

    #[test]
    fn test_todo_serialization_omits_completed_at() {
        let todo = Todo::new("t1", "Pay rent", Priority::Low);
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["task"], "Pay rent");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["done"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("completedAt").is_none());
    }

    #[test]
    fn test_todo_serialization_with_completed_at() {
        let mut todo = Todo::new("t1", "Pay rent", Priority::Medium);
        todo.complete();
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["done"], true);
        assert!(json["completedAt"].is_string());
    }

    #[test]
    fn test_todo_defaults_on_read() {
        let json = r#"{"id":"t1","task":"x","createdAt":"2024-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.is_done());
    }

    #[test]
    fn test_unknown_priority_falls_back_to_medium() {
        let json = r#"{"id":"t1","task":"x","priority":"urgent","done":false,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::Medium);

        let json = r#"{"id":"t2","task":"x","priority":"HIGH","done":false,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::High);
    }

    #[test]
    fn test_null_and_uppercase_enum_values() {
        let json = r#"{"id":"t1","task":"x","priority":null,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::Medium);

        let json = r#"{"id":"i1","content":"x","status":"ARCHIVED","createdAt":"2024-01-01T00:00:00Z"}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.status, IdeaStatus::Archived);
    }

    #[test]
    fn test_idea_upvote() {
        let mut idea = Idea::new("i1", "Build a robot");
        assert_eq!(idea.votes(), 0);
        assert_eq!(idea.status, IdeaStatus::New);

        idea.upvote();
        idea.upvote();
        assert_eq!(idea.votes(), 2);
    }

    #[test]
    fn test_idea_serialization() {
        let mut idea = Idea::new("i1", "Build a robot");
        idea.status = IdeaStatus::Wip;
        let json = serde_json::to_string(&idea).unwrap();
        assert!(json.contains(r#""status":"wip""#));
        assert!(json.contains(r#""votes":0"#));

        let parsed: Idea = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, idea);
    }

    #[test]
    fn test_unknown_status_falls_back_to_new() {
        let json = r#"{"id":"i1","content":"x","votes":3,"status":"someday","createdAt":"2024-01-01T00:00:00Z"}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.status, IdeaStatus::New);
        assert_eq!(idea.votes(), 3);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_strict() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" Low ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());

        assert_eq!("WiP".parse::<IdeaStatus>(), Ok(IdeaStatus::Wip));
        let err = "someday".parse::<IdeaStatus>().unwrap_err();
        assert!(err.to_string().contains("new, wip, done, archived"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(IdeaStatus::Archived.to_string(), "archived");
    }
}
