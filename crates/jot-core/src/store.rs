//! Unified storage interface
//!
//! The `Store` owns the paths of the three collection files and runs each
//! command as one load, mutate, save cycle. It keeps no records between
//! calls, so every operation sees what is on disk right now.
//!
//! ## Usage
//!
//! ```ignore
//! let store = Store::open(Config::load()?)?;  // Creates missing files
//!
//! let note = store.add_note("Call the plumber #home")?;
//! let todos = store.load_todos();
//! store.complete_todo("1")?;
//! ```
//!
//! Two processes saving the same file at once race; the last writer wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::models::{Idea, IdeaStatus, Note, Priority, Record, Todo};
use crate::query::{self, resolve};
use crate::storage::{JsonCollection, StorageError, StorageResult};

/// The three record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Notes,
    Todos,
    Ideas,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Notes, Collection::Todos, Collection::Ideas];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Notes => "notes",
            Collection::Todos => "todos",
            Collection::Ideas => "ideas",
        }
    }
}

/// Counts shown by `jot stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub notes: NoteStats,
    pub todos: TodoStats,
    pub ideas: IdeaStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStats {
    pub total: usize,
    pub tags: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    pub pending_high: usize,
    pub pending_medium: usize,
    pub pending_low: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaStats {
    pub total: usize,
    pub new: usize,
    pub wip: usize,
    pub done: usize,
    pub archived: usize,
    pub votes: u64,
}

/// Storage interface for notes, todos and ideas
#[derive(Debug)]
pub struct Store {
    notes: JsonCollection<Note>,
    todos: JsonCollection<Todo>,
    ideas: JsonCollection<Idea>,
    config: Config,
}

impl Store {
    /// Open the store, creating the data directory and any missing files
    pub fn open(config: Config) -> StorageResult<Self> {
        let store = Self::new(config);
        store.init()?;
        Ok(store)
    }

    /// Build a store without touching the filesystem
    pub fn new(config: Config) -> Self {
        Self {
            notes: JsonCollection::new(config.notes_path()),
            todos: JsonCollection::new(config.todos_path()),
            ideas: JsonCollection::new(config.ideas_path()),
            config,
        }
    }

    /// Ensure the data directory and all three files exist
    ///
    /// Safe to call on every start; existing files are left alone.
    pub fn init(&self) -> StorageResult<()> {
        let dir = &self.config.data_dir;
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            info!("Created data directory {:?}", dir);
        }

        self.notes.ensure_exists()?;
        self.todos.ensure_exists()?;
        self.ideas.ensure_exists()?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Note Operations ====================

    pub fn load_notes(&self) -> Vec<Note> {
        self.notes.load()
    }

    /// Add a note to the front of the list
    pub fn add_note(&self, content: &str) -> Result<Note> {
        let content = require_text(content, "Note")?;
        let mut notes = self.notes.load();
        let note = Note::new(generate_unique_id(ids(&notes)), content);
        notes.insert(0, note.clone());
        self.notes.save(&notes)?;
        debug!("Added note {} with tags {:?}", note.id, note.tags);
        Ok(note)
    }

    pub fn remove_note(&self, reference: &str) -> Result<Note> {
        remove(&self.notes, reference, "note")
    }

    // ==================== Todo Operations ====================

    pub fn load_todos(&self) -> Vec<Todo> {
        self.todos.load()
    }

    pub fn add_todo(&self, task: &str, priority: Priority) -> Result<Todo> {
        let task = require_text(task, "Todo")?;
        let mut todos = self.todos.load();
        let todo = Todo::new(generate_unique_id(ids(&todos)), task, priority);
        todos.insert(0, todo.clone());
        self.todos.save(&todos)?;
        debug!("Added todo {} ({})", todo.id, todo.priority);
        Ok(todo)
    }

    pub fn complete_todo(&self, reference: &str) -> Result<Todo> {
        update(&self.todos, reference, "todo", Todo::complete)
    }

    pub fn reopen_todo(&self, reference: &str) -> Result<Todo> {
        update(&self.todos, reference, "todo", Todo::reopen)
    }

    pub fn remove_todo(&self, reference: &str) -> Result<Todo> {
        remove(&self.todos, reference, "todo")
    }

    /// Drop every completed todo, returning how many were removed
    pub fn clear_completed_todos(&self) -> Result<usize> {
        let todos = self.todos.load();
        let before = todos.len();
        let remaining = query::filter_undone(&todos);
        let removed = before - remaining.len();
        if removed > 0 {
            self.todos.save(&remaining)?;
        }
        Ok(removed)
    }

    // ==================== Idea Operations ====================

    pub fn load_ideas(&self) -> Vec<Idea> {
        self.ideas.load()
    }

    pub fn add_idea(&self, content: &str) -> Result<Idea> {
        let content = require_text(content, "Idea")?;
        let mut ideas = self.ideas.load();
        let idea = Idea::new(generate_unique_id(ids(&ideas)), content);
        ideas.insert(0, idea.clone());
        self.ideas.save(&ideas)?;
        debug!("Added idea {}", idea.id);
        Ok(idea)
    }

    pub fn upvote_idea(&self, reference: &str) -> Result<Idea> {
        update(&self.ideas, reference, "idea", Idea::upvote)
    }

    pub fn set_idea_status(&self, reference: &str, status: IdeaStatus) -> Result<Idea> {
        update(&self.ideas, reference, "idea", |idea| idea.status = status)
    }

    pub fn remove_idea(&self, reference: &str) -> Result<Idea> {
        remove(&self.ideas, reference, "idea")
    }

    // ==================== Collection Operations ====================

    /// Empty a whole collection, returning how many records it held
    pub fn clear(&self, collection: Collection) -> Result<usize> {
        let removed = match collection {
            Collection::Notes => clear_all(&self.notes)?,
            Collection::Todos => clear_all(&self.todos)?,
            Collection::Ideas => clear_all(&self.ideas)?,
        };
        info!("Cleared {} record(s) from {}", removed, collection.name());
        Ok(removed)
    }

    pub fn stats(&self) -> Stats {
        let notes = self.notes.load();
        let todos = self.todos.load();
        let ideas = self.ideas.load();

        let pending = query::filter_undone(&todos);
        let pending_with = |p: Priority| pending.iter().filter(|t| t.priority == p).count();
        let ideas_with = |s: IdeaStatus| ideas.iter().filter(|i| i.status == s).count();

        Stats {
            notes: NoteStats {
                total: notes.len(),
                tags: query::tag_counts(&notes).len(),
            },
            todos: TodoStats {
                total: todos.len(),
                done: todos.len() - pending.len(),
                pending: pending.len(),
                pending_high: pending_with(Priority::High),
                pending_medium: pending_with(Priority::Medium),
                pending_low: pending_with(Priority::Low),
            },
            ideas: IdeaStats {
                total: ideas.len(),
                new: ideas_with(IdeaStatus::New),
                wip: ideas_with(IdeaStatus::Wip),
                done: ideas_with(IdeaStatus::Done),
                archived: ideas_with(IdeaStatus::Archived),
                votes: ideas.iter().map(|i| u64::from(i.votes())).sum(),
            },
        }
    }
}

fn require_text<'a>(text: &'a str, kind: &'static str) -> Result<&'a str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyText { kind });
    }
    Ok(text)
}

fn ids<R: Record>(records: &[R]) -> impl Iterator<Item = &str> + Clone {
    records.iter().map(|r| r.id())
}

/// Resolve, apply `f`, then save. Nothing is written if resolving fails.
fn update<R, F>(
    collection: &JsonCollection<R>,
    reference: &str,
    kind: &'static str,
    f: F,
) -> Result<R>
where
    R: Record + Clone + Serialize + serde::de::DeserializeOwned,
    F: FnOnce(&mut R),
{
    let mut records = collection.load();
    let index = resolve(&records, reference, kind)?;
    f(&mut records[index]);
    let updated = records[index].clone();
    collection.save(&records)?;
    Ok(updated)
}

fn remove<R>(collection: &JsonCollection<R>, reference: &str, kind: &'static str) -> Result<R>
where
    R: Record + Serialize + serde::de::DeserializeOwned,
{
    let mut records = collection.load();
    let index = resolve(&records, reference, kind)?;
    let removed = records.remove(index);
    collection.save(&records)?;
    debug!("Removed {} {}", kind, removed.id());
    Ok(removed)
}

fn clear_all<R>(collection: &JsonCollection<R>) -> Result<usize>
where
    R: Serialize + serde::de::DeserializeOwned,
{
    let count = collection.load().len();
    collection.save(&[])?;
    Ok(count)
}
