//! jot Core Library
//!
//! This crate provides the core functionality for jot, a personal capture
//! tool for notes, todos and ideas kept as local JSON files.
//!
//! # Architecture
//!
//! - **Storage**: one pretty-printed JSON array per collection, replaced
//!   atomically on every save
//! - **Query**: pure filter, sort and lookup helpers over loaded records
//!
//! Every command is a full load, mutate, save cycle of a single file.
//!
//! # Quick Start
//!
//! ```text
//! let store = Store::open(Config::load()?)?;
//!
//! // Capture
//! store.add_todo("Renew passport", Priority::High)?;
//!
//! // Query
//! let open = query::filter_undone(&store.load_todos());
//! ```
//!
//! # Modules
//!
//! - `store`: Load/mutate/save operations (main entry point)
//! - `models`: Note, Todo and Idea records
//! - `query`: Filtering, sorting, tag extraction and reference resolution
//! - `storage`: JSON file persistence
//! - `id`: Record id generation
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod query;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Idea, IdeaStatus, Note, ParseEnumError, Priority, Record, Todo};
pub use query::QueryError;
pub use storage::{JsonCollection, StorageError, StorageResult};
pub use store::{Collection, Stats, Store};
