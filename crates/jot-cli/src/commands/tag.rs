//! Tag command handlers

use anyhow::Result;

use jot_core::{query, Store};

use crate::output::Output;

/// List all note tags with usage counts
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let tags = query::tag_counts(&store.load_notes());
    output.print_tags(&tags);
    Ok(())
}
