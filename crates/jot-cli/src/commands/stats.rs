//! Stats command handler

use anyhow::Result;

use jot_core::Store;

use crate::output::Output;

/// Show record counts for every collection
pub fn show(store: &Store, output: &Output) -> Result<()> {
    output.print_stats(&store.stats());
    Ok(())
}
