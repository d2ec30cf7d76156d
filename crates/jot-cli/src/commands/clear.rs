//! Clear command handler

use anyhow::Result;

use jot_core::{Collection, Store};

use crate::editor::confirm;
use crate::output::Output;

/// Empty the given collections after confirmation
///
/// Without `yes`, a non-interactive session counts as "no".
pub fn run(store: &Store, targets: &[Collection], yes: bool, output: &Output) -> Result<()> {
    let names: Vec<&str> = targets.iter().map(|c| c.name()).collect();

    if !yes {
        let question = format!("Delete all {}?", names.join(", "));
        if !output.should_prompt() || !confirm(&question)? {
            output.message("Cancelled. Pass --yes to clear without asking.");
            return Ok(());
        }
    }

    for &collection in targets {
        let removed = store.clear(collection)?;
        output.success(&format!("Cleared {} {}", removed, collection.name()));
    }

    Ok(())
}
