//! Search across all collections

use anyhow::Result;

use jot_core::{query, Store};

use crate::output::{numbered, Output, OutputFormat};

pub fn all(store: &Store, text: String, output: &Output) -> Result<()> {
    let notes = store.load_notes();
    let todos = store.load_todos();
    let ideas = store.load_ideas();

    let found_notes = query::filter_by_text(&notes, &text);
    let found_todos = query::filter_by_text(&todos, &text);
    let found_ideas = query::filter_by_text(&ideas, &text);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "notes": found_notes,
                    "todos": found_todos,
                    "ideas": found_ideas,
                }))?
            );
        }
        OutputFormat::Quiet => {
            output.print_notes(&numbered(&notes, &found_notes));
            output.print_todos(&numbered(&todos, &found_todos));
            output.print_ideas(&numbered(&ideas, &found_ideas));
        }
        OutputFormat::Human => {
            println!("── Notes ──");
            output.print_notes(&numbered(&notes, &found_notes));
            println!();
            println!("── Todos ──");
            output.print_todos(&numbered(&todos, &found_todos));
            println!();
            println!("── Ideas ──");
            output.print_ideas(&numbered(&ideas, &found_ideas));
        }
    }

    Ok(())
}
