//! jot CLI
//!
//! Command-line interface for jot - notes, todos and ideas.
//!
//! Every single-letter flag also accepts its uppercase twin (`-a`/`-A`,
//! `-p`/`-P`, ...) with the same meaning. The one exception is `-v`: `-V`
//! stays clap's `--version`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error};

use jot_core::{Collection, Config, IdeaStatus, Priority, StorageError, Store};

mod commands;
mod editor;
mod logging;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "jot - Capture notes, todos and ideas from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, short_alias = 'Q', long, global = true)]
    quiet: bool,

    /// Path to config file
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Log debug output to stderr (or the configured log file)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Manage todos
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },
    /// Manage ideas
    Idea {
        #[command(subcommand)]
        command: IdeaCommands,
    },
    /// Search notes, todos and ideas
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Show counts for every collection
    Stats,
    /// List note tags with usage counts
    Tags,
    /// Delete every record in a collection
    Clear {
        /// Which collection to empty
        #[arg(value_enum, ignore_case = true)]
        target: ClearTarget,
        /// Skip the confirmation prompt
        #[arg(short, short_alias = 'Y', long)]
        yes: bool,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Add a note; #tags in the text are collected
    #[command(alias = "new")]
    Add {
        /// Note text (opens $EDITOR if omitted)
        text: Vec<String>,
    },
    /// List notes
    #[command(alias = "ls")]
    List {
        /// Only notes with this tag
        #[arg(short, short_alias = 'T', long)]
        tag: Option<String>,
    },
    /// Remove a note
    #[command(alias = "rm")]
    Remove {
        /// List position or id prefix
        reference: String,
    },
    /// Search note text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
}

#[derive(Subcommand)]
enum TodoCommands {
    /// Add a todo
    #[command(alias = "new")]
    Add {
        /// Task text (prompts if omitted)
        text: Vec<String>,
        /// Priority: high, medium or low
        #[arg(short, short_alias = 'P', long, default_value = "medium")]
        priority: Priority,
    },
    /// List open todos
    #[command(alias = "ls")]
    List {
        /// Include completed todos
        #[arg(short, short_alias = 'A', long)]
        all: bool,
        /// Only todos with this priority
        #[arg(short, short_alias = 'P', long)]
        priority: Option<Priority>,
    },
    /// Mark a todo as done
    #[command(alias = "complete")]
    Done {
        /// List position or id prefix
        reference: String,
    },
    /// Reopen a completed todo
    #[command(alias = "reopen")]
    Undo {
        /// List position or id prefix
        reference: String,
    },
    /// Remove a todo
    #[command(alias = "rm")]
    Remove {
        /// List position or id prefix
        reference: String,
    },
    /// Search todo text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Remove all completed todos
    Clear,
}

#[derive(Subcommand)]
enum IdeaCommands {
    /// Add an idea
    #[command(alias = "new")]
    Add {
        /// Idea text (prompts if omitted)
        text: Vec<String>,
    },
    /// List ideas
    #[command(alias = "ls")]
    List {
        /// Sort by votes, most first
        #[arg(short, short_alias = 'S', long)]
        sort: bool,
        /// Only ideas with this status: new, wip, done or archived
        #[arg(short = 'f', short_alias = 'F', long, alias = "filter")]
        status: Option<IdeaStatus>,
    },
    /// Add a vote to an idea
    #[command(alias = "upvote")]
    Up {
        /// List position or id prefix
        reference: String,
    },
    /// Set an idea's status
    Status {
        /// List position or id prefix
        reference: String,
        /// new, wip, done or archived
        status: IdeaStatus,
    },
    /// Remove an idea
    #[command(alias = "rm")]
    Remove {
        /// List position or id prefix
        reference: String,
    },
    /// Search idea text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ClearTarget {
    Notes,
    Todos,
    Ideas,
    All,
}

impl ClearTarget {
    fn collections(self) -> Vec<Collection> {
        match self {
            ClearTarget::Notes => vec![Collection::Notes],
            ClearTarget::Todos => vec![Collection::Todos],
            ClearTarget::Ideas => vec![Collection::Ideas],
            ClearTarget::All => Collection::ALL.to_vec(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    if let Err(e) = run(cli, &output) {
        let core_err = e.downcast_ref::<jot_core::Error>();
        // Bad references and empty text are the user's to fix; log the rest
        if !core_err.is_some_and(jot_core::Error::is_user_error) {
            error!("{:?}", e);
        }

        eprintln!("Error: {:#}", e);
        let hint = match core_err {
            Some(err) => err.recovery_suggestion(),
            None => e
                .downcast_ref::<StorageError>()
                .and_then(|err| err.recovery_suggestion()),
        };
        if let Some(hint) = hint {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), cli.config_file.as_ref(), output);
    }

    let config = Config::load_with_cli_override(cli.config_file.as_ref())
        .context("Failed to load configuration")?;
    logging::init(&config, cli.verbose);
    debug!("Using data directory {:?}", config.data_dir);

    let store = Store::open(config).context("Failed to initialize storage")?;

    match cli.command {
        Commands::Note { command } => handle_note_command(command, &store, output),
        Commands::Todo { command } => handle_todo_command(command, &store, output),
        Commands::Idea { command } => handle_idea_command(command, &store, output),
        Commands::Search { query } => commands::search::all(&store, query, output),
        Commands::Stats => commands::stats::show(&store, output),
        Commands::Tags => commands::tag::list(&store, output),
        Commands::Clear { target, yes } => {
            commands::clear::run(&store, &target.collections(), yes, output)
        }
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_note_command(command: NoteCommands, store: &Store, output: &Output) -> Result<()> {
    match command {
        NoteCommands::Add { text } => commands::note::add(store, text, output),
        NoteCommands::List { tag } => commands::note::list(store, tag, output),
        NoteCommands::Remove { reference } => commands::note::remove(store, reference, output),
        NoteCommands::Search { query } => commands::note::search(store, query, output),
    }
}

fn handle_todo_command(command: TodoCommands, store: &Store, output: &Output) -> Result<()> {
    match command {
        TodoCommands::Add { text, priority } => commands::todo::add(store, text, priority, output),
        TodoCommands::List { all, priority } => commands::todo::list(store, all, priority, output),
        TodoCommands::Done { reference } => commands::todo::done(store, reference, output),
        TodoCommands::Undo { reference } => commands::todo::undo(store, reference, output),
        TodoCommands::Remove { reference } => commands::todo::remove(store, reference, output),
        TodoCommands::Search { query } => commands::todo::search(store, query, output),
        TodoCommands::Clear => commands::todo::clear_done(store, output),
    }
}

fn handle_idea_command(command: IdeaCommands, store: &Store, output: &Output) -> Result<()> {
    match command {
        IdeaCommands::Add { text } => commands::idea::add(store, text, output),
        IdeaCommands::List { sort, status } => commands::idea::list(store, sort, status, output),
        IdeaCommands::Up { reference } => commands::idea::upvote(store, reference, output),
        IdeaCommands::Status { reference, status } => {
            commands::idea::set_status(store, reference, status, output)
        }
        IdeaCommands::Remove { reference } => commands::idea::remove(store, reference, output),
        IdeaCommands::Search { query } => commands::idea::search(store, query, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
