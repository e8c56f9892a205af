mod commands;

use checklist_core::Category;
use checklist_store::query::StatusFilter;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checklist", about = "Work and travel to-do lists", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new checklist workspace
    Init,

    /// Add a task to the current list (or the one given)
    Add {
        /// Task text
        text: String,

        /// List to add to (work, travel)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show tasks in the current list
    List {
        /// List to show instead of the current one (work, travel)
        #[arg(short, long, conflicts_with = "all")]
        category: Option<Category>,

        /// Show both lists
        #[arg(long)]
        all: bool,

        /// Filter by status (all, pending, done)
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Only tasks whose text contains this (case-insensitive)
        #[arg(long)]
        contains: Option<String>,
    },

    /// Check or uncheck a task
    Done {
        /// Task ID
        id: String,
    },

    /// Replace a task's text
    Edit {
        /// Task ID
        id: String,

        /// New text
        text: String,
    },

    /// Delete a task after confirmation
    Delete {
        /// Task ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Switch the current list (work, travel)
    Switch {
        category: Category,
    },

    /// Show the current list and task counts
    Status,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CHECKLIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Add { text, category } => commands::add::run(text, category, cli.json).await,
        Commands::List {
            category,
            all,
            status,
            contains,
        } => commands::list::run(category, all, status, contains, cli.json).await,
        Commands::Done { id } => commands::done::run(id, cli.json).await,
        Commands::Edit { id, text } => commands::edit::run(id, text).await,
        Commands::Delete { id, yes } => commands::delete::run(id, yes).await,
        Commands::Switch { category } => commands::switch::run(category).await,
        Commands::Status => commands::status::run(cli.json).await,
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
