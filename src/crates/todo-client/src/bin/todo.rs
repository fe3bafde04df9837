//! `todo` - command-line front end for the todo tracker API

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use todo_client::{
    notification_channel, ClientConfig, ClientError, ClientResult, Notification, TodoApi,
    TodoApiClient, TodoBoard,
};
use todo_core::{NewTodo, Todo, TodoPatch, TodoStatus, DEFAULT_LIMIT, DEFAULT_PAGE};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage todos on a todo tracker server", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// API root, e.g. http://localhost:3000/api
    #[arg(long, global = true, env = "TODO_API_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of todos
    List {
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Create a todo
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        activity: Option<String>,
        /// Calendar date (YYYY-MM-DD); defaults to today on the server
        #[arg(long)]
        date: Option<String>,
        /// pending, in-progress, or completed
        #[arg(short, long)]
        status: Option<TodoStatus>,
    },

    /// Change fields of a todo
    Update {
        id: Uuid,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, conflicts_with = "clear_activity")]
        activity: Option<String>,
        /// Remove the activity label
        #[arg(long)]
        clear_activity: bool,
        #[arg(long)]
        date: Option<String>,
        #[arg(short, long)]
        status: Option<TodoStatus>,
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Flip the completion flag of a todo on the given page
    Toggle {
        id: Uuid,
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Delete a todo
    Delete { id: Uuid },

    /// Check server health; exits 0 when healthy
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::new();
    if let Some(url) = cli.url {
        config = config.with_base_url(url);
    }

    let api = TodoApiClient::new(config.clone()).context("invalid client configuration")?;
    let (notifier, mut notifications) = notification_channel();

    let outcome = match cli.command {
        Commands::List { page, limit } => {
            let board = TodoBoard::new(Arc::new(api), notifier).with_page(page, limit);
            let result = board.fetch_todos(page, limit).await;
            if result.is_ok() {
                print_board(&board);
            }
            result
        }
        Commands::Add {
            title,
            description,
            activity,
            date,
            status,
        } => {
            let mut todo = NewTodo::new(title, description);
            todo.activity = activity;
            todo.date = date;
            todo.status = status;

            let board = TodoBoard::new(Arc::new(api), notifier);
            board.add_todo(todo).await.map(|created| print_todo(&created))
        }
        Commands::Update {
            id,
            title,
            description,
            activity,
            clear_activity,
            date,
            status,
            completed,
        } => {
            let activity = if clear_activity {
                Some(None)
            } else {
                activity.map(Some)
            };
            let patch = TodoPatch {
                title,
                description,
                activity,
                date,
                status,
                is_completed: completed,
            };
            let board = TodoBoard::new(Arc::new(api), notifier);
            board.update_todo(id, patch).await.map(|todo| print_todo(&todo))
        }
        Commands::Toggle { id, page, limit } => {
            let board = TodoBoard::new(Arc::new(api), notifier).with_page(page, limit);
            toggle(&board, id, page, limit).await
        }
        Commands::Delete { id } => {
            let board = TodoBoard::new(Arc::new(api), notifier);
            board.delete_todo(id).await.map(|()| println!("Todo deleted successfully"))
        }
        Commands::Health => {
            return Ok(health(config.with_timeout(Duration::from_secs(5))).await);
        }
    };

    drain(&mut notifications);
    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Load the page, then toggle the record as it was shown there
async fn toggle(board: &TodoBoard, id: Uuid, page: u32, limit: u32) -> ClientResult<()> {
    board.fetch_todos(page, limit).await?;
    let Some(seen) = board.todos().into_iter().find(|t| t.id == id) else {
        let message = format!("Todo {} is not on page {}", id, board.page());
        eprintln!("✗ {}", message);
        return Err(ClientError::status(404, message));
    };
    board.toggle_todo(&seen).await?;
    print_board(board);
    Ok(())
}

/// Probe `/health` with a short timeout; healthy only on HTTP 200
async fn health(config: ClientConfig) -> ExitCode {
    let api = match TodoApiClient::new(config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("✗ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match api.health().await {
        Ok(health) => {
            println!(
                "{} (database: {}, version: {})",
                health.status, health.database, health.version
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn drain(notifications: &mut UnboundedReceiver<Notification>) {
    while let Ok(notification) = notifications.try_recv() {
        if notification.is_error() {
            eprintln!("{}", notification);
        } else {
            println!("{}", notification);
        }
    }
}

fn print_todo(todo: &Todo) {
    let mark = if todo.is_completed { "x" } else { " " };
    let activity = todo
        .activity
        .as_deref()
        .map(|a| format!(" [{}]", a))
        .unwrap_or_default();
    println!(
        "[{}] {}  {}{}  ({}, {})",
        mark, todo.id, todo.title, activity, todo.status, todo.date
    );
    println!("      {}", todo.description);
}

fn print_board(board: &TodoBoard) {
    let state = board.snapshot();
    if state.todos.is_empty() {
        println!("No todos.");
    }
    for todo in &state.todos {
        print_todo(todo);
    }
    println!(
        "Page {} of {} ({} todos)",
        state.page, state.num_of_pages, state.total_items
    );
}
