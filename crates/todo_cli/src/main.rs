//! Terminal front-end for the to-do core.
//!
//! # Responsibility
//! - Stand in for the GUI shell: open a session, bind to store changes,
//!   dispatch one mutation, save on exit.
//! - Keep output deterministic so it can be scripted.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::{init_logging, AppConfig, ListChange, ListStore, SettingsChange, TodoSession};

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Most-recent-first to-do list")]
struct Cli {
    /// Directory holding tasks.json, history.json and settings.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level for file logs (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Disabled when absent.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct ListSelector {
    /// Operate on the history list instead of active tasks.
    #[arg(long)]
    history: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Store(StoreCommand),
    /// Print core linkage probe.
    Ping,
}

/// Commands that run against an open session.
#[derive(Subcommand, Debug)]
enum StoreCommand {
    /// Print rows with their indices.
    List {
        #[command(flatten)]
        list: ListSelector,
    },
    /// Add a task at the top of the list.
    Add {
        text: String,
        #[arg(long)]
        done: bool,
        #[command(flatten)]
        list: ListSelector,
    },
    /// Remove the task at INDEX.
    Remove {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        #[command(flatten)]
        list: ListSelector,
    },
    /// Mark the task at INDEX done (or open again with --undo).
    Done {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        #[arg(long)]
        undo: bool,
        #[command(flatten)]
        list: ListSelector,
    },
    /// Move the task at FROM so it ends up at TO.
    Move {
        #[arg(allow_negative_numbers = true)]
        from: i64,
        #[arg(allow_negative_numbers = true)]
        to: i64,
        #[command(flatten)]
        list: ListSelector,
    },
    /// Move the task at INDEX into history, marked done.
    Archive {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Show settings, or update them when values are given.
    Settings {
        #[arg(long, allow_negative_numbers = true)]
        width: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        height: Option<i32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match cli.command {
        Command::Ping => {
            println!("todo_core ping={}", todo_core::ping());
            println!("todo_core version={}", todo_core::core_version());
        }
        Command::Store(command) => {
            let mut session = TodoSession::open(config.store_paths());
            bind_change_printers(&mut session);
            run(&mut session, command);
            session.close();
        }
    }
    ExitCode::SUCCESS
}

fn build_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig {
        data_dir: cli.data_dir.clone(),
        log_dir: cli.log_dir.clone(),
        ..AppConfig::default()
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

fn bind_change_printers(session: &mut TodoSession) {
    session
        .tasks_mut()
        .subscribe(|change| println!("tasks: {}", describe(change)));
    session
        .history_mut()
        .subscribe(|change| println!("history: {}", describe(change)));
    session.settings_mut().subscribe(|change| match change {
        SettingsChange::ExpandedWidthChanged => println!("settings: width changed"),
        SettingsChange::WinHeightChanged => println!("settings: height changed"),
    });
}

fn describe(change: &ListChange) -> String {
    match change {
        ListChange::Inserted { index } => format!("inserted row {index}"),
        ListChange::Removed { index } => format!("removed row {index}"),
        ListChange::DataChanged { index, field } => {
            format!("row {index} {} changed", field.role_name())
        }
        ListChange::Moved { from, to } => format!("moved row {from} to {to}"),
        ListChange::Reset => "reset".to_string(),
    }
}

fn run(session: &mut TodoSession, command: StoreCommand) {
    match command {
        StoreCommand::List { list } => print_rows(select(session, list)),
        StoreCommand::Add { text, done, list } => select_mut(session, list).add_task(text, done),
        StoreCommand::Remove { index, list } => {
            select_mut(session, list).remove_task(index);
        }
        StoreCommand::Done { index, undo, list } => {
            select_mut(session, list).set_done(index, !undo)
        }
        StoreCommand::Move { from, to, list } => select_mut(session, list).move_task(from, to),
        StoreCommand::Archive { index } => session.archive_task(index),
        StoreCommand::Settings { width, height } => {
            let settings = session.settings_mut();
            if let Some(width) = width {
                settings.set_expanded_width(width);
            }
            if let Some(height) = height {
                settings.set_win_height(height);
            }
            println!(
                "width={} height={}",
                settings.expanded_width(),
                settings.win_height()
            );
        }
    }
}

fn select(session: &TodoSession, list: ListSelector) -> &ListStore {
    if list.history {
        session.history()
    } else {
        session.tasks()
    }
}

fn select_mut(session: &mut TodoSession, list: ListSelector) -> &mut ListStore {
    if list.history {
        session.history_mut()
    } else {
        session.tasks_mut()
    }
}

fn print_rows(store: &ListStore) {
    if store.is_empty() {
        println!("(empty)");
        return;
    }
    for (index, task) in store.iter().enumerate() {
        let mark = if task.done { 'x' } else { ' ' };
        println!("{index:>3} [{mark}] {}", task.text);
    }
}

#[cfg(test)]
mod tests {
    use super::{build_config, describe, run, Cli, Command, StoreCommand};
    use clap::Parser;
    use todo_core::{ListChange, StorePaths, TaskField, TodoSession};

    #[test]
    fn parses_negative_index_as_value() {
        let cli = Cli::parse_from(["todo", "remove", "-1", "--history"]);
        match cli.command {
            Command::Store(StoreCommand::Remove { index, list }) => {
                assert_eq!(index, -1);
                assert!(list.history);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_reach_config() {
        let cli = Cli::parse_from([
            "todo",
            "list",
            "--data-dir",
            "/tmp/todo",
            "--log-level",
            "warn",
        ]);
        let config = build_config(&cli);
        assert_eq!(config.log_level, "warn");
        assert!(config.store_paths().tasks.ends_with("tasks.json"));
        assert!(config.store_paths().tasks.starts_with("/tmp/todo"));
    }

    #[test]
    fn describe_names_field_by_role() {
        let text = describe(&ListChange::DataChanged {
            index: 2,
            field: TaskField::Done,
        });
        assert_eq!(text, "row 2 done changed");
    }

    #[test]
    fn ping_parses_apart_from_store_commands() {
        let cli = Cli::parse_from(["todo", "ping"]);
        assert!(matches!(cli.command, Command::Ping));
    }

    #[test]
    fn store_command_mutates_session() {
        let dir = std::env::temp_dir().join(format!("todo-cli-run-{}", std::process::id()));
        let mut session = TodoSession::new(StorePaths::in_dir(&dir));
        let cli = Cli::parse_from(["todo", "add", "water plants", "--done"]);
        let Command::Store(command) = cli.command else {
            panic!("add should be a store command");
        };

        run(&mut session, command);

        let task = session.tasks().get(0).unwrap();
        assert_eq!(task.text, "water plants");
        assert!(task.done);
    }
}
