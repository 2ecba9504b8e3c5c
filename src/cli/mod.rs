pub mod dashboard;
pub mod habits;
pub mod insights;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dashboard::process_list_command;
use habits::{
    process_add_command, process_remove_command, process_toggle_command, ToggleCommand,
};
use insights::{process_week_command, process_year_command};
use tracing::level_filters::LevelFilter;

use crate::{
    store::{habit_store::HabitStore, snapshot_storage::SnapshotStorageImpl},
    utils::{
        clock::{Clock, DefaultClock},
        dir::create_application_default_path,
        logging::enable_logging,
    },
};

#[derive(Parser, Debug)]
#[command(name = "Habitual", version, long_about = None)]
#[command(about = "Terminal tracker for daily habits", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Add a new habit")]
    Add {
        #[arg(required = true, help = "Name of the habit")]
        name: Vec<String>,
    },
    #[command(about = "Toggle completion of a habit for a day")]
    Toggle {
        #[command(flatten)]
        command: ToggleCommand,
    },
    #[command(about = "Remove a habit")]
    Remove {
        #[arg(help = "Habit id or name")]
        habit: String,
    },
    #[command(about = "Display today's dashboard with all habits")]
    List,
    #[command(about = "Display completion for the current week")]
    Week,
    #[command(about = "Display an activity heatmap for the last year")]
    Year,
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = match args.dir {
        Some(v) => v,
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&app_dir, logging_level, args.log)?;

    let storage = SnapshotStorageImpl::new(app_dir)?;
    let mut store = HabitStore::init(storage).await;
    let now = DefaultClock.time();

    match args.commands {
        Commands::Add { name } => process_add_command(&mut store, &name.join(" ")).await,
        Commands::Toggle { command } => process_toggle_command(&mut store, command, now).await,
        Commands::Remove { habit } => process_remove_command(&mut store, &habit).await,
        Commands::List => process_list_command(store.habits(), now),
        Commands::Week => process_week_command(store.habits(), now),
        Commands::Year => process_year_command(store.habits(), now),
    }
}
