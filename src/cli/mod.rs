//! Command-line interface for crew
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use clap::{Parser, Subcommand};

use crate::app::App;
use crate::config::{self, Config};
use crate::error::Result;
use crate::output::OutputOptions;
use crate::storage::FileStore;

mod add;
mod assign;
mod board;
mod clear;
mod done;
mod reset;
mod status;

/// crew - a shared to-do board for small teams
///
/// Add teammates, assign them dated tasks, mark tasks complete, clear the
/// completed ones, and reset the board. State persists between runs.
#[derive(Parser, Debug)]
#[command(name = "crew")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory for the persisted board (defaults to the platform
    /// data dir)
    #[arg(long, global = true, env = "CREW_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a teammate to the roster
    Add {
        /// Teammate name
        name: String,
    },

    /// Assign a dated task to a teammate
    Assign {
        /// Teammate the task belongs to
        teammate: String,

        /// Task text
        text: String,

        /// Due date (YYYY-MM-DD, today or later)
        #[arg(long)]
        due: String,
    },

    /// Toggle a task's completion flag
    Done {
        /// Teammate the task belongs to
        teammate: String,

        /// Task position within the teammate's list (1-based, as shown by
        /// status)
        index: usize,
    },

    /// Remove all completed tasks and prune empty groups
    Clear,

    /// Wipe the roster and the board back to the empty state
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the board
    Status,

    /// Open the interactive board
    Board,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let data_dir = config::resolve_data_dir(self.data_dir)?;
        let settings = Config::load_from_dir(&data_dir);
        let store = FileStore::new(data_dir);
        let mut app = App::load(store)?;

        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Add { name } => add::run(&mut app, &name, options),
            Commands::Assign {
                teammate,
                text,
                due,
            } => assign::run(&mut app, &teammate, &text, &due, options),
            Commands::Done { teammate, index } => done::run(&mut app, &teammate, index, options),
            Commands::Clear => clear::run(&mut app, options),
            Commands::Reset { yes } => reset::run(&mut app, yes, options),
            Commands::Status => status::run(&app, &settings, options),
            Commands::Board => board::run(app, settings),
        }
    }
}
