//! CLI argument definitions for gradebook.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gradebook_core::{BestScope, Mode};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Student score form with relative letter grades", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "gradebook.toml")]
    pub config: PathBuf,

    /// Form mode (student or class), overrides the config file
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Scores the best score is taken over (subject, batch or session)
    #[arg(long)]
    pub best_scope: Option<BestScope>,

    /// Upper bound for the number of scores
    #[arg(long, value_name = "N")]
    pub max_scores: Option<usize>,

    /// Append graded records to this file
    #[arg(long, value_name = "FILE", conflicts_with = "no_log")]
    pub log: Option<PathBuf>,

    /// Do not write a grade log
    #[arg(long)]
    pub no_log: bool,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a config file for one of the form presets
    Init {
        /// Output file path
        #[arg(short, long, default_value = "gradebook.toml")]
        output: PathBuf,
        /// Preset to write
        #[arg(short, long, value_enum, default_value = "student")]
        preset: Preset,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Up to 10 scores per student, appends to student_data.txt
    Student,
    /// Up to 4 scores per student, no log
    Fixed,
    /// One score per student, graded against the class best
    Class,
}
