//! Command-line surface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use facultad_types::{Claustro, VoteKind};

/// Facultad electoral census and registry
#[derive(Parser, Debug)]
#[command(name = "facultad")]
#[command(about = "Electoral census and voting rules of a facultad", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FACULTAD_CONFIG")]
    pub config: Option<String>,

    /// SQLite database URL (overrides the configured storage)
    #[arg(short, long, env = "FACULTAD_DATABASE_URL")]
    pub database: Option<String>,

    /// Log level
    #[arg(long, env = "FACULTAD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "FACULTAD_LOG_JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and apply the schema
    Init,

    /// Register a person in the census
    Register {
        #[arg(value_enum)]
        claustro: ClaustroArg,
        #[arg(long)]
        dni: i64,
        #[arg(long)]
        name: String,
    },

    /// Political groupings
    Grouping {
        #[command(subcommand)]
        command: GroupingCommand,
    },

    /// Council seats
    Seat {
        #[command(subcommand)]
        command: SeatCommand,
    },

    /// Register a dean candidate (faculty only)
    Dean(TenureArgs),

    /// Register a rector candidate (faculty only)
    Rector(TenureArgs),

    /// Record a vote between office holders
    Vote {
        #[arg(value_enum)]
        kind: VoteArg,
        #[arg(long)]
        elector_dni: i64,
        #[arg(long)]
        elector_period: i64,
        #[arg(long)]
        target_dni: i64,
        #[arg(long)]
        target_period: i64,
    },

    /// Read back stored facts
    Show {
        #[command(subcommand)]
        command: ShowCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroupingCommand {
    /// Create a grouping and print its id
    Create {
        #[arg(long)]
        name: String,
    },
    /// Record the votes a grouping received in a period
    Votes {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        period: i64,
        #[arg(long)]
        votes: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum SeatCommand {
    /// Directive council seat under a grouping
    Directive {
        #[command(flatten)]
        tenure: TenureArgs,
        #[arg(long)]
        grouping: i64,
    },
    /// Higher council seat
    Superior(TenureArgs),
}

#[derive(Subcommand, Debug)]
pub enum ShowCommand {
    /// Census entry of a person
    Person {
        #[arg(long)]
        dni: i64,
    },
    /// A grouping, and its votes when a period is given
    Grouping {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        period: Option<i64>,
    },
    /// Known electoral periods
    Periods,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct TenureArgs {
    #[arg(long)]
    pub dni: i64,
    #[arg(long)]
    pub period: i64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaustroArg {
    Student,
    Graduate,
    Faculty,
}

impl From<ClaustroArg> for Claustro {
    fn from(arg: ClaustroArg) -> Self {
        match arg {
            ClaustroArg::Student => Claustro::Estudiantes,
            ClaustroArg::Graduate => Claustro::Graduados,
            ClaustroArg::Faculty => Claustro::Profesores,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteArg {
    DirectiveToDean,
    DirectiveToSuperior,
    DirectiveToRector,
    SuperiorToRector,
    DeanToRector,
}

impl From<VoteArg> for VoteKind {
    fn from(arg: VoteArg) -> Self {
        match arg {
            VoteArg::DirectiveToDean => VoteKind::DirectiveToDean,
            VoteArg::DirectiveToSuperior => VoteKind::DirectiveToSuperior,
            VoteArg::DirectiveToRector => VoteKind::DirectiveToRector,
            VoteArg::SuperiorToRector => VoteKind::SuperiorToRector,
            VoteArg::DeanToRector => VoteKind::DeanToRector,
        }
    }
}
