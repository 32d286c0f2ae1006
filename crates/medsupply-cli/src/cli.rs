//! CLI argument definitions for the supply dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use medsupply_core::{CategoryFilter, StatusFilter};
use medsupply_model::SupplyId;

#[derive(Parser)]
#[command(
    name = "medsupply",
    version,
    about = "Medical Supply Management - track inventory, stock levels and suppliers",
    long_about = "Manage a medical supply inventory from the command line.\n\n\
                  Items are kept in a JSON data file; stock status is derived\n\
                  from quantity and minimum stock on every change."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Inventory data file.
    #[arg(
        long = "data",
        value_name = "PATH",
        env = "MEDSUPPLY_DATA",
        default_value = "medsupply.json",
        global = true
    )]
    pub data: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show dashboard figures and the (optionally filtered) supply table.
    List(ListArgs),

    /// Show dashboard figures only.
    Stats,

    /// Add a new supply item.
    Add(AddArgs),

    /// Edit an existing supply item. Omitted fields keep their current value.
    Edit(EditArgs),

    /// Delete a supply item.
    Delete {
        /// Id of the item to delete.
        #[arg(value_name = "ID")]
        id: SupplyId,
    },

    /// Write the built-in sample inventory to the data file.
    Seed {
        /// Replace a non-empty inventory.
        #[arg(long)]
        force: bool,
    },

    /// List the supply categories.
    Categories,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against name and supplier.
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Category to show, or "all".
    #[arg(long, short = 'c', default_value = "all")]
    pub category: CategoryFilter,

    /// "in-stock", "low-stock", or "all".
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
}

/// Raw field values. Parsed by the supply form, not by clap, so that bad
/// numbers are reported per field like any other submission.
#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    /// PPE, Injection, Wound Care, Diagnostic, Medication or Equipment.
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub supplier: String,
    #[arg(long)]
    pub quantity: String,
    #[arg(long = "min-stock")]
    pub min_stock: String,
    /// Price per unit, at most two decimals.
    #[arg(long = "unit-price")]
    pub unit_price: String,
    /// YYYY-MM-DD.
    #[arg(long = "expiry-date")]
    pub expiry_date: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Id of the item to edit.
    #[arg(value_name = "ID")]
    pub id: SupplyId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub supplier: Option<String>,
    #[arg(long)]
    pub quantity: Option<String>,
    #[arg(long = "min-stock")]
    pub min_stock: Option<String>,
    #[arg(long = "unit-price")]
    pub unit_price: Option<String>,
    #[arg(long = "expiry-date")]
    pub expiry_date: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
