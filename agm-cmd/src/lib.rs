//! Command implementations for the AGM CLI.
//!
//! Provides subcommands for querying the field API for plot data and for
//! bucketing the embedded climate datasets.

use clap::Subcommand;

pub mod aggregate;
pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Query the field API for per-plot measurements
    Query {
        /// Measurement end date (YYYY-MM-DD, defaults to today)
        #[arg(short = 'e', long)]
        end_date: Option<String>,

        /// Output path for the normalized plots CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Bucket an embedded climate dataset by granularity
    Aggregate {
        /// Dataset to aggregate: weather or rainfall
        #[arg(short = 'k', long)]
        kind: String,

        /// Bucketing granularity: daily, weekly, monthly, or yearly
        #[arg(short = 'g', long)]
        granularity: String,

        /// Output path for the bucketed CSV
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query { end_date, output } => query::run_query(end_date.as_deref(), &output).await,
        Command::Aggregate {
            kind,
            granularity,
            output,
        } => aggregate::run_aggregate(&kind, &granularity, &output),
    }
}
