//! AGM CLI - Command line tool for querying and aggregating plot data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "agm-cli",
    version,
    about = "Agricultural plot monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: agm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    agm_cmd::run(cli.command).await
}
