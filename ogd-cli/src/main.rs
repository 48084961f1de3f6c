//! Olympic dashboard CLI - per-country participation statistics and charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ogd-cli",
    version,
    about = "Olympic participation statistics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ogd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ogd_cmd::run(cli.command).await
}
