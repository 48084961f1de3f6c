//! Command implementations for the Olympic dashboard CLI.
//!
//! Each subcommand is one of the dashboard's views: the overview (country
//! list plus medals pie chart), a single country's detail, or the stats
//! summary. Charts are written as SVG files.

use clap::Subcommand;

pub mod views;

#[derive(Subcommand)]
pub enum Command {
    /// Dashboard overview: country list and the medals pie chart
    Overview {
        /// Output path for the pie chart SVG
        #[arg(short, long, default_value = "overview.svg")]
        output: String,

        /// Fetch the dataset from this URL instead of the bundled fixture
        #[arg(long)]
        url: Option<String>,
    },

    /// One country's detail: totals and the medals-by-year area chart
    Detail {
        /// Country id or name (name match is case-insensitive)
        #[arg(short, long)]
        country: String,

        /// Output path for the area chart SVG
        #[arg(short, long, default_value = "detail.svg")]
        output: String,

        /// Fetch the dataset from this URL instead of the bundled fixture
        #[arg(long)]
        url: Option<String>,
    },

    /// Global and ranked per-country statistics
    Stats {
        /// Emit JSON instead of the table
        #[arg(long)]
        json: bool,

        /// Fetch the dataset from this URL instead of the bundled fixture
        #[arg(long)]
        url: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Overview { output, url } => views::run_overview(&output, url.as_deref()).await,
        Command::Detail {
            country,
            output,
            url,
        } => views::run_detail(&country, &output, url.as_deref()).await,
        Command::Stats { json, url } => views::run_stats(json, url.as_deref()).await,
    }
}
