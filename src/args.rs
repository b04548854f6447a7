use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linescore-scout")]
#[command(about = "Find MLB games with 7+ runs through five innings and under 9 total")]
pub struct Args {
    /// Season year to analyze (defaults to the previous season)
    #[arg(long)]
    pub season: Option<i32>,

    /// Fetch live data from the MLB Stats API instead of sample data
    #[arg(long)]
    pub live: bool,

    /// Schedule days to sample when fetching live data
    #[arg(long, default_value_t = 30)]
    pub max_days: u32,

    /// Directory for CSV exports
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,

    /// Run a one-shot analysis and print the summary instead of the dashboard
    #[arg(long)]
    pub headless: bool,
}
