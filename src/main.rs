use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use sqlx::SqlitePool;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use linescore_scout::{
    api::StatsApi,
    args::Args,
    criteria,
    db::{
        self,
        cache::{self, DataSource},
    },
    export,
    game::GameRecord,
    sample, ui,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing()?;

    let season = args.season.unwrap_or_else(|| Utc::now().year() - 1);
    let source = if args.live {
        DataSource::Live
    } else {
        DataSource::Sample
    };

    let pool = db::create_pool().await?;
    cache::evict_expired(&pool).await?;

    if args.headless {
        run_headless(season, source, &args, &pool).await
    } else {
        tokio::task::block_in_place(|| {
            ui::run_ui(season, source, args.max_days, args.export_dir.clone(), pool)
        })
    }
}

async fn run_headless(
    season: i32,
    source: DataSource,
    args: &Args,
    pool: &SqlitePool,
) -> Result<()> {
    let games = match cache::load_games(pool, season, source).await? {
        Some(games) => {
            eprintln!("using {} cached games for {}", games.len(), season);
            games
        }
        None => {
            let (games, cacheable) =
                tokio::task::block_in_place(|| collect_games(season, source, args.max_days));
            if cacheable {
                cache::store_games(pool, season, source, &games).await?;
            }
            games
        }
    };

    let result = criteria::aggregate(&games);

    println!("Season {} ({} data)", season, source);
    println!("Total games analyzed: {}", result.total_analyzed);
    println!("Matching games:       {}", result.match_count());
    println!("Match rate:           {:.1}%", result.match_percentage());
    if result.skipped > 0 {
        println!(
            "Skipped records:      {} ({} integrity faults)",
            result.skipped, result.integrity_faults
        );
    }

    for game in &result.matching_games {
        println!(
            "{}  {}  {}-{}  (first 5: {}, total: {})",
            game.date,
            game.matchup(),
            game.away_score,
            game.home_score,
            game.first_five_runs().unwrap_or(0),
            game.total_runs()
        );
    }

    if result.match_count() > 0 {
        let path = args.export_dir.join(export::default_file_name(season));
        export::write_csv(&path, &result)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn collect_games(season: i32, source: DataSource, max_days: u32) -> (Vec<GameRecord>, bool) {
    match source {
        DataSource::Sample => (sample::sample_season(season), true),
        DataSource::Live => {
            let fetched = StatsApi::new().and_then(|api| {
                api.collect_season(season, max_days, |day, total, found| {
                    eprintln!("processing day {}/{}... ({} games found)", day, total, found);
                })
            });
            match fetched {
                Ok(games) => (games, true),
                Err(err) => {
                    eprintln!("API error: {:#}", err);
                    eprintln!("falling back to sample data...");
                    (sample::sample_season(season), false)
                }
            }
        }
    }
}

fn init_tracing() -> Result<WorkerGuard> {
    let log_dir = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?
        .join("linescore-scout");
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "linescore-scout.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
