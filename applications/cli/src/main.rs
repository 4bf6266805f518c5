/// SoulWave - wellness sessions from the command line
use clap::{Parser, Subcommand};
use soulwave_cli::{
    config::AppConfig,
    output,
    simulate::{self, SimulationOptions},
};
use soulwave_core::{catalog, Category};
use soulwave_recommend::{GeminiRecommender, MoodRecommender};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soulwave")]
#[command(about = "SoulWave wellness sessions", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SOULWAVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the session catalog
    Tracks {
        /// Only show one category (Sleep, Meditation, Focus, Healing, Nature, Quran)
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// Ask the mood matcher for sessions
    Recommend {
        /// How you are feeling
        #[arg(required = true)]
        mood: Vec<String>,
    },
    /// Play a track against simulated media
    Play {
        /// Catalog track ID
        track_id: String,
        /// Simulated seconds to run
        #[arg(long, default_value_t = 30.0)]
        seconds: f64,
        /// Seconds advanced per frame
        #[arg(long, default_value_t = 5.0)]
        step: f64,
        /// Seek to this fraction (0-1) before starting
        #[arg(long)]
        seek: Option<f64>,
        /// Refuse play requests, like a blocked autoplay
        #[arg(long)]
        block_autoplay: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Tracks { category } => list_tracks(category.as_deref())?,
        Commands::Recommend { mood } => recommend(&config, &mood.join(" ")).await?,
        Commands::Play {
            track_id,
            seconds,
            step,
            seek,
            block_autoplay,
            json,
        } => {
            let options = SimulationOptions {
                seconds,
                step,
                seek,
                block_autoplay,
            };
            play(&track_id, &options, json)?;
        }
    }

    Ok(())
}

fn list_tracks(category: Option<&str>) -> anyhow::Result<()> {
    let category = category.map(str::parse::<Category>).transpose()?;
    for track in catalog::by_category(category) {
        println!("{}", output::track_line(track));
    }
    Ok(())
}

async fn recommend(config: &AppConfig, mood: &str) -> anyhow::Result<()> {
    let recommender = GeminiRecommender::new(config.recommend_config())?;
    if !recommender.has_api_key() {
        tracing::warn!("No API key configured (set SOULWAVE__RECOMMEND__API_KEY or API_KEY)");
    }

    let recommendations = recommender.recommend(mood).await;
    if recommendations.is_empty() {
        println!("No recommendations right now.");
    }
    for rec in &recommendations {
        println!("{}", output::recommendation_line(rec));
    }
    Ok(())
}

fn play(track_id: &str, options: &SimulationOptions, json: bool) -> anyhow::Result<()> {
    let track = catalog::get(track_id)?.clone();
    let report = simulate::run(track, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for event in &report.events {
        println!("  {}", output::event_line(event));
    }
    for frame in &report.frames {
        println!("{}", output::frame_line(frame.at_seconds, &frame.view));
    }
    if report.finished {
        println!("Session complete.");
    }
    if let Some(stats) = report.stats {
        println!(
            "Sessions completed: {}, minutes listened: {}",
            stats.sessions_completed, stats.total_minutes
        );
    }
    Ok(())
}
