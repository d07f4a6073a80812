use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use polars::io::parquet::write::{ParquetCompression, ParquetWriter};
use scotviz_core::config::PipelineConfig;
use scotviz_core::pipeline::build_dashboard;
use scotviz_core::player::Player;
use scotviz_core::profiles;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Build the tidy motion-chart table from a deprivation indicator extract",
    long_about = None
)]
struct Cli {
    /// Path to the raw indicator CSV
    input: PathBuf,

    /// Built-in dashboard profile: outcomes | health
    #[arg(long, default_value = "outcomes")]
    profile: String,

    /// TOML pipeline configuration overriding the built-in profiles
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the tidy table to this Parquet file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let loaded;
    let config: &PipelineConfig = match &cli.config {
        Some(path) => {
            loaded = PipelineConfig::from_toml_path(path)
                .with_context(|| format!("failed to load pipeline config {}", path.display()))?;
            &loaded
        }
        None => match profiles::by_name(&cli.profile) {
            Some(profile) => profile,
            None => bail!(
                "unknown profile '{}'; expected 'outcomes' or 'health'",
                cli.profile
            ),
        },
    };

    let (mut tidy, schema) = build_dashboard(&cli.input, config)
        .with_context(|| format!("pipeline failed for {}", cli.input.display()))?;

    let player = Player::from_schema(&schema);
    info!(
        rows = tidy.height(),
        start = player.bounds().0,
        end = player.bounds().1,
        tick_ms = player.tick_interval_ms(),
        "tidy table ready"
    );

    println!("{}", serde_json::to_string_pretty(&schema)?);

    if let Some(path) = &cli.output {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        ParquetWriter::new(file)
            .with_compression(ParquetCompression::Zstd(None))
            .finish(&mut tidy)
            .context("failed to write tidy parquet")?;
        info!(path = %path.display(), "wrote tidy table");
    }

    Ok(())
}
