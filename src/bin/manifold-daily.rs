use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use manifold_daily::{DocumentSink as _, FileSink, FileSinkOpts, Seed};

#[derive(Parser, Debug)]
#[command(name = "manifold-daily", version)]
struct Cli {
    /// Seed date (YYYY-MM-DD). Defaults to today's UTC date.
    #[arg(long)]
    date: Option<String>,

    /// Output SVG path.
    #[arg(long, default_value = "art.svg")]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// Print the sampled daily parameters as JSON on stderr.
    #[arg(long, default_value_t = false)]
    dump_params: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let seed = match cli.date.as_deref() {
        Some(date) => Seed::parse(date).with_context(|| format!("parse --date '{date}'"))?,
        None => Seed::today().context("derive today's seed")?,
    };
    let art = manifold_daily::generate(&seed)?;

    let params = art.params();
    tracing::info!(date = %seed, theme = art.theme().name, "generating");
    tracing::info!(
        "vitality: {:.2} rad ({:.0}°), breath: ~{:.0}s/cycle",
        params.twist_amplitude,
        params.vitality_degrees(),
        params.breath_period_secs(f64::from(manifold_daily::ANIMATION_SECS)),
    );

    if cli.dump_params {
        let json =
            serde_json::to_string_pretty(params).context("serialize daily parameters")?;
        eprintln!("{json}");
    }

    let mut sink = FileSink::new(FileSinkOpts {
        out_path: cli.out.clone(),
        overwrite: !cli.no_overwrite,
    });
    sink.write(&art)
        .with_context(|| format!("write artwork '{}'", cli.out.display()))?;

    let stats = art.stats();
    tracing::info!(
        fingerprint = %format!("{:016x}", art.fingerprint()),
        "generated {} ({:.1} KB, {} paths, {} frames, {}s cycle)",
        cli.out.display(),
        stats.bytes as f64 / 1024.0,
        stats.paths,
        stats.frames,
        stats.duration_secs,
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
