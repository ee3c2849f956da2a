use std::path::PathBuf;

use anyhow::Context;
use backup::{build_backup_archive, read_backup_archive, DownloadSink, FileDownloadSink, BACKUP_FILE_NAME};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Package a saved trip state JSON file into `trip_explorer_backup.zip`.
#[derive(Debug, Parser)]
#[command(name = "backup", version)]
struct Args {
    /// JSON state file, or `-` for stdin
    #[arg(short, long)]
    input: String,

    /// Directory the archive is saved into (defaults to `backup.output_dir`)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Re-open the written archive and check it matches the input
    #[arg(long)]
    verify: bool,
}

async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("cannot read {input}"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let args = Args::parse();
    let cfg = configs::AppConfig::load_and_validate()?;
    let dir = args.output_dir.unwrap_or_else(|| PathBuf::from(&cfg.backup.output_dir));

    let raw = read_input(&args.input).await?;
    let state: serde_json::Value =
        serde_json::from_str(&raw).context("input is not valid JSON")?;

    // drive the sink directly so save failures reach the exit code
    let blob = build_backup_archive(&state).await?;
    let sink = FileDownloadSink::new(dir);
    sink.save_as(BACKUP_FILE_NAME, blob).await?;
    let path = sink.target_path(BACKUP_FILE_NAME);
    info!(path = %path.display(), "backup archive written");

    if args.verify {
        let restored = read_backup_archive(&tokio::fs::read(&path).await?)?;
        anyhow::ensure!(restored == state, "archive content does not match input");
        info!("backup verified");
    }

    println!("{}", path.display());
    Ok(())
}
