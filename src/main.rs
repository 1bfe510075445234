use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use binmetrics::appender::MetricsAppender;
use binmetrics::artifact;
use binmetrics::cli::{Cli, PlatformCommand};
use binmetrics::measure::measure;
use binmetrics::record::Platform;
use binmetrics::store::{LocalFsStore, ObjectStore, S3Store};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let platform = match cli.platform {
        PlatformCommand::Android => Platform::Android,
        PlatformCommand::Ios => Platform::Ios,
    };

    let artifacts = artifact::artifacts_for(platform, &cli.root);
    let batch = measure(&cli.sdk, platform, &artifacts)
        .with_context(|| format!("measuring {platform} release binaries"))?;

    let store: Arc<dyn ObjectStore> = match &cli.local_dir {
        Some(dir) => Arc::new(LocalFsStore::new(dir)),
        None => Arc::new(S3Store::new(cli.bucket.clone(), cli.region.clone()).await),
    };

    let appender = MetricsAppender::new(store, cli.prefix.clone());
    appender
        .append(&cli.build_id, &batch)
        .await
        .with_context(|| {
            format!(
                "appending {platform} metrics for build {}",
                cli.build_id
            )
        })?;

    info!(%platform, build = %cli.build_id, records = batch.len(), "uploaded binary size metrics");
    Ok(())
}
