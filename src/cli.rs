use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "binmetrics")]
#[command(about = "Measure compiled SDK binaries and upload size metrics", long_about = None)]
pub struct Cli {
    /// Directory artifact paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Bucket holding the aggregate metrics objects
    #[arg(long, env = "BINMETRICS_BUCKET", default_value = "mapbox-loading-dock")]
    pub bucket: String,

    /// Key prefix of the aggregate metrics objects
    #[arg(
        long,
        env = "BINMETRICS_PREFIX",
        default_value = "raw/nadia_staging_test_v4"
    )]
    pub prefix: String,

    /// Build identifier grouping all platforms of one CI build
    #[arg(long, env = "CIRCLE_SHA1", value_name = "ID")]
    pub build_id: String,

    /// Product line stamped into every record
    #[arg(long, default_value = "maps")]
    pub sdk: String,

    /// Region of the metrics bucket
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Write to a local directory instead of S3 (debugging aid)
    #[arg(long, value_name = "DIR")]
    pub local_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub platform: PlatformCommand,
}

#[derive(Subcommand, Debug)]
pub enum PlatformCommand {
    /// Measure the Android release binaries
    Android,
    /// Measure the iOS release binaries
    Ios,
}
