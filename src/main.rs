use anyhow::Result;
use clap::Parser;
use playlist_exporter::export::{MacVolumeRewrite, NoRewrite};
use playlist_exporter::{CollisionPolicy, ExportConfig, ExportPipeline};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "playlist-exporter")]
#[command(about = "Export iTunes/Music playlists to tab-separated text files", long_about = None)]
struct Args {
    /// Path to the library file (Library.xml)
    #[arg(short = 'l', long, default_value = "Library.xml")]
    library: String,

    /// Output directory for playlist files
    #[arg(short = 'o', long, default_value = "playlists")]
    output: PathBuf,

    /// Don't prefix /Users/ paths with the macOS volume name
    #[arg(long)]
    no_volume_prefix: bool,

    /// Number duplicate filenames instead of overwriting
    #[arg(long)]
    number_duplicates: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the library path
    let library_path = shellexpand::tilde(&args.library);

    log::info!("Loading library file from: {}", library_path);
    let library = playlist_exporter::itunes::load_library(Path::new(library_path.as_ref()))?;

    let mut config = ExportConfig::new(args.output.clone());
    if args.number_duplicates {
        config = config.with_collision_policy(CollisionPolicy::NumberSuffix);
    }

    let written = if args.no_volume_prefix {
        ExportPipeline::new(config, NoRewrite::new()).export(&library)?
    } else {
        ExportPipeline::new(config, MacVolumeRewrite::new()).export(&library)?
    };

    log::info!(
        "Extraction complete. Exported {} playlists to {:?}",
        written,
        args.output
    );

    Ok(())
}
