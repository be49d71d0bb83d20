use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kube-namer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Normalize Kubernetes manifest filenames from kind and metadata.name")]
#[command(
    long_about = "A CLI tool that derives the canonical <name>-<shortkind>.yaml filename for a Kubernetes manifest from its kind and metadata.name fields, then reports it, renames the file to it, or validates the current filename against it. When --write and --validate are both set, --write wins."
)]
pub struct Cli {
    /// Path to the manifest file to inspect or rename
    #[arg(short, long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Rename the file to its canonical name instead of printing it
    #[arg(short, long)]
    pub write: bool,

    /// Exit non-zero when the filename is not canonical, without renaming
    #[arg(long)]
    pub validate: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
