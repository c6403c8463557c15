use crate::config::{Config, DEFAULT_APP_NAME, DEFAULT_MANIFEST_PATH};
use crate::favicon::FaviconGenerator;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate PNG favicons in several sizes plus a web manifest describing them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source image (any format the decoder recognizes)
    source: PathBuf,
    /// Value of the manifest's "name" field
    #[arg(default_value = DEFAULT_APP_NAME)]
    app_name: String,
    /// Where to write the JSON manifest
    #[arg(default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,
    #[arg(short, long, default_value = ".", help = "Directory for the favicon PNGs")]
    out_dir: PathBuf,
}

impl Cli {
    pub fn run(self) -> ExitCode {
        let source = self.source.clone();
        let result = FaviconGenerator::new(self.into()).generate(&source);
        match result {
            Ok(_) => {
                println!("All done.");
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("Error: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            app_name: cli.app_name,
            manifest_path: cli.manifest,
            out_dir: cli.out_dir,
        }
    }
}
