// src/cli.rs
use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, error::ErrorKind};
use minify_files_domain::{CountPolicy, MinifyConfig, ReportFormat};

const USAGE: &str = "Usage: minify_files <input_folder> [<output_folder>]";
const OVERWRITE_NOTE: &str = "If output_folder is not specified, files will be overwritten in place.";

#[derive(Parser, Debug)]
#[command(
    name = "minify_files",
    version = crate::VERSION,
    about = "Strip non-printable characters from every file in a folder",
    long_about = "Strip non-printable characters from every file in a folder.\n\n\
                  Only printable ASCII (0x20-0x7E), carriage return and line feed are kept. \
                  Tabs and all other control or non-ASCII characters are deleted.",
    after_help = "Only the top-level files of INPUT_FOLDER are processed; subdirectories are not entered.\n\
                  If OUTPUT_FOLDER is not specified, files will be overwritten in place (no backup is made)."
)]
pub struct Args {
    /// Folder whose top-level files are minified
    pub input_folder: PathBuf,

    /// Folder to write results to, created if missing
    pub output_folder: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(long, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Number reported in the summary line (succeeded, attempted)
    #[arg(long, default_value_t = CountPolicy::Succeeded)]
    pub count: CountPolicy,

    /// Exit with status 1 if any single file failed
    #[arg(long)]
    pub strict: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> MinifyConfig {
        MinifyConfig::new(&self.input_folder, self.output_folder.clone())
    }
}

/// Help and version exit 0; any other parse failure prints usage and exits 1.
pub fn handle_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{USAGE}");
            println!("{OVERWRITE_NOTE}");
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}
