// src/bootstrap.rs
use std::process::ExitCode;

use anyhow::Result;
use minify_files_domain::{BatchReport, ReportFormat};
use minify_files_infra::StdFileSystem;
use minify_files_usecase::MinifyFolder;
use tracing::debug;

use crate::{
    cli::Args,
    presentation::{self, ConsoleReporter},
};

/// Run the batch and map its result to a process exit code.
pub fn run(args: &Args) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Fatal faults (output folder creation, report rendering) come back as `Err`.
/// Reported batch failures print their message and yield a failing exit code.
pub fn execute(args: &Args) -> Result<ExitCode> {
    let config = args.to_config();
    debug!(?config, format = %args.format, count = %args.count, "starting minify_files v{}", crate::VERSION);

    let fs = StdFileSystem::new();
    let reporter = ConsoleReporter::new(args.count);
    let mut usecase = MinifyFolder::new(config, &fs)?;
    if args.format == ReportFormat::Text {
        usecase = usecase.with_sink(&reporter);
    }

    let report = match usecase.run() {
        Ok(report) => report,
        Err(err) => {
            let Some(app) = err.as_application() else {
                return Err(err.into());
            };
            println!("{}", presentation::batch_error_line(app));
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.format == ReportFormat::Json {
        let json = presentation::render_json(usecase.config(), &report, args.count)?;
        println!("{json}");
    }

    Ok(exit_code(&report, args.strict))
}

fn exit_code(report: &BatchReport, strict: bool) -> ExitCode {
    if strict && !report.is_clean() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
