// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use minify_files::{bootstrap, cli, logging};

fn main() -> ExitCode {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => return cli::handle_parse_error(&err),
    };

    logging::init(args.verbose);
    bootstrap::run(&args)
}
