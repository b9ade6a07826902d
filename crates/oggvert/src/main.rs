//! A tool to batch convert ogg files to mp3.
//!
//! See the `oggvert` library documentation for more information.

use std::process::ExitCode;

use anyhow::Result;

fn main() -> Result<ExitCode> {
    let opts = match oggvert::cli::parse(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };

    oggvert::cli::entry(&opts)
}
