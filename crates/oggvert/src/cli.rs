use core::cell::Cell;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::{Config, ValidationError};
use crate::executor::{self, ProcessRunner, Runner, Summary};
use crate::level::LogLevel;
use crate::out::{Colors, Out, debug, error};

/// A tool to batch convert ogg files to mp3.
#[derive(Debug, Parser)]
#[command(version, about, max_term_width = 80)]
pub struct Oggvert {
    /// Directory to search for ogg files.
    #[arg(short = 'i', value_name = "VALUE")]
    input: Option<String>,
    /// Search the input directory recursively. An optional value like `on`
    /// is accepted and ignored.
    #[arg(
        short = 'r',
        value_name = "BOOLEAN",
        num_args = 0..=1,
        default_missing_value = "on"
    )]
    recursive: Option<String>,
    /// Log level, one of 0 (error), 1 (warn), 2 (info) or 3 (debug). Any
    /// other value silences logging [default: 0].
    #[arg(
        short = 'l',
        value_name = "VALUE",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    log_level: Option<String>,
    /// Directory to write converted files to [default: next to each input
    /// file].
    #[arg(short = 'o', value_name = "VALUE")]
    output: Option<String>,
    /// Path to ffmpeg binary to use when performing conversions.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,
}

impl Oggvert {
    /// Build the configuration for a run out of the parsed options.
    pub(crate) fn config(&self) -> Config {
        let log_level = match &self.log_level {
            Some(arg) => LogLevel::from_arg(arg),
            None => LogLevel::default(),
        };

        Config {
            input_dir: PathBuf::from(self.input.as_deref().unwrap_or_default()),
            output_dir: PathBuf::from(self.output.as_deref().unwrap_or_default()),
            recursive: self.recursive.is_some(),
            log_level,
            ffmpeg: self.ffmpeg_bin.clone(),
        }
    }
}

/// Parse options out of an argument list, where the first element is the
/// program name.
///
/// Unknown flags or malformed options are returned as an error, which when
/// passed to [`clap::Error::exit`] prints usage and terminates the process.
pub fn parse<I, T>(args: I) -> Result<Oggvert, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Oggvert::try_parse_from(args)
}

/// The result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The configuration was rejected and nothing was converted.
    Invalid(ValidationError),
    /// The batch ran to completion.
    Completed(Summary),
}

impl Outcome {
    /// Process exit code for the outcome.
    ///
    /// Failing conversions do not affect the exit code, only a rejected
    /// configuration does.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Invalid(..) => ExitCode::FAILURE,
            Outcome::Completed(..) => ExitCode::SUCCESS,
        }
    }
}

/// Entry for `oggvert`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Oggvert) -> Result<ExitCode> {
    let o = StandardStream::stdout(ColorChoice::Auto);
    let mut o = o.lock();
    let outcome = run(opts, &mut o, &mut ProcessRunner)?;
    Ok(outcome.exit_code())
}

/// Perform a run, writing output to `w` and invoking conversions through
/// `runner`.
pub fn run(opts: &Oggvert, w: &mut dyn WriteColor, runner: &mut dyn Runner) -> Result<Outcome> {
    let config = opts.config();

    let indent = Cell::new(0);
    let cols = Colors::new();
    let mut o = Out::new(config.log_level, &indent, &cols, w);

    debug!(o, "{config:?}");

    if let Err(e) = config.validate() {
        error!(o, "validation error: {e}");
        return Ok(Outcome::Invalid(e));
    }

    let summary = executor::execute(&mut o, &config, runner)?;
    Ok(Outcome::Completed(summary))
}
