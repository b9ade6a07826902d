use std::io;

use anyhow::Result;

use crate::command::CommandSpec;
use crate::config::Config;
use crate::enumerate::enumerate;
use crate::format::Format;
use crate::out::{Out, blank, error, info, warn};

/// Something capable of running a conversion command.
pub trait Runner {
    /// Run the command to completion, returning whether it succeeded.
    fn run(&mut self, spec: &CommandSpec) -> io::Result<bool>;
}

/// Runs commands as child processes, waiting for each to exit.
#[derive(Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    #[inline]
    fn run(&mut self, spec: &CommandSpec) -> io::Result<bool> {
        Ok(spec.to_command().status()?.success())
    }
}

/// Counts from a completed batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of files a conversion was attempted for.
    pub attempted: usize,
    /// Number of conversions which failed.
    pub failed: usize,
}

/// Convert every source file found according to `config`.
///
/// Files are converted one at a time. A failing conversion or an unreadable
/// directory entry is reported and the batch carries on.
pub(crate) fn execute(
    o: &mut Out<'_>,
    config: &Config,
    runner: &mut dyn Runner,
) -> Result<Summary> {
    let listing = enumerate(&config.input_dir, config.recursive);

    for e in &listing.errors {
        warn!(o, "skipping unreadable entry: {e}");
    }

    let files = listing.files;

    if files.is_empty() {
        warn!(
            o,
            "no {} files found in {}",
            Format::SOURCE,
            config.input_dir.display()
        );
    }

    let mut summary = Summary::default();
    let total = files.len();

    for (index, file) in files.iter().enumerate() {
        let spec = CommandSpec::build(&config.ffmpeg, file, &config.output_dir);

        info!(
            o,
            "#{}/#{total}: converting {} to {}",
            index + 1,
            Format::SOURCE,
            Format::TARGET
        );

        blank!(o, "{spec}");
        let mut o = o.indent(1);

        summary.attempted += 1;

        match runner.run(&spec) {
            Ok(true) => {}
            Ok(false) => {
                summary.failed += 1;
                error!(o, "conversion command error, inspect ffmpeg output");
            }
            Err(e) => {
                summary.failed += 1;
                error!(o, "conversion command error, inspect ffmpeg output: {e}");
            }
        }
    }

    info!(
        o,
        "converted {} of {} file(s)",
        summary.attempted - summary.failed,
        summary.attempted
    );

    Ok(summary)
}
