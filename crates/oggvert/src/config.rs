use core::error::Error;
use core::fmt;

use std::path::PathBuf;

use crate::level::LogLevel;

/// Reasons a configuration is rejected before anything is converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No input directory was given.
    EmptyInput,
    /// The input directory does not exist.
    MissingInput(PathBuf),
    /// The output directory does not exist.
    MissingOutput(PathBuf),
}

impl fmt::Display for ValidationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input directory empty, check -i"),
            Self::MissingInput(path) => {
                write!(f, "directory does not exist, check -i: {}", path.display())
            }
            Self::MissingOutput(path) => {
                write!(f, "directory does not exist, check -o: {}", path.display())
            }
        }
    }
}

impl Error for ValidationError {}

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Directory to search for source files.
    pub(crate) input_dir: PathBuf,
    /// Directory to write converted files to, empty means next to the
    /// source file.
    pub(crate) output_dir: PathBuf,
    pub(crate) recursive: bool,
    pub(crate) log_level: LogLevel,
    /// The transcoder to invoke.
    pub(crate) ffmpeg: PathBuf,
}

impl Config {
    /// Check preconditions, stopping at the first failure.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        if !self.input_dir.exists() {
            return Err(ValidationError::MissingInput(self.input_dir.clone()));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Ok(());
        }

        if !self.output_dir.exists() {
            return Err(ValidationError::MissingOutput(self.output_dir.clone()));
        }

        Ok(())
    }
}
