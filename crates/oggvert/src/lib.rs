//! A tool to batch convert ogg files to mp3.
//!
//! Every `.ogg` file in the input directory is handed to `ffmpeg`, one at a
//! time, and encoded to mp3 at `192kbps` using `libmp3lame`. The converted
//! file is written next to its source unless an output directory is given
//! with `-o`.
//!
//! A failed conversion is reported and the batch continues with the next
//! file.
//!
//! <br>
//!
//! ## Usage
//!
//! Convert all ogg files in `music`, including subdirectories, writing the
//! results to `converted`:
//!
//! ```sh
//! oggvert -i music -r -o converted
//! ```
//!
//! Logging is controlled with `-l`, where `0` (the default) only shows
//! errors and `3` shows everything including the parsed configuration:
//!
//! ```sh
//! oggvert -i music -l 3
//! ```

pub mod cli;
mod command;
mod config;
mod enumerate;
mod executor;
mod format;
mod level;
mod out;

pub use self::command::CommandSpec;
pub use self::config::ValidationError;
pub use self::executor::{ProcessRunner, Runner, Summary};
pub use self::level::LogLevel;
