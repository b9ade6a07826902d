use core::fmt;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::format::Format;

/// A single prepared invocation of the transcoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<OsString>,
    output: PathBuf,
}

impl CommandSpec {
    /// Build the conversion command for `input`.
    ///
    /// The converted file is placed next to the input, unless `output_dir` is
    /// non-empty in which case it is placed there.
    ///
    /// The invocation has the shape:
    ///
    /// ```text
    /// <program> -i <input> -acodec libmp3lame -ab 192k <output>
    /// ```
    pub fn build(program: &Path, input: &Path, output_dir: &Path) -> Self {
        let output = output_path(input, output_dir);

        let args = vec![
            OsString::from("-i"),
            input.as_os_str().to_owned(),
            OsString::from("-acodec"),
            OsString::from(Format::TARGET_CODEC),
            OsString::from("-ab"),
            OsString::from(format!("{}k", Format::TARGET_BITRATE)),
            output.as_os_str().to_owned(),
        ];

        Self {
            program: program.to_owned(),
            args,
            output,
        }
    }

    /// The program to invoke.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The file the transcoder is asked to produce.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Construct a process command to run.
    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(self.program.as_os_str()))?;

        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }

        Ok(())
    }
}

/// Derive the path of the converted file.
///
/// Only the trailing extension is replaced, so `ogg` appearing elsewhere in
/// the file name is left alone.
pub(crate) fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut path = if output_dir.as_os_str().is_empty() {
        input.to_owned()
    } else {
        match input.file_name() {
            Some(name) => output_dir.join(name),
            None => output_dir.join(input),
        }
    };

    path.set_extension(Format::TARGET.ext());
    path
}

/// Quote an argument so that it can be pasted into a POSIX shell.
fn quote(s: &OsStr) -> Cow<'_, str> {
    let Some(s) = s.to_str() else {
        return s.to_string_lossy();
    };

    if !s.is_empty() && s.chars().all(is_plain) {
        return Cow::Borrowed(s);
    }

    let mut o = String::with_capacity(s.len() + 2);
    o.push('\'');

    for c in s.chars() {
        if c == '\'' {
            o.push_str("'\\''");
        } else {
            o.push(c);
        }
    }

    o.push('\'');
    Cow::Owned(o)
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '-' | '_' | '+' | ',' | ':' | '=' | '@')
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::Path;

    use super::{CommandSpec, output_path, quote};

    #[test]
    fn output_next_to_input() {
        let spec = CommandSpec::build(
            Path::new("ffmpeg"),
            Path::new("music/track.ogg"),
            Path::new(""),
        );
        assert_eq!(spec.output(), Path::new("music/track.mp3"));
    }

    #[test]
    fn output_in_output_dir() {
        let spec = CommandSpec::build(
            Path::new("ffmpeg"),
            Path::new("music/track.ogg"),
            Path::new("out"),
        );
        assert_eq!(spec.output(), Path::new("out/track.mp3"));
    }

    #[test]
    fn output_dir_with_trailing_separator() {
        assert_eq!(
            output_path(Path::new("music/track.ogg"), Path::new("out/")),
            Path::new("out/track.mp3")
        );
    }

    #[test]
    fn only_extension_is_replaced() {
        assert_eq!(
            output_path(Path::new("ogg/logger.ogg"), Path::new("")),
            Path::new("ogg/logger.mp3")
        );
    }

    #[test]
    fn invocation_shape() {
        let spec = CommandSpec::build(
            Path::new("ffmpeg"),
            Path::new("music/track.ogg"),
            Path::new(""),
        );

        let args = spec
            .args()
            .iter()
            .map(|a| a.to_str().unwrap_or_default())
            .collect::<Vec<_>>();

        assert_eq!(spec.program(), Path::new("ffmpeg"));
        assert_eq!(
            args,
            [
                "-i",
                "music/track.ogg",
                "-acodec",
                "libmp3lame",
                "-ab",
                "192k",
                "music/track.mp3"
            ]
        );

        let cmd = spec.to_command();
        assert_eq!(cmd.get_program(), OsStr::new("ffmpeg"));
        assert_eq!(cmd.get_args().count(), 7);
    }

    #[test]
    fn display_quotes_arguments() {
        let spec = CommandSpec::build(
            Path::new("ffmpeg"),
            Path::new("my music/it's.ogg"),
            Path::new(""),
        );

        assert_eq!(
            spec.to_string(),
            "ffmpeg -i 'my music/it'\\''s.ogg' -acodec libmp3lame -ab 192k 'my music/it'\\''s.mp3'"
        );
    }

    #[test]
    fn quote_plain() {
        assert_eq!(quote(OsStr::new("a/b.ogg")), "a/b.ogg");
        assert_eq!(quote(OsStr::new("")), "''");
    }
}
