/// Verbosity of the output.
///
/// Ordered from least to most verbose, with [`LogLevel::Unknown`] silencing
/// every severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Unknown,
}

impl LogLevel {
    /// Translate a numerical log level code.
    ///
    /// `0` through `3` map to error, warn, info and debug. Anything else is
    /// [`LogLevel::Unknown`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Unknown,
        }
    }

    /// Translate a textual argument, as passed to `-l`.
    pub(crate) fn from_arg(arg: &str) -> Self {
        match arg.trim().parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(..) => LogLevel::Unknown,
        }
    }

    /// Test if a message of the given severity should be shown.
    pub(crate) fn admits(&self, severity: Severity) -> bool {
        let threshold = match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Unknown => return false,
        };

        severity.rank() <= threshold
    }
}

/// Severity of a single message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    #[inline]
    fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warn => 1,
            Severity::Info => 2,
            Severity::Debug => 3,
        }
    }

    #[inline]
    pub(crate) fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LogLevel, Severity};

    #[test]
    fn translate_known_codes() {
        assert_eq!(LogLevel::from_code(0), LogLevel::Error);
        assert_eq!(LogLevel::from_code(1), LogLevel::Warn);
        assert_eq!(LogLevel::from_code(2), LogLevel::Info);
        assert_eq!(LogLevel::from_code(3), LogLevel::Debug);
    }

    #[test]
    fn translate_other_codes() {
        for code in [-1, 4, 5, 42, i64::MIN, i64::MAX] {
            assert_eq!(LogLevel::from_code(code), LogLevel::Unknown, "{code}");
        }
    }

    #[test]
    fn translate_args() {
        assert_eq!(LogLevel::from_arg("2"), LogLevel::Info);
        assert_eq!(LogLevel::from_arg(" 3 "), LogLevel::Debug);
        assert_eq!(LogLevel::from_arg("x"), LogLevel::Unknown);
        assert_eq!(LogLevel::from_arg(""), LogLevel::Unknown);
    }

    #[test]
    fn thresholds() {
        assert!(LogLevel::Error.admits(Severity::Error));
        assert!(!LogLevel::Error.admits(Severity::Warn));
        assert!(LogLevel::Info.admits(Severity::Warn));
        assert!(!LogLevel::Info.admits(Severity::Debug));
        assert!(LogLevel::Debug.admits(Severity::Debug));
        assert!(!LogLevel::Unknown.admits(Severity::Error));
    }
}
