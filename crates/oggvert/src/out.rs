use core::cell::Cell;
use core::fmt;

use std::io;

use termcolor::ColorSpec;
use termcolor::WriteColor;

use crate::level::{LogLevel, Severity};

macro_rules! __log {
    ($log:ident, $o:ident $(, $($tt:tt)*)?) => {
        $( $o.$log(format_args!($($tt)*))?; )*
    };
}

pub(crate) use __log;

macro_rules! __blank { ($($tt:tt)*) => { $crate::out::__log!(blank, $($tt)*) }; }
macro_rules! __debug { ($($tt:tt)*) => { $crate::out::__log!(debug, $($tt)*) }; }
macro_rules! __info { ($($tt:tt)*) => { $crate::out::__log!(info, $($tt)*) }; }
macro_rules! __warn { ($($tt:tt)*) => { $crate::out::__log!(warn, $($tt)*) }; }
macro_rules! __error { ($($tt:tt)*) => { $crate::out::__log!(error, $($tt)*) }; }

pub(crate) use __blank as blank;
pub(crate) use __debug as debug;
pub(crate) use __error as error;
pub(crate) use __info as info;
pub(crate) use __warn as warn;

pub(crate) struct Colors {
    debug: ColorSpec,
    info: ColorSpec,
    warn: ColorSpec,
    error: ColorSpec,
}

impl Colors {
    pub(crate) fn new() -> Self {
        let mut debug = ColorSpec::new();
        debug.set_fg(Some(termcolor::Color::Blue)).set_bold(true);

        let mut info = ColorSpec::new();
        info.set_fg(Some(termcolor::Color::Green)).set_bold(true);

        let mut warn = ColorSpec::new();
        warn.set_fg(Some(termcolor::Color::Yellow)).set_bold(true);

        let mut error = ColorSpec::new();
        error.set_fg(Some(termcolor::Color::Red)).set_bold(true);

        Colors {
            debug,
            info,
            warn,
            error,
        }
    }

    fn get(&self, severity: Severity) -> &ColorSpec {
        match severity {
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
        }
    }
}

/// Leveled output handle.
///
/// Constructed once per run and handed down by reference to whatever needs
/// to report something.
pub(crate) struct Out<'a> {
    change: isize,
    level: LogLevel,
    indent: &'a Cell<usize>,
    c: &'a Colors,
    o: &'a mut dyn WriteColor,
}

impl Out<'_> {
    pub(crate) fn new<'a>(
        level: LogLevel,
        indent: &'a Cell<usize>,
        c: &'a Colors,
        o: &'a mut dyn WriteColor,
    ) -> Out<'a> {
        Out {
            change: 0,
            level,
            indent,
            c,
            o,
        }
    }
}

impl<'a> Out<'a> {
    pub(crate) fn indent(&mut self, change: isize) -> Out<'_> {
        let indent = self.indent.get().saturating_add_signed(change);
        self.indent.set(indent);

        Out {
            change,
            level: self.level,
            indent: self.indent,
            c: self.c,
            o: self.o,
        }
    }

    /// Write a line regardless of the configured level.
    pub(crate) fn blank(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        writeln!(self.o, "{m}")?;
        self.o.flush()?;
        Ok(())
    }

    pub(crate) fn debug(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.leveled(Severity::Debug, m)
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.leveled(Severity::Info, m)
    }

    pub(crate) fn warn(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.leveled(Severity::Warn, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.leveled(Severity::Error, m)
    }

    fn prefix(&mut self) -> io::Result<()> {
        let n = self.indent.get();

        for _ in 0..n {
            self.o.write_all(b"  ")?;
        }

        Ok(())
    }

    fn leveled(&mut self, severity: Severity, m: impl fmt::Display) -> io::Result<()> {
        if !self.level.admits(severity) {
            return Ok(());
        }

        self.prefix()?;
        self.o.set_color(self.c.get(severity))?;
        write!(self.o, "{}:", severity.label())?;
        self.o.reset()?;
        writeln!(self.o, " {m}")?;
        self.o.flush()?;
        Ok(())
    }
}

impl Drop for Out<'_> {
    #[inline]
    fn drop(&mut self) {
        let indent = self.indent.get().saturating_sub_signed(self.change);
        self.indent.set(indent);
    }
}
