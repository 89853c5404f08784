use std::{
    io::Write,
    sync::{OnceLock, Mutex, MutexGuard, PoisonError},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::*;

pub mod fmt;

use fmt::{LogSpec, SegmentSpec};

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl Level {

    pub const ALL: [Level; 5] = [Self::Error, Self::Warn, Self::Info, Self::Debug, Self::Trace];

    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warn => Color::Yellow,
            Self::Info => Color::Green,
            Self::Debug => Color::Blue,
            Self::Trace => Color::Cyan,
        }
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.name()))
            .ok_or(())
    }
}

/// Per-target maximum levels in `RUST_LOG` syntax.
///
/// A filter string is a comma separated list of `level` or `target=level` items.
/// A bare level sets the base level; a target applies to itself and every
/// `target::child`. Unknown levels are ignored.
#[derive(Clone, Debug)]
pub struct Filters {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filters {

    pub fn parse(spec: &str) -> Self {
        let mut filters = Self::default();
        for arg in spec.split(',') {
            let (target, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match target {
                Some(target) => {
                    let entry = filters.target_levels
                        .entry(CompactString::new(target))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                None => filters.base_level = level,
            }
        }
        filters
    }

    pub fn from_env() -> Self {
        std::env::var("RUST_LOG")
            .map(|env| Self::parse(&env))
            .unwrap_or_default()
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    #[inline(always)]
    pub fn set_base_level(&mut self, level: Level) {
        self.base_level = level;
    }

    pub fn set_target_level(&mut self, target: &str, level: Level) {
        self.target_levels.insert(CompactString::new(target), level);
    }

    /// Level of the closest configured ancestor of `target`, or the base level.
    pub fn level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.level(target)
    }
}

struct Logger {
    stderr: StandardStream,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    filters: Filters,
}

impl Logger {

    fn new() -> Self {
        Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            error_fmt: default_fmt(Level::Error),
            warn_fmt: default_fmt(Level::Warn),
            info_fmt: default_fmt(Level::Info),
            debug_fmt: default_fmt(Level::Debug),
            trace_fmt: default_fmt(Level::Trace),
            filters: Filters::from_env(),
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filters.enabled(target, level) {
            return Ok(false)
        }
        let fmt = match level {
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        for segment in fmt {
            match segment {
                SegmentSpec::Message(spec) => write_segment(&mut self.stderr, spec, &msg)?,
                SegmentSpec::Target(spec) => write_segment(&mut self.stderr, spec, &target)?,
                SegmentSpec::Text(text, spec) => write_segment(&mut self.stderr, spec, text)?,
            }
        }
        self.stderr.write_all(b"\n")?;
        Ok(true)
    }
}

fn write_segment(
    stderr: &mut StandardStream,
    spec: &LogSpec,
    text: &dyn core::fmt::Display,
) -> Result<()>
{
    if let Some(color_spec) = &spec.color_spec {
        stderr.set_color(color_spec)?;
        write!(stderr, "{}", text)?;
        stderr.reset()?;
    } else {
        write!(stderr, "{}", text)?;
    }
    Ok(())
}

fn default_fmt(level: Level) -> LogFmt {
    let mut fmt = LogFmt::default();
    LogFmtBuilder::new(&mut fmt)
        .text("[", |spec| spec)
        .text(level.name(), |spec| spec.with_color_spec(|color| {
            color.set_fg(Some(level.color())).set_bold(true);
        }))
        .text(" ", |spec| spec)
        .target(|spec| spec.with_color_spec(|color| {
            color.set_dimmed(true);
        }))
        .text("] ", |spec| spec)
        .message(|spec| spec);
    fmt
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

#[inline(always)]
fn logger() -> MutexGuard<'static, Logger> {
    LOGGER
        .get_or_init(|| Mutex::new(Logger::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Reads `RUST_LOG` and sets up the default formats. Logging initializes lazily, so
/// calling this is only needed to pay the setup cost up front.
pub fn init() {
    drop(logger());
}

pub fn set_level(level: Level) {
    logger().filters.set_base_level(level);
}

pub fn set_target_level(target: &str, level: Level) {
    logger().filters.set_target_level(target, level);
}

pub fn enabled(target: &str, level: Level) -> bool {
    logger().filters.enabled(target, level)
}

macro_rules! level_fmt_fns {
    ($($level:ident),+ $(,)?) => {
        paste::paste! {
            $(
                #[inline(always)]
                pub fn [<$level _fmt>](mut f: impl FnMut(&mut LogFmtBuilder)) {
                    let mut logger = logger();
                    let mut builder = LogFmtBuilder::new(&mut logger.[<$level _fmt>]);
                    f(&mut builder);
                }
            )+
        }
    };
}

level_fmt_fns!(error, warn, info, debug, trace);

#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    logger().log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
