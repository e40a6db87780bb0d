use parking_lot::Mutex;
/// Debug logging infrastructure for tabpane
///
/// Controlled by DEBUG_LEVEL environment variable:
/// - 0 or unset: No debugging
/// - 1: Errors only
/// - 2: Info level (tab lifecycle, tree shape changes)
/// - 3: Debug level (navigation, resize, no-op paths)
/// - 4: Trace level (every mailbox message)
///
/// All output goes to /tmp/tabpane_debug.log on Unix/macOS,
/// or %TEMP%\tabpane_debug.log on Windows, so a host TUI never sees it.
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tabpane_config::LogLevel;

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Parse a DEBUG_LEVEL value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<u8>() {
            Ok(0) => Some(DebugLevel::Off),
            Ok(1) => Some(DebugLevel::Error),
            Ok(2) => Some(DebugLevel::Info),
            Ok(3) => Some(DebugLevel::Debug),
            Ok(4) => Some(DebugLevel::Trace),
            _ => None,
        }
    }

    /// `log` filter letting through everything written at this level
    fn level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Warn,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }

    fn from_env() -> Option<Self> {
        std::env::var("DEBUG_LEVEL")
            .ok()
            .and_then(|val| Self::parse(&val))
    }
}

impl From<LogLevel> for DebugLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => DebugLevel::Off,
            LogLevel::Error | LogLevel::Warn => DebugLevel::Error,
            LogLevel::Info => DebugLevel::Info,
            LogLevel::Debug => DebugLevel::Debug,
            LogLevel::Trace => DebugLevel::Trace,
        }
    }
}

/// Global debug logger
struct DebugLogger {
    level: DebugLevel,
    file: Option<std::fs::File>,
}

impl DebugLogger {
    fn new(level: DebugLevel) -> Self {
        let mut logger = DebugLogger {
            level: DebugLevel::Off,
            file: None,
        };
        logger.set_level(level);
        logger
    }

    /// Change the level, opening the log file the first time it is needed
    fn set_level(&mut self, level: DebugLevel) {
        self.level = level;
        if level == DebugLevel::Off || self.file.is_some() {
            return;
        }

        #[cfg(unix)]
        let log_path = std::path::PathBuf::from("/tmp/tabpane_debug.log");
        #[cfg(windows)]
        let log_path = std::env::temp_dir().join("tabpane_debug.log");

        // A missing log file must never disturb the host application
        if let Ok(f) = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&log_path)
        {
            self.file = Some(f);
            self.write_raw(&format!(
                "\n{}\ntabpane debug session started at {} (level={:?})\n{}\n",
                "=".repeat(80),
                get_timestamp(),
                level,
                "=".repeat(80)
            ));
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn log(&mut self, level: DebugLevel, category: &str, msg: &str) {
        if level <= self.level {
            let timestamp = get_timestamp();
            let level_str = match level {
                DebugLevel::Error => "ERROR",
                DebugLevel::Info => "INFO ",
                DebugLevel::Debug => "DEBUG",
                DebugLevel::Trace => "TRACE",
                DebugLevel::Off => return,
            };
            self.write_raw(&format!(
                "[{}] [{}] [{}] {}\n",
                timestamp, level_str, category, msg
            ));
        }
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

fn get_logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| {
        Mutex::new(DebugLogger::new(
            DebugLevel::from_env().unwrap_or(DebugLevel::Off),
        ))
    })
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Check if debugging is enabled at given level
pub fn is_enabled(level: DebugLevel) -> bool {
    let logger = get_logger().lock();
    level <= logger.level
}

/// Log a message at specified level
pub fn log(level: DebugLevel, category: &str, msg: &str) {
    let mut logger = get_logger().lock();
    logger.log(level, category, msg);
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    if is_enabled(level) {
        log(level, category, &format!("{}", args));
    }
}

/// Routes the `log` facade into the debug log file
struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            log::Level::Error | log::Level::Warn => DebugLevel::Error,
            log::Level::Info => DebugLevel::Info,
            log::Level::Debug => DebugLevel::Debug,
            log::Level::Trace => DebugLevel::Trace,
        };
        logf(level, record.target(), *record.args());
    }

    fn flush(&self) {}
}

static LOG_BRIDGE: LogBridge = LogBridge;
static BRIDGE_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Initialize unified logging.
///
/// Sets the debug log to `level` (DEBUG_LEVEL wins when set) and installs a
/// `log` implementation writing to it. A logger already opened by an earlier
/// `debug_*!` call is switched to the new level. Calling it again only
/// changes the level.
pub fn init_log_bridge(level: LogLevel) {
    let env_level = DebugLevel::from_env();
    let debug_level = env_level.unwrap_or_else(|| level.into());

    let mut created = false;
    let logger = LOGGER.get_or_init(|| {
        created = true;
        Mutex::new(DebugLogger::new(debug_level))
    });
    if !created {
        logger.lock().set_level(debug_level);
    }

    let filter = match env_level {
        Some(env_level) => env_level.level_filter(),
        None => level.to_level_filter(),
    };
    if log::set_logger(&LOG_BRIDGE).is_ok() {
        BRIDGE_INSTALLED.store(true, Ordering::Release);
    }
    // Leave the filter alone if the host installed its own logger
    if BRIDGE_INSTALLED.load(Ordering::Acquire) {
        log::set_max_level(filter);
    }
}

// Convenience macros for logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
