//! Opt-in diagnostic logging for the raster pipeline.
//!
//! Lines go to stderr, tagged with the pipeline stage that produced them:
//!
//! ```text
//! [+0012ms] [DEBUG] [clip] liang-barsky accepted (0, 5) -> (10, 5)
//! [+0013ms] [TRACE] [render] <- replay scene (0.41ms)
//! ```
//!
//! Nothing is printed until a threshold is set with [`enable`],
//! [`enable_at`] or [`init_from_env`]. `TRUENO_RASTER_DEBUG` takes `1`,
//! `true` or `yes` for everything, or a level name (`trace` to `error`) for
//! that level and above.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::time::Instant;

/// Environment variable consulted by [`init_from_env`].
pub const DEBUG_ENV_VAR: &str = "TRUENO_RASTER_DEBUG";

/// Lowest level that is printed, stored as `level as u8 + 1`; 0 is off.
static THRESHOLD: AtomicU8 = AtomicU8::new(0);

/// Start time stored as millis since UNIX epoch.
static START_TIME_MS: AtomicU64 = AtomicU64::new(0);

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Scope entry and exit with timings.
    Trace,
    /// Per-primitive decisions: clip accept/reject, scene edits.
    Debug,
    /// Files written, configuration picked up.
    Info,
    /// A sanity check disagreed or a fallback was taken.
    Warn,
    /// Reserved for failures the caller did not see as an `Err`.
    Error,
}

impl Level {
    const ALL: [Self; 5] = [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error];

    fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m",
            Level::Debug => "\x1b[36m",
            Level::Info => "\x1b[32m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    /// Case-insensitive level name, `None` for anything else.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
    }

    fn from_threshold(raw: u8) -> Option<Self> {
        raw.checked_sub(1).and_then(|i| Self::ALL.get(usize::from(i)).copied())
    }
}

/// Pipeline stage a log line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Line clippers.
    Clip,
    /// Scene edits and transforms.
    Scene,
    /// Clear-and-replay onto a pixel sink.
    Render,
    /// PNG export.
    Output,
    /// YAML configuration loading.
    Config,
}

impl Component {
    /// Tag printed between brackets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Component::Clip => "clip",
            Component::Scene => "scene",
            Component::Render => "render",
            Component::Output => "output",
            Component::Config => "config",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Print every level.
pub fn enable() {
    enable_at(Level::Trace);
}

/// Print `level` and everything more severe.
pub fn enable_at(level: Level) {
    START_TIME_MS.store(now_ms(), Ordering::SeqCst);
    THRESHOLD.store(level as u8 + 1, Ordering::SeqCst);
}

/// Silence all output.
pub fn disable() {
    THRESHOLD.store(0, Ordering::SeqCst);
}

/// Read `TRUENO_RASTER_DEBUG` and set the threshold from it.
///
/// Returns the threshold in effect afterwards. Unrecognized values leave
/// the current setting alone.
pub fn init_from_env() -> Option<Level> {
    if let Ok(value) = std::env::var(DEBUG_ENV_VAR) {
        if let Some(level) = parse_threshold(&value) {
            enable_at(level);
        }
    }
    threshold()
}

fn parse_threshold(value: &str) -> Option<Level> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(Level::Trace),
        _ => Level::from_name(value),
    }
}

/// Current threshold, `None` when logging is off.
pub fn threshold() -> Option<Level> {
    Level::from_threshold(THRESHOLD.load(Ordering::Relaxed))
}

/// True when anything at all is printed.
#[inline]
pub fn is_enabled() -> bool {
    THRESHOLD.load(Ordering::Relaxed) != 0
}

/// True when a line at `level` would be printed.
#[inline]
pub fn enabled_for(level: Level) -> bool {
    let raw = THRESHOLD.load(Ordering::Relaxed);
    raw != 0 && level as u8 + 1 >= raw
}

fn elapsed_ms() -> u64 {
    let start = START_TIME_MS.load(Ordering::Relaxed);
    if start == 0 {
        return 0;
    }
    now_ms().saturating_sub(start)
}

fn format_line(elapsed: u64, level: Level, component: Component, message: &str) -> String {
    format!(
        "[+{:04}ms] {}[{:5}]\x1b[0m [{}] {}",
        elapsed,
        level.color_code(),
        level.as_str(),
        component,
        message
    )
}

/// Write one line if `level` passes the threshold.
pub fn log(level: Level, component: Component, message: &str) {
    if !enabled_for(level) {
        return;
    }
    let line = format_line(elapsed_ms(), level, component, message);
    let _ = writeln!(io::stderr(), "{line}");
}

/// Log with format arguments; the message is only built when printed.
///
/// The component is a [`Component`] variant name: `raster_log!(Level::Debug, Clip, ...)`.
#[macro_export]
macro_rules! raster_log {
    ($level:expr, $component:ident, $($arg:tt)*) => {
        if $crate::debug::enabled_for($level) {
            $crate::debug::log(
                $level,
                $crate::debug::Component::$component,
                &format!($($arg)*),
            );
        }
    };
}

/// Trace-level [`raster_log!`].
#[macro_export]
macro_rules! raster_trace {
    ($component:ident, $($arg:tt)*) => {
        $crate::raster_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Debug-level [`raster_log!`].
#[macro_export]
macro_rules! raster_debug {
    ($component:ident, $($arg:tt)*) => {
        $crate::raster_log!($crate::debug::Level::Debug, $component, $($arg)*)
    };
}

/// Info-level [`raster_log!`].
#[macro_export]
macro_rules! raster_info {
    ($component:ident, $($arg:tt)*) => {
        $crate::raster_log!($crate::debug::Level::Info, $component, $($arg)*)
    };
}

/// Warn-level [`raster_log!`].
#[macro_export]
macro_rules! raster_warn {
    ($component:ident, $($arg:tt)*) => {
        $crate::raster_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}

/// Logs entry at construction and exit with the elapsed time on drop, both
/// at trace level.
pub struct TimingGuard {
    component: Component,
    operation: &'static str,
    start: Instant,
}

impl TimingGuard {
    /// Start timing `operation`.
    pub fn new(component: Component, operation: &'static str) -> Self {
        log(Level::Trace, component, &format!("-> {operation}"));
        Self {
            component,
            operation,
            start: Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if enabled_for(Level::Trace) {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            log(
                Level::Trace,
                self.component,
                &format!("<- {} ({ms:.2}ms)", self.operation),
            );
        }
    }
}

/// Time the rest of the enclosing scope: `time_scope!(Render, "replay scene");`.
#[macro_export]
macro_rules! time_scope {
    ($component:ident, $operation:expr) => {
        let _guard =
            $crate::debug::TimingGuard::new($crate::debug::Component::$component, $operation);
    };
}
