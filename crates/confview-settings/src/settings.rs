//! The Confview settings schema.
//!
//! [`Settings`] is the statically-typed configuration record the
//! rendering core consumes. The schema is closed and known at build
//! time; [`Settings::record`] projects it into the ordered
//! `(name, visibility, value)` fields of a [`Record`], and field
//! declaration order there is the output order.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::str::FromStr;

use confview_core::{EntrySink, Field, FlagSet, Formattable, Record, Value};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

impl ColorMode {
    /// Symbolic tag name, as rendered in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(Error::InvalidValue {
                field: "color",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum severity of diagnostics worth emitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Symbolic tag name, as rendered in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(Error::InvalidValue {
                field: "log_level",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delay growth strategy between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backoff {
    /// Same delay every attempt.
    Fixed,
    /// Delay grows linearly with the attempt number.
    Linear,
    /// Delay doubles per attempt.
    #[default]
    Exponential,
}

impl Backoff {
    /// Symbolic tag name, as rendered in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backoff::Fixed => "fixed",
            Backoff::Linear => "linear",
            Backoff::Exponential => "exponential",
        }
    }
}

impl FromStr for Backoff {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Backoff::Fixed),
            "linear" => Ok(Backoff::Linear),
            "exponential" => Ok(Backoff::Exponential),
            _ => Err(Error::InvalidValue {
                field: "retry.backoff",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Backoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory scan toggles, rendered as one flag-record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanFlags {
    /// Follow symbolic links while scanning.
    pub symlinks: bool,
    /// Include hidden (dot) entries.
    pub hidden: bool,
    /// Honor `.gitignore` exclusions.
    pub gitignore: bool,
    /// Descend into archive files.
    pub archives: bool,
}

impl Default for ScanFlags {
    fn default() -> Self {
        Self {
            symlinks: false,
            hidden: false,
            gitignore: true,
            archives: false,
        }
    }
}

impl ScanFlags {
    /// Project into the ordered flag record the renderer consumes.
    pub fn to_flag_set(&self) -> FlagSet {
        FlagSet::new()
            .flag("symlinks", self.symlinks)
            .flag("hidden", self.hidden)
            .flag("gitignore", self.gitignore)
            .flag("archives", self.archives)
    }
}

/// Retry behavior for transient failures.
///
/// Rendered as a composite: it owns its dotted sub-entry names and
/// emits them through the entry sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum attempts before giving up.
    pub limit: i64,
    /// Delay growth strategy.
    pub backoff: Backoff,
    /// Cap on the delay between attempts, in seconds.
    pub max_delay: Option<f64>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            limit: 3,
            backoff: Backoff::default(),
            max_delay: Some(30.0),
        }
    }
}

impl Formattable for RetryPolicy {
    fn format(&self, sink: &mut dyn EntrySink) -> io::Result<()> {
        sink.entry("retry.limit", &Value::Int(self.limit))?;
        sink.entry("retry.backoff", &Value::Enum(self.backoff.as_str()))?;
        sink.entry(
            "retry.max_delay",
            &Value::optional(self.max_delay.map(Value::Float)),
        )
    }
}

/// User key/action bindings.
///
/// The line format has no representation for a free-form map, so the
/// field is carried as an unsupported kind and omitted from output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(BTreeMap<String, String>);

impl Bindings {
    /// Bind a key chord to an action, replacing any previous binding.
    pub fn bind(&mut self, key: impl Into<String>, action: impl Into<String>) {
        self.0.insert(key.into(), action.into());
    }

    /// Look up the action bound to a key chord.
    pub fn action(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no bindings are defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The effective Confview configuration.
///
/// Field declaration order here is the output order of `confview show`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Emit progress chatter on stderr.
    pub verbose: bool,
    /// When to colorize terminal output.
    pub color: ColorMode,
    /// Minimum diagnostic severity.
    pub log_level: LogLevel,
    /// Worker count for parallel operations.
    pub jobs: i64,
    /// Overall operation timeout in seconds; absent means no limit.
    pub timeout: Option<f64>,
    /// Attempts for transient failures; absent defers to `retry.limit`.
    pub retry_count: Option<i64>,
    /// External editor command; absent falls back to `$EDITOR`.
    pub editor: Option<String>,
    /// Cache directory; absent means the platform default.
    pub cache_dir: Option<String>,
    /// Directory scan toggles.
    pub scan: ScanFlags,
    /// Retry behavior for transient failures.
    pub retry: RetryPolicy,
    /// User key/action bindings (not representable in the line format).
    pub bindings: Bindings,
    /// Path the configuration was loaded from. Internal: tracked for
    /// diagnostics, never rendered.
    pub config_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            color: ColorMode::default(),
            log_level: LogLevel::default(),
            jobs: 4,
            timeout: None,
            retry_count: None,
            editor: None,
            cache_dir: None,
            scan: ScanFlags::default(),
            retry: RetryPolicy::default(),
            bindings: Bindings::default(),
            config_path: None,
        }
    }
}

impl Settings {
    /// Construct the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the schema into the ordered record the renderer
    /// consumes.
    ///
    /// Pure: the same settings always project to an identically
    /// rendering record.
    pub fn record(&self) -> Record {
        Record::from(vec![
            Field::new("verbose", Value::Bool(self.verbose)),
            Field::new("color", Value::Enum(self.color.as_str())),
            Field::new("log_level", Value::Enum(self.log_level.as_str())),
            Field::new("jobs", Value::Int(self.jobs)),
            Field::new("timeout", Value::optional(self.timeout.map(Value::Float))),
            Field::new(
                "retry_count",
                Value::optional(self.retry_count.map(Value::Int)),
            ),
            Field::new(
                "editor",
                Value::optional(self.editor.clone().map(Value::Text)),
            ),
            Field::new(
                "cache_dir",
                Value::optional(self.cache_dir.clone().map(Value::Text)),
            ),
            Field::new("scan", Value::Flags(self.scan.to_flag_set())),
            Field::new("retry", Value::custom(self.retry.clone())),
            Field::new("bindings", Value::Unsupported),
            Field::internal(
                "config_path",
                Value::optional(self.config_path.clone().map(Value::Text)),
            ),
        ])
    }
}
