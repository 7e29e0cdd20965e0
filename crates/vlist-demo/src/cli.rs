#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `VLIST_DEMO_*` prefix; geometry defaults come
//! from `VLIST_ITEM_HEIGHT` / `VLIST_CONTAINER_HEIGHT`.

use std::env;
use std::fmt;
use std::process;

use vlist_core::ConfigError;
use vlist_core::config::{ViewportConfig, parse_number};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
vlist demo: replay a scroll script against a virtualized list

USAGE:
    vlist-demo [OPTIONS]

OPTIONS:
    --items=N              Number of generated items (default: 10000)
    --item-height=F        Row height (default: 30)
    --container-height=F   Viewport height (default: 300)
    --width=N              Screen width in columns (default: 40)
    --line-height=F        Track units per screen line (default: item height)
    --scroll=STEPS         Comma-separated script: offsets or top, bottom,
                           pgup, pgdn, quit (default: 0)
    --class=NAME           Class name attached to the viewport
    --jsonl                Print one JSON object per frame
    --log-json             Emit logs as JSON on stderr
    --help, -h             Show this help message
    --version, -V          Show version

ENVIRONMENT VARIABLES:
    VLIST_ITEM_HEIGHT          Default --item-height
    VLIST_CONTAINER_HEIGHT     Default --container-height
    VLIST_DEMO_ITEMS           Override --items
    VLIST_DEMO_WIDTH           Override --width
    VLIST_DEMO_LINE_HEIGHT     Override --line-height
    VLIST_DEMO_SCROLL          Override --scroll
    VLIST_DEMO_JSONL           Enable --jsonl (1/true)
    RUST_LOG                   Log filter (default: warn)";

/// One step of the scroll script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    /// Host-reported scroll offset.
    Offset(f64),
    /// Scroll up one viewport.
    PageUp,
    /// Scroll down one viewport.
    PageDown,
    /// Jump to the first row.
    Top,
    /// Jump to the last row.
    Bottom,
    /// Stop the program.
    Quit,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Number of generated items.
    pub items: usize,
    /// Row height.
    pub item_height: f64,
    /// Viewport height.
    pub container_height: f64,
    /// Screen width in columns.
    pub width: u16,
    /// Track units per screen line; `None` means one row per line.
    pub line_height: Option<f64>,
    /// Scroll script.
    pub script: Vec<ScriptStep>,
    /// Class name for the viewport.
    pub class_name: Option<String>,
    /// Print frames as JSONL.
    pub jsonl: bool,
    /// Emit logs as JSON.
    pub log_json: bool,
}

/// Why parsing stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
    Config(ConfigError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help requested"),
            Self::Version => write!(f, "version requested"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArg(arg) => write!(f, "Unknown argument: {arg}"),
            Self::Config(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl Default for Opts {
    fn default() -> Self {
        let viewport = ViewportConfig::default();
        Self {
            items: 10_000,
            item_height: viewport.item_height,
            container_height: viewport.container_height,
            width: 40,
            line_height: None,
            script: vec![ScriptStep::Offset(0.0)],
            class_name: None,
            jsonl: false,
            log_json: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("vlist-demo {VERSION}");
                process::exit(0);
            }
            Err(err @ ParseError::UnknownArg(_)) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }

    /// Effective line height for the headless screen.
    pub fn effective_line_height(&self) -> f64 {
        self.line_height.unwrap_or(self.item_height)
    }

    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let viewport = ViewportConfig::from_env_with(&get_env)?;
        let mut opts = Self {
            item_height: viewport.item_height,
            container_height: viewport.container_height,
            ..Self::default()
        };

        // Apply environment variable defaults first
        if let Some(val) = get_env("VLIST_DEMO_ITEMS")
            && let Ok(n) = val.trim().parse()
        {
            opts.items = n;
        }
        if let Some(val) = get_env("VLIST_DEMO_WIDTH")
            && let Ok(n) = val.trim().parse::<u16>()
            && n > 0
        {
            opts.width = n;
        }
        if let Some(val) = get_env("VLIST_DEMO_LINE_HEIGHT")
            && let Ok(n) = val.trim().parse::<f64>()
            && n.is_finite()
            && n > 0.0
        {
            opts.line_height = Some(n);
        }
        if let Some(val) = get_env("VLIST_DEMO_SCROLL")
            && let Ok(script) = parse_script(&val)
        {
            opts.script = script;
        }
        if let Some(val) = get_env("VLIST_DEMO_JSONL") {
            opts.jsonl = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Parse command-line args (override env vars)
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--jsonl" => opts.jsonl = true,
                "--log-json" => opts.log_json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--items=") {
                        opts.items = val.parse().map_err(|_| invalid("--items", val))?;
                    } else if let Some(val) = other.strip_prefix("--item-height=") {
                        opts.item_height = parse_number("--item-height", val)?;
                    } else if let Some(val) = other.strip_prefix("--container-height=") {
                        opts.container_height = parse_number("--container-height", val)?;
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        match val.parse::<u16>() {
                            Ok(n) if n > 0 => opts.width = n,
                            _ => return Err(invalid("--width", val)),
                        }
                    } else if let Some(val) = other.strip_prefix("--line-height=") {
                        match val.parse::<f64>() {
                            Ok(n) if n.is_finite() && n > 0.0 => opts.line_height = Some(n),
                            _ => return Err(invalid("--line-height", val)),
                        }
                    } else if let Some(val) = other.strip_prefix("--scroll=") {
                        opts.script = parse_script(val)?;
                    } else if let Some(val) = other.strip_prefix("--class=") {
                        opts.class_name = (!val.is_empty()).then(|| val.to_string());
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }
}

fn invalid(flag: &'static str, value: &str) -> ParseError {
    ParseError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

/// Parse a comma-separated scroll script.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptStep>, ParseError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.to_ascii_lowercase().as_str() {
            "top" | "home" => Ok(ScriptStep::Top),
            "bottom" | "end" => Ok(ScriptStep::Bottom),
            "pgup" | "pageup" => Ok(ScriptStep::PageUp),
            "pgdn" | "pagedown" => Ok(ScriptStep::PageDown),
            "quit" | "q" => Ok(ScriptStep::Quit),
            _ => part
                .parse::<f64>()
                .map(ScriptStep::Offset)
                .map_err(|_| invalid("--scroll", part)),
        })
        .collect()
}
