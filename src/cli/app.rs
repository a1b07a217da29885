use clap::{Parser, ValueEnum};

/// Litreg: an in-memory catalog of published literature
#[derive(Parser, Debug)]
#[command(name = "litreg")]
#[command(version)]
#[command(about = "Menu-driven catalog of magazines, newspapers, journals, books, book series and comics")]
pub struct Cli {
    /// Log level for diagnostic output on stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Output format for catalog listings
    #[arg(long, default_value = "text")]
    pub format: ListFormat,

    /// Preload a handful of sample entries
    #[arg(long)]
    pub demo: bool,
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// How catalog listings are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}
