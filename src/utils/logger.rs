use crate::config::OutputFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Compact,
    Json,
}

impl From<OutputFormat> for LogStyle {
    /// JSON transcripts get JSON logs.
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => LogStyle::Compact,
            OutputFormat::Json => LogStyle::Json,
        }
    }
}

pub fn init_logger(style: LogStyle, verbose: bool) {
    match style {
        LogStyle::Compact => init_cli_logger(verbose),
        LogStyle::Json => init_json_logger(verbose),
    }
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "oop_models=debug,info"
    } else {
        "oop_models=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs go to stderr so stdout only carries the transcript.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
