use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::{set_log_file_path, LogConfig, LOG_FILENAME};

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_directive()))
}

/// Install the global subscriber: stdout and a rolling file, both filtered by
/// `RUST_LOG`, plus the span-trace [`ErrorLayer`].
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = RollingFileAppender::new(config.rotation.clone(), &config.log_dir, LOG_FILENAME);
    set_log_file_path(config.log_file().display().to_string());

    if config.json_format {
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter(config));
        let stdout_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter(config));
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer)
            .with(ErrorLayer::default())
            .init();
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(false)
            .with_filter(env_filter(config));
        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_filter(env_filter(config));
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer)
            .with(ErrorLayer::default())
            .init();
    }
    Ok(())
}

/// Parse `--log-rotation`. Unknown values fall back to daily.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.trim().to_lowercase().as_str() {
        "minutely" => Rotation::MINUTELY,
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
