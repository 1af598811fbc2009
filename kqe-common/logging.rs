use anyhow::Result;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Returns directory where log files for `app_name` are written.
pub fn logs_dir(app_name: &str) -> PathBuf {
    match std::env::home_dir() {
        Some(path) => path.join(format!(".{app_name}")).join("logs"),
        None => PathBuf::from("logs"),
    }
}

/// Initializes new logging to file and returns worker guard that will flush logs on drop.
pub fn initialize(app_name: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let appender = tracing_appender::rolling::daily(logs_dir(app_name), format!("{app_name}.log"));
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

    let timer = time::format_description::parse("[year]-[month padding:zero]-[day padding:zero] [hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);

    let env = format!("warn,{}=debug", app_name.replace('-', "_"));
    let env_filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(env));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(guard)
}
