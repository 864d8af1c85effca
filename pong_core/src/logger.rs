use tracing_subscriber::{fmt::time, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// Without `RUST_LOG`, debug builds log match events at `debug` and release
/// builds at `info`; everything else logs at `warn`. A non-empty `RUST_LOG`
/// replaces these defaults. Call once at startup; a second call returns an
/// error.
pub fn init() -> anyhow::Result<()> {
    let level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(time::uptime()),
        )
        .with(filter(level, env.as_deref())?)
        .try_init()?;
    Ok(())
}

fn filter(level: &str, env: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = match env {
        Some(env) if !env.trim().is_empty() => env.to_string(),
        _ => format!("warn,pong_core={level},pong_headless={level}"),
    };
    Ok(EnvFilter::try_new(directives)?)
}
