use std::path::Path;

/// Keeps the non-blocking log writer alive; flushes on drop.
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, "romatool-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("romaji_core=debug,romaji_session=debug")
            }),
        )
        .init();

    TraceGuard { _guard: guard }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}
