use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Bunyan json records for `name`, filtered by `RUST_LOG` when set and
/// `level` (trace|debug|info|warn|error|off) otherwise.
pub fn get_subscriber<Sink>(name: &str, level: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.to_owned(), sink))
}

/// Installs the subscriber globally and routes `log` records into it.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> crate::Result<()> {
    LogTracer::init().map_err(crate::Error::as_unknown_error)?;
    set_global_default(subscriber).map_err(crate::Error::as_unknown_error)?;
    Ok(())
}

/// Logs go to stderr so the capture loop's stdout stays free.
pub fn init(name: &str, level: &str) -> crate::Result<()> {
    init_subscriber(get_subscriber(name, level, std::io::stderr))
}
