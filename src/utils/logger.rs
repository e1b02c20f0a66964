use tracing::Subscriber;
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "row_roster=debug,info"
    } else {
        "row_roster=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// stderr fmt layer, compact text or one JSON object per line.
fn fmt_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        layer.json().boxed()
    } else {
        layer.compact().boxed()
    }
}

fn build_subscriber(verbose: bool, json: bool) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(fmt_layer::<Registry>(json))
        .with(default_filter(verbose))
}

pub fn init_logger(verbose: bool, json: bool) {
    build_subscriber(verbose, json).init();
}

#[cfg(test)]
pub(crate) use capture::capture_events;
