use tracing_subscriber::EnvFilter;

/// Log target shared by the library and the binary. The `peripleo-when` bin
/// compiles to a crate also named `peripleo_when`, so one directive covers
/// both.
const LOG_TARGET: &str = "peripleo_when";

/// Default level for a `-v` count: warn, then info, debug, trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. A set `RUST_LOG` takes precedence over
/// `verbosity`; stdout is left for normalized output.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{LOG_TARGET}={}", level_for(verbosity)))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
