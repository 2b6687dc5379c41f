//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber.
///
/// With `verbose` everything down to TRACE is shown; otherwise only what
/// `RUST_LOG` asks for. Without either, nothing is printed.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    // Ignora l'errore se un subscriber è già installato (es. nei test)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
