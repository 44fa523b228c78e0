use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the JSON output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    kbc_common::app::cli::run();
}
