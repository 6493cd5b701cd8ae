//! Quill golden-output harness CLI entry point

fn main() {
    // Structured logging goes to stderr so it never mixes with the report on stdout
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    quill_verify::cli::run();
}
