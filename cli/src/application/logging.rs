use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, falling back to warn", args.filter, e);
        EnvFilter::new("warn")
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
