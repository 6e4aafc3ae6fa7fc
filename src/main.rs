use clap::Parser;
use kubehosts::cli::{commands, Cli};
use std::process;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };

    // stdout carries the rendered hosts, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("ERROR: failed to set tracing subscriber: {}", e);
        process::exit(1);
    }

    if cli.version {
        println!("{} version {}", program_name(), kubehosts::VERSION);
        return;
    }

    debug!("Starting kubehosts v{}", kubehosts::VERSION);

    let result = match cli.command {
        Some(command) => commands::handle_command(command).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "kubehosts".to_string())
}
