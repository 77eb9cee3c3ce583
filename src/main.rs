use clap::Parser;
use showboard::{BASE_URL_ENV, Config, DEFAULT_BASE_URL, run_dashboard};
use std::process;
use tracing_subscriber::EnvFilter;

/// Browse, search and edit TV shows from a public catalog
#[derive(Parser, Debug)]
#[command(name = "showboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the show catalog API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Catalog page to start on (zero-based, as used by the catalog API)
    #[arg(short, long, default_value_t = 0)]
    page: u32,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Installs the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown unless
/// `--verbose` was given.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "showboard=debug"
    } else {
        "showboard=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::new(&args.base_url, args.page) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_dashboard(&config) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
