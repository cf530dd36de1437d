use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use examgate::route::Route;

#[derive(Parser)]
#[command(name = "examgate")]
#[command(about = "Verification gate for final exam questions")]
struct Cli {
    /// Open the client at a route path (e.g. "/fq/<code>/<netid>")
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "examgate=debug"
    } else {
        "examgate=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let initial = match &args.route {
        Some(path) => Route::parse(path).context("invalid --route path")?,
        None => Route::Home,
    };
    info!(path = %initial, "starting examgate");

    examgate::gui::run(initial).map_err(|e| anyhow::anyhow!("Failed to launch the client: {}", e))
}
