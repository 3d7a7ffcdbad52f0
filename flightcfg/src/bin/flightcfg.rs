mod config;

use clap::Parser;
use clap::Subcommand;
use log::{error, log_enabled, Level};

use flightcfg::error::Error;
use flightcfg::version;
use flightcfg::BANNER;

use config::{GetConfig, ServerConfig, ShowConfig};

pub const LOG: &str = "flightcfg";

const INFO: &str = "
Flightcfg resolves the endpoint and naming settings shared by the flight
delay prediction services, and prints or serves them read-only.";

#[derive(Debug, Parser)]
#[clap(name = "Flightcfg command-line interface")]
#[clap(about = INFO, before_help = BANNER, disable_version_flag = true, arg_required_else_help = true)]
struct AppOptions {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every resolved setting as json
    Show(ShowConfig),
    /// Print a single setting by name
    Get(GetConfig),
    /// Serve the resolved settings over http on FLASK_HOST:FLASK_PORT
    Serve(ServerConfig),
    Version,
}

#[actix_web::main]
async fn main() {
    let app = AppOptions::parse();

    let output = match app.command {
        Commands::Show(c) => flightcfg::inspect::show(c.into()),
        Commands::Get(c) => flightcfg::inspect::get(c.into()),
        Commands::Serve(c) => flightcfg::server::run(c.into()).await,
        Commands::Version => version::init(),
    };

    if let Err(e) = output {
        report(&e);
        std::process::exit(1);
    }
}

fn error_logging_enabled() -> bool {
    log_enabled!(target: LOG, Level::Error)
}

/// Failures always reach stderr, even when `--log off` filters the logger.
fn report(e: &Error) {
    if error_logging_enabled() {
        error!(target: LOG, "{}", e);
    } else {
        eprintln!("{}: {}", LOG, e);
    }
}
