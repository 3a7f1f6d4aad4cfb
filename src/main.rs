use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bbf::presentation::cli::{self, Cli};
use bbf::OperationContext;

fn main() {
    let cli = Cli::parse();

    let ctx = match setup(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("ERROR - {:#}", err);
            std::process::exit(bbf::ErrorKind::Runtime as i32);
        }
    };

    if let Err(err) = cli::run(&cli, &ctx) {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}

fn setup(cli: &Cli) -> Result<OperationContext> {
    init_logging(cli)?;

    let ctx = OperationContext::new();
    ctx.register_signals()
        .context("Failed to register signal handlers")?;
    Ok(ctx)
}

fn init_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialise logging: {}", err))
}
