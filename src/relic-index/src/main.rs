mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relic_index=info,relic_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Build { output } => {
            commands::build::handle(config, output)?;
        }

        Commands::Report { index, out_dir } => {
            commands::report::handle(&index, &out_dir)?;
        }

        Commands::Fetch { url, output } => {
            commands::fetch::handle(&url, &output)?;
        }

        Commands::Value {
            index,
            relic,
            refinement,
            strategy,
        } => {
            commands::value::handle(&index, &relic, refinement, strategy)?;
        }

        Commands::Configure { init } => {
            commands::configure::handle(config, init)?;
        }
    }

    Ok(())
}
