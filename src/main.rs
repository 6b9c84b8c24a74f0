use blogline::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogline=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            no_seed,
        }) => {
            blogline::cli::serve::run(&cli.config, host, port, no_seed).await?;
        }
        Some(Commands::Migrate) => {
            blogline::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Seed) => {
            blogline::cli::seed::run(&cli.config).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
