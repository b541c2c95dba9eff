use anyhow::{Context, Result};
use pipediff::cli::output::{create_spinner, style, CROSS};
use pipediff::cli::Cli;
use pipediff::{Dispatcher, GoCdClient, Settings};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let directive = cli.log_directive(std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    if let Err(err) = run(&cli).await {
        debug!("Command failed: {:?}", err);
        eprintln!("{} {}", CROSS, style(format!("{:#}", err)).red());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())
        .context("Failed to load settings")?
        .merge(cli.settings_overrides());
    let client_config = settings.into_client_config()?;
    let client = GoCdClient::new(client_config).context("Failed to create server client")?;
    let dispatcher = Dispatcher::new(client);

    let spinner = create_spinner("Fetching pipeline configuration...");
    let result = dispatcher.run(&cli.command).await;
    spinner.finish_and_clear();

    for line in result? {
        println!("{}", line);
    }

    Ok(())
}
