use clap::Parser;
use std::process::ExitCode;

use destination_probe::config::ProbeConfig;
use destination_probe::error::ProbeError;
use destination_probe::probe_destinations;
use destination_probe::report::{render_results, write_report};

#[derive(Parser, Debug)]
#[command(name = "destination-probe", version, about = "Probe TCP and HTTP destinations and report the results as JSON")]
struct Args {
    /// A comma-separated list of destinations to test (e.g., 'google.com:443,http://example.com')
    #[arg(long)]
    destinations: Option<String>,
}

fn init_tracing(config: &ProbeConfig) -> anyhow::Result<()> {
    let log_level = config.get_tracing_level()?;
    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
                         .add_directive(format!("destination_probe={}", log_level.as_str().to_lowercase()).parse()?))
        .init();
    Ok(())
}

async fn run(args: Args, config: ProbeConfig) -> Result<String, ProbeError> {
    let results = probe_destinations(args.destinations.as_deref(), config).await?;
    render_results(&results)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = ProbeConfig::default();

    if let Err(e) = init_tracing(&config) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let report = run(args, config)
        .await
        .and_then(|report| write_report(&mut std::io::stdout().lock(), &report));

    match report {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ProbeError::MissingDestinations) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
