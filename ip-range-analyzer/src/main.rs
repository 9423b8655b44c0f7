mod analytics;
mod errors;
mod filter;
mod ingest;
mod models;
mod report;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use errors::AnalyzerError;
use settings::{Cli, Environment, FileConfig, Settings};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output_file) => println!("analysis complete, report written to {output_file}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, AnalyzerError> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let env = Environment::from_process();
    let settings = Settings::resolve(cli, &file_config, &env)?;

    let records = ingest::read_records(&settings.log_file)?;
    let records = filter::filter_by_range(
        records,
        settings.address_start,
        settings.address_mask.as_deref(),
    )?;
    let counts = analytics::count_requests(&records);
    report::write_report(&settings.output_file, &counts)?;
    tracing::info!(
        requests = records.len(),
        addresses = counts.len(),
        output = %settings.output_file,
        "report written"
    );
    Ok(settings.output_file)
}
