use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pagseguro_ofx::{ConverterBuilder, OfxConfig, errors::ConversionResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagseguro2ofx", version, about = "Convert a PagSeguro XML export into an OFX statement")]
struct Cli {
    /// PagSeguro XML export
    input: PathBuf,

    /// OFX file to write (replaced if it exists)
    output: PathBuf,

    /// JSON file with statement settings (org, account, start, end, balance, ...)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Account identifier written to <ACCTID>
    #[arg(long, value_name = "ID")]
    account: Option<String>,
}

fn run(cli: &Cli) -> ConversionResult<()> {
    let config = match &cli.config {
        Some(path) => OfxConfig::load(path)?,
        None => OfxConfig::default(),
    };

    let mut builder = ConverterBuilder::new().filename(&cli.input).config(config);
    if let Some(account) = &cli.account {
        builder = builder.account(account);
    }

    builder.write_to(&cli.output)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
