use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod output;

use commands::Command;
use config::OutputFormat;


#[derive(Parser)]
#[command(name = "judge_plan", about = "Check and lay out judging table plans")]
struct Cli {
    /// Overrides the output format from the config file
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

fn init_logging(directive: &str) {
    // Logs go to stderr so command output on stdout stays machine readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = config::read_config();
    init_logging(&config.logging_config);

    let format = cli.format.unwrap_or(config.output_format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.run(format, &mut out) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
