use authdog_cli::{Cli, commands, exit_code_for};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = authdog_telemetry::init_telemetry_with_format("authdog-cli", cli.log_format) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match commands::run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}
