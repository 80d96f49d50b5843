//! healthchecksio-provider entrypoint

use clap::Parser;
use healthchecksio_provider::{cli, logging};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.debug).expect("failed to initialize logging");

    let output = match cli::run(cli).await {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
