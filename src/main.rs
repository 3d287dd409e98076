use std::process::ExitCode;

use clap::Parser;

use gmfetch::cli::Cli;
use gmfetch::error::Result;
use gmfetch::fetch::fetch_snapshot;
use gmfetch::gmail_api::{obtain_token, GmailClient};
use gmfetch::output::render_snapshot;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String> {
    let token = obtain_token(&cli.credentials, &cli.token_cache).await?;
    let client = GmailClient::new(token);
    let snapshot = fetch_snapshot(&client, cli.max_results).await?;
    Ok(render_snapshot(&snapshot))
}
