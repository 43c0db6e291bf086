//! extension-cli - command dispatcher for GraphQL engine extension services.

use extension_cli::cli::{Cli, Invocation};
use extension_cli::config::Config;
use extension_cli::dispatch::{self, Outcome};
use extension_cli::error::Result;
use extension_cli::output::Ack;
use extension_cli::{logging, services};

#[tokio::main]
async fn main() {
    logging::init();

    let invocation = Invocation::from_cli(Cli::parse_args());
    if let Err(e) = run(invocation).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(invocation: Invocation) -> Result<()> {
    let config = Config::load()?;
    let registry = services::registry_from_config(&config);

    match dispatch::run(invocation, &registry).await? {
        Outcome::Completed { output_file_path } => {
            println!("{}", Ack::completed(&output_file_path).to_json()?);
        }
        Outcome::Skipped => {}
    }
    Ok(())
}
