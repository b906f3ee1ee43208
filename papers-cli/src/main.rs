use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    about = "Find PubMed papers with pharmaceutical or biotech affiliated authors",
    long_about = "Searches PubMed, fetches details for each hit and flags authors whose \
                  affiliations look commercial. Results are printed as JSON or saved as CSV."
)]
struct Cli {
    #[command(flatten)]
    command: commands::papers::FindPapers,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    tool: String,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.command.debug);

    let api_key = cli.api_key.as_deref();
    let email = cli.email.as_deref();
    let tool = &cli.tool;
    cli.command.execute_with_config(api_key, email, tool).await
}
