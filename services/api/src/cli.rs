use crate::demo::{run_assess, run_demo, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scam_radar::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Scam Radar",
    about = "Score second-hand marketplace listings for fraud risk",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score listings from a JSON or CSV export
    Assess(AssessArgs),
    /// Score a handful of sample listings and draft a report for the riskiest one
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Demo => run_demo(),
    }
}
