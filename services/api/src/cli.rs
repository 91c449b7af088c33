use crate::commands::{run_analyze, run_score, AnalyzeArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use listing_quality::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Quality",
    about = "Score vacation-rental listing pages against the Listing Quality Model",
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
    /// Score an already extracted listing record from a JSON file
    Score(ScoreArgs),
    /// Fetch a listing page, extract its attributes and score it
    Analyze(AnalyzeArgs),
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
        Command::Score(args) => run_score(args),
        Command::Analyze(args) => run_analyze(args).await,
    }
}
