use crate::demo::{run_demo, run_score, run_task_query, DemoArgs, ScoreArgs, TaskQueryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Desk",
    about = "Qualify, score, and take in CRM leads from the command line",
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
    /// Score a lead from BANT answers and contact details
    Score(ScoreArgs),
    /// Run an end-to-end intake demo against an in-memory repository
    Demo(DemoArgs),
    /// Print the backend query for a set of task list filters
    TaskQuery(TaskQueryArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::TaskQuery(args) => run_task_query(args),
    }
}
