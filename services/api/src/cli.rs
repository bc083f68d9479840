use crate::demo::{run_bmi, run_check, run_demo, run_report, DemoArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use medimate::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MediMate",
    about = "Run and exercise the MediMate smart health companion from the command line",
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
    /// Classify free-form symptom text against the triage rules
    Check(CheckArgs),
    /// Compute a BMI reading and its weight class
    Bmi(BmiArgs),
    /// Compose a health report and persist the artifact
    Report(ReportArgs),
    /// Run an end-to-end CLI demo covering all three features
    Demo(DemoArgs),
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

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Symptom description, e.g. "cough and fever"
    pub(crate) symptoms: String,
}

#[derive(Args, Debug)]
pub(crate) struct BmiArgs {
    /// Body weight in kilograms
    #[arg(long)]
    pub(crate) weight_kg: f64,
    /// Standing height in centimeters
    #[arg(long)]
    pub(crate) height_cm: f64,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Bmi(args) => run_bmi(args),
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
