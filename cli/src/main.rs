mod image;
mod terminal;
mod transport;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use registration::{
    ClientConfig, ConfigError, DraftField, FieldValue, FormPhase, RegistrationDraft, SubmissionHandler, SubmitOutcome,
};
use tracing_subscriber::EnvFilter;

use crate::image::{ImageError, LocalImage};
use crate::terminal::{TerminalNavigator, TerminalNotifier};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The notifier has already printed why.
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error("registration not completed: {0}")]
    NotRegistered(String),
}

impl CliError {
    fn already_reported(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[derive(Parser, Debug)]
#[command(name = "register-cli", about = "Create an account on the auth service")]
struct Cli {
    #[arg(long, env = "REGISTER_API_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Register(RegisterArgs),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "REGISTER_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, help = "Profile picture (png, jpg, gif, webp, ...)")]
    profile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.already_reported() {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_base_url(Some(&cli.base_url))?;

    match cli.command {
        Command::Register(args) => run_register(config, args).await,
    }
}

async fn run_register(config: ClientConfig, args: RegisterArgs) -> Result<(), CliError> {
    let profile = match args.profile.as_deref() {
        Some(path) => vec![LocalImage::open(path).await?],
        None => Vec::new(),
    };

    let mut draft = RegistrationDraft::default()
        .with(DraftField::Name, FieldValue::Text(args.name))
        .with(DraftField::Email, FieldValue::Text(args.email))
        .with(DraftField::Password, FieldValue::Text(args.password))
        .with(DraftField::Profile, FieldValue::Files(profile));

    let client = reqwest::Client::builder().build()?;
    let navigator = TerminalNavigator::new(config.api_base_url.clone());
    let handler = SubmissionHandler::new(config, ReqwestTransport::new(client), TerminalNotifier, navigator);

    let mut phase = FormPhase::Editing;
    let outcome = handler.submit(&mut draft, &mut phase).await;
    tracing::debug!(?outcome, ?phase, "register finished");
    outcome_result(outcome)
}

fn outcome_result(outcome: SubmitOutcome) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Registered { .. } => Ok(()),
        SubmitOutcome::MissingProfile => Err(CliError::Rejected("no profile picture given".to_owned())),
        SubmitOutcome::Failed { message } => Err(CliError::Rejected(message)),
        SubmitOutcome::Ignored { status } => Err(CliError::NotRegistered(format!(
            "server answered {status} without confirming"
        ))),
        SubmitOutcome::InFlight => Err(CliError::NotRegistered("submission already in flight".to_owned())),
    }
}
