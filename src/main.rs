use clap::{Parser, Subcommand};
use log::{debug, info};
use miette::{IntoDiagnostic, Result};
use staffpay::application::lookup::{LookupService, Session};
use staffpay::config::AppConfig;
use staffpay::domain::rates::RateKey;
use staffpay::infrastructure::in_memory::InMemoryRecordStore;
use staffpay::infrastructure::shared_secret::SharedSecretAuthenticator;
use staffpay::interfaces::render::report::ReportWriter;
use staffpay::interfaces::render::{json, text, user_message, OutputFormat};
use staffpay::interfaces::sheet::{load_records, SheetLayout};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with rate overrides and/or the access secret
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Secret that unlocks lookups. Overrides the one in the config file.
    #[arg(long, env = "STAFFPAY_SECRET", hide_env_values = true, global = true)]
    secret: Option<String>,

    /// Password to present to the access gate
    #[arg(long, env = "STAFFPAY_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Worksheet to read (defaults to the first one)
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Turn on debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the payout of one or more students. Reads ids from stdin, one
    /// per line, when no --id is given.
    Lookup {
        /// Payout sheet (.xlsx or .csv)
        source: PathBuf,

        /// Student id to look up (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print a CSV payout report covering every record in the sheet
    Report {
        /// Payout sheet (.xlsx or .csv)
        source: PathBuf,
    },
}

impl Command {
    fn source(&self) -> &PathBuf {
        match self {
            Command::Lookup { source, .. } | Command::Report { source } => source,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path).into_diagnostic()?,
        None => AppConfig::default(),
    };
    let secret = config
        .resolve_secret(cli.secret.as_deref())
        .into_diagnostic()?;
    for key in RateKey::ALL {
        debug!("rate {} = {}", key, config.rates.rate(key));
    }

    // Loaded once; the store is read-only from here on.
    let records = load_records(
        cli.command.source(),
        &SheetLayout::default(),
        cli.sheet.as_deref(),
    )
    .into_diagnostic()?;

    let service = LookupService::new(
        Box::new(InMemoryRecordStore::new(records)),
        Box::new(SharedSecretAuthenticator::new(secret)),
        config.rates,
    );
    let session = service
        .open_session(cli.password.as_deref().unwrap_or_default())
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Lookup { ids, format, .. } => {
            if ids.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line.into_diagnostic()?;
                    respond(&session, &line, format, &mut out).await?;
                }
            } else {
                for id in &ids {
                    respond(&session, id, format, &mut out).await?;
                }
            }
        }
        Command::Report { .. } => {
            let statements = session.statements().await.into_diagnostic()?;
            ReportWriter::new(out)
                .write_statements(&statements)
                .into_diagnostic()?;
        }
    }

    Ok(())
}

/// Answers one lookup. Recoverable failures become a message for the user;
/// anything else aborts.
async fn respond<W: Write>(
    session: &Session<'_>,
    raw_id: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match session.lookup(raw_id).await {
        Ok(statement) => match format {
            // The text rendering already ends in a newline; the JSON one does not.
            OutputFormat::Text => {
                write!(out, "{}", text::render(&statement, session.rates())).into_diagnostic()?
            }
            OutputFormat::Json => {
                writeln!(out, "{}", json::render(&statement).into_diagnostic()?).into_diagnostic()?
            }
        },
        Err(e) => match user_message(&e) {
            Some(message) => {
                info!("lookup of {:?} failed: {}", raw_id, e);
                writeln!(out, "{}", message).into_diagnostic()?;
            }
            None => return Err(e).into_diagnostic(),
        },
    }
    Ok(())
}
