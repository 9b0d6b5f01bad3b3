//! `cosmic-self` command-line front door.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cosmic_self::adapters::{DigestScheduler, InMemorySmsLog, SystemClock, TracingSmsSender, YamlSubscriberReader};
use cosmic_self::application::{
    GenerateReadingHandler, GenerateReadingQuery, GetCosmicProfileHandler, GetCosmicProfileQuery,
    GetCosmicWeatherHandler, SendSmsDigestHandler, SendTestSmsCommand, SendTestSmsHandler,
};
use cosmic_self::config::{AppConfig, ConfigError};
use cosmic_self::domain::access::{Entitlements, ReadingKind};
use cosmic_self::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};
use cosmic_self::ports::Clock;

#[derive(Parser, Debug)]
#[command(name = "cosmic-self", author, version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the cosmic profile of a birth date as JSON
    Profile {
        /// Birth date, `YYYY-MM-DD`
        birth_date: String,

        /// Evaluate at this RFC 3339 instant instead of now
        #[arg(long, value_parser = Timestamp::parse_rfc3339)]
        at: Option<Timestamp>,
    },

    /// Print today's moon phase and guidance as JSON
    Weather,

    /// Render a reading: life_essay, year_essay or reading_list
    Reading {
        kind: ReadingKind,

        /// Birth date, `YYYY-MM-DD`
        birth_date: String,

        #[arg(long)]
        name: Option<String>,
    },

    /// Send the SMS digest on its schedule, or once with --once
    Digest {
        #[arg(long)]
        once: bool,
    },

    /// Send today's message to one subscriber
    SmsTest {
        #[arg(value_parser = parse_user_id)]
        user_id: UserId,
    },
}

fn parse_user_id(input: &str) -> Result<UserId, ValidationError> {
    UserId::new(input)
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Disabled(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load().and_then(|c| c.validate().map(|_| c).map_err(Into::into)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match run(&config, cli.cmd).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &AppConfig) {
    if !config.features.enable_tracing {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.runtime.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.runtime.use_json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(config: &AppConfig, cmd: Commands) -> Result<(), CliError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match cmd {
        Commands::Profile { birth_date, at } => {
            let mut query = GetCosmicProfileQuery::new(birth_date);
            if let Some(at) = at {
                query = query.at(at);
            }
            let profile = GetCosmicProfileHandler::new(clock)
                .handle(query)
                .await
                .map_err(DomainError::from)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Weather => {
            let weather = GetCosmicWeatherHandler::new(clock)
                .handle()
                .await
                .map_err(DomainError::from)?;
            println!("{}", serde_json::to_string_pretty(&weather)?);
        }
        Commands::Reading { kind, birth_date, name } => {
            let query = GenerateReadingQuery {
                kind,
                name,
                birth_date,
                // Local operator access.
                entitlements: Entitlements::admin(),
            };
            let reading = GenerateReadingHandler::new(clock)
                .handle(query)
                .await
                .map_err(DomainError::from)?;
            println!("{}", reading.body);
        }
        Commands::Digest { once } => run_digest(config, clock, once).await?,
        Commands::SmsTest { user_id } => {
            require_sms(config)?;
            let sender = config.sms.sender().map_err(|e| CliError::Config(e.into()))?;
            let handler = SendTestSmsHandler::new(
                Arc::new(YamlSubscriberReader::new(&config.sms.subscribers_file)),
                Arc::new(TracingSmsSender::new(sender)),
                clock,
            );
            let receipt = handler
                .handle(SendTestSmsCommand { user_id })
                .await
                .map_err(DomainError::from)?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }
    Ok(())
}

fn require_sms(config: &AppConfig) -> Result<(), CliError> {
    if config.sms.enabled {
        Ok(())
    } else {
        Err(CliError::Disabled("SMS is disabled; set COSMIC_SELF__SMS__ENABLED=true"))
    }
}

async fn run_digest(config: &AppConfig, clock: Arc<dyn Clock>, once: bool) -> Result<(), CliError> {
    require_sms(config)?;
    let schedule = config
        .sms
        .schedule()
        .map_err(|e| CliError::Config(e.into()))?;
    let sender = config.sms.sender().map_err(|e| CliError::Config(e.into()))?;

    let handler = Arc::new(SendSmsDigestHandler::new(
        Arc::new(YamlSubscriberReader::new(&config.sms.subscribers_file)),
        Arc::new(TracingSmsSender::new(sender)),
        Arc::new(InMemorySmsLog::new()),
    ));

    if once {
        let report = handler.handle(clock.now()).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !config.sms_digest_active() {
        return Err(CliError::Disabled(
            "scheduled digest is disabled; set COSMIC_SELF__FEATURES__ENABLE_SMS_DIGEST=true or pass --once",
        ));
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = DigestScheduler::new(handler, clock, schedule);
    let loop_task = tokio::spawn(async move { scheduler.run(shutdown_rx).await });

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for ctrl-c; stopping scheduler");
    }
    info!("Shutdown requested");
    let _ = shutdown_tx.send(true);
    if let Err(e) = loop_task.await {
        error!(error = %e, "Scheduler task ended abnormally");
    }
    Ok(())
}
