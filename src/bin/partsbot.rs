//! Runs the PartsBot dispatcher against the terminal.
//!
//! Usage:
//!
//! ```text
//! partsbot [config-path]
//! ```
//!
//! Each stdin line is delivered as a message from `console-user` in the
//! `console` guild. Replies are written to stdout; logs go to stderr. The
//! bot exits at end of input once every launched command has finished.

use camino::{Utf8Path, Utf8PathBuf};
use mockable::DefaultClock;
use partsbot::commands::register_builtin;
use partsbot::config::{BotConfig, ConfigError};
use partsbot::dispatch::adapters::ConsoleGateway;
use partsbot::dispatch::domain::{
    BotIdentity, ChannelId, GatewayEvent, GuildId, InboundMessage, MessageId, RegistrationError,
    UserId,
};
use partsbot::dispatch::services::{Dispatcher, MessageDispatch, Router};
use partsbot::guild::adapters::InMemoryGuildRepository;
use partsbot::guild::ports::GuildRepositoryError;
use partsbot::guild::services::GuildService;
use partsbot::telemetry;
use std::env;
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const CONSOLE_CHANNEL: &str = "console";
const CONSOLE_GUILD: &str = "console";
const CONSOLE_USER: &str = "console-user";
const BOT_USER: &str = "console-bot";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum BotError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid log filter: {0}")]
    Telemetry(#[from] tracing_subscriber::filter::ParseError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("command registration failed: {0}")]
    Registration(#[from] RegistrationError),
    #[error("guild registration failed: {0}")]
    Guild(#[from] GuildRepositoryError),
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
}

fn main() -> Result<(), BoxError> {
    let config = load_config(collect_args()?.as_deref())?;
    telemetry::init(&config.logging).map_err(BotError::from)?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(BotError::RuntimeInit)?;
    runtime.block_on(run(&config)).map_err(Into::into)
}

fn collect_args() -> Result<Option<Utf8PathBuf>, BotError> {
    let mut args = env::args_os().skip(1);
    let path = args
        .next()
        .map(|arg_os| {
            arg_os
                .into_string()
                .map(Utf8PathBuf::from)
                .map_err(|_| BotError::InvalidArgs("argument is not valid UTF-8".to_owned()))
        })
        .transpose()?;
    if args.next().is_some() {
        return Err(BotError::InvalidArgs(
            "expected at most one config path".to_owned(),
        ));
    }
    Ok(path)
}

fn load_config(path: Option<&Utf8Path>) -> Result<BotConfig, BotError> {
    let Some(config_path) = path else {
        return Ok(BotConfig::default());
    };
    Ok(BotConfig::load(config_path)?)
}

async fn run(config: &BotConfig) -> Result<(), BotError> {
    let guilds = GuildService::new(
        Arc::new(InMemoryGuildRepository::new()),
        Arc::new(DefaultClock),
    );
    let mut router = Router::new();
    register_builtin(&mut router, &guilds, config.owner_id())?;
    let dispatcher = Dispatcher::new(
        Arc::new(router),
        Arc::new(ConsoleGateway::new(io::stdout())),
        BotIdentity::new(UserId::new(BOT_USER)),
        &config.dispatch_options(),
    );
    info!(prefix = %config.bot.prefix, "partsbot console ready");

    let mut pending: Vec<JoinHandle<()>> = Vec::new();
    let join = GatewayEvent::GuildCreate {
        guild_id: GuildId::new(CONSOLE_GUILD),
        name: "Console".to_owned(),
    };
    deliver(&dispatcher, &guilds, join, &mut pending).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut sequence: u64 = 0;
    while let Some(line) = lines.next_line().await.map_err(BotError::Input)? {
        if line.trim().is_empty() {
            continue;
        }
        sequence = sequence.saturating_add(1);
        let event = parse_line(&line, sequence);
        deliver(&dispatcher, &guilds, event, &mut pending).await?;
    }

    for handle in pending {
        if let Err(err) = handle.await {
            warn!(error = %err, "command supervisor ended abnormally");
        }
    }
    Ok(())
}

async fn deliver(
    dispatcher: &Dispatcher,
    guilds: &GuildService<InMemoryGuildRepository, DefaultClock>,
    event: GatewayEvent,
    pending: &mut Vec<JoinHandle<()>>,
) -> Result<(), BotError> {
    match event {
        GatewayEvent::MessageCreate(message) => {
            if let MessageDispatch::Launched { handle, .. } =
                dispatcher.dispatch_message(&message).await
            {
                track(pending, handle);
            }
        }
        GatewayEvent::GuildCreate { guild_id, name } => {
            guilds.ensure_registered(&guild_id).await?;
            info!(guild = %guild_id, %name, "joined guild");
        }
        interaction @ GatewayEvent::InteractionCreate(_) => {
            dispatcher.on_event(&interaction).await;
        }
    }
    Ok(())
}

/// Keeps `handle` for the final join, dropping supervisors that already ended.
fn track(pending: &mut Vec<JoinHandle<()>>, handle: JoinHandle<()>) {
    pending.retain(|launched| !launched.is_finished());
    pending.push(handle);
}

fn parse_line(line: &str, sequence: u64) -> GatewayEvent {
    GatewayEvent::MessageCreate(
        InboundMessage::new(
            MessageId::new(format!("console-{sequence}")),
            ChannelId::new(CONSOLE_CHANNEL),
            UserId::new(CONSOLE_USER),
            line,
        )
        .in_guild(GuildId::new(CONSOLE_GUILD)),
    )
}
