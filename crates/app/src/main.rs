use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quiz_core::model::UserId;
use services::{
    AttemptService, Clock, ContentConfig, HttpTestContent, Identity, StaticIdentity,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidServerUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidServerUrl { raw } => write!(f, "invalid --server-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    attempts: Arc<AttemptService>,
    identity: Arc<dyn Identity>,
}

impl UiApp for DesktopApp {
    fn attempts(&self) -> Arc<AttemptService> {
        Arc::clone(&self.attempts)
    }

    fn identity(&self) -> Arc<dyn Identity> {
        Arc::clone(&self.identity)
    }
}

struct Args {
    server_url: String,
    user_id: Option<UserId>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--server-url <url>] [--user-id <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --server-url http://localhost:4000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SERVER_URL, QUIZ_USER_ID");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut server_url = std::env::var("QUIZ_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:4000".to_string());
        let mut user_id = std::env::var("QUIZ_USER_ID").ok().map(UserId::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server-url" => {
                    let value = require_value(args, "--server-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidServerUrl { raw: value });
                    }
                    server_url = value;
                }
                "--user-id" => {
                    let value = require_value(args, "--user-id")?;
                    user_id = Some(UserId::new(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            server_url,
            user_id,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let content = Arc::new(HttpTestContent::new(ContentConfig::new(
        parsed.server_url.clone(),
    )));
    let attempts = Arc::new(AttemptService::new(Clock::default(), content));
    let identity: Arc<dyn Identity> = match parsed.user_id {
        Some(user_id) => Arc::new(StaticIdentity::signed_in(user_id)),
        None => Arc::new(StaticIdentity::signed_out()),
    };
    info!(server_url = %parsed.server_url, signed_in = identity.is_authenticated(), "launching");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { attempts, identity });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Prept")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
