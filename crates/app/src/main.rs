use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;

use services::{AuthService, ExamApi, HttpExamApi, TokenCell};
use storage::FileTokenStore;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api <base_url>] [--token-file <path>] [--downloads <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api http://127.0.0.1:8000/api");
    eprintln!("  --token-file <config_dir>/examsight/token");
    eprintln!("  --downloads <download_dir>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EXAMSIGHT_API_URL, EXAMSIGHT_TOKEN_FILE, EXAMSIGHT_DOWNLOADS_DIR, RUST_LOG");
}

struct Args {
    api_url: String,
    token_file: PathBuf,
    downloads_dir: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("EXAMSIGHT_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api".into());
        let mut token_file = std::env::var("EXAMSIGHT_TOKEN_FILE")
            .map_or_else(|_| default_token_file(), PathBuf::from);
        let mut downloads_dir = std::env::var("EXAMSIGHT_DOWNLOADS_DIR")
            .map_or_else(|_| default_downloads_dir(), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    let value = require_value(args, "--api")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--token-file" => {
                    token_file = PathBuf::from(require_value(args, "--token-file")?);
                }
                "--downloads" => {
                    downloads_dir = PathBuf::from(require_value(args, "--downloads")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            token_file,
            downloads_dir,
        })
    }
}

fn default_token_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("examsight")
        .join("token")
}

fn default_downloads_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

struct DesktopApp {
    auth: Arc<AuthService>,
    api: Arc<dyn ExamApi>,
    downloads_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn api(&self) -> Arc<dyn ExamApi> {
        Arc::clone(&self.api)
    }

    fn downloads_dir(&self) -> PathBuf {
        self.downloads_dir.clone()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    info!(api = %parsed.api_url, token_file = %parsed.token_file.display(), "starting examsight");

    // One shared credential cell: the HTTP client reads it, the auth service
    // is the only writer.
    let token = TokenCell::new();
    let api: Arc<dyn ExamApi> = Arc::new(HttpExamApi::new(parsed.api_url.as_str(), token.clone())?);
    let store = Arc::new(FileTokenStore::new(parsed.token_file));
    let auth = Arc::new(AuthService::new(Arc::clone(&api), store, token));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        auth,
        api,
        downloads_dir: parsed.downloads_dir,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Examsight")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
