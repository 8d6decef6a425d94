//! `termfolio` - play the portfolio terminal on a real one.
//!
//! Reads stdin line by line (each line is typed, then submitted) or plays a
//! `--keys` script, and prints the terminal as it changes.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use termfolio_cli::format::format_login_date;
use termfolio_cli::host::{play, play_lines, run_mounted};
use termfolio_cli::keys::parse_script;
use termfolio_cli::render::Renderer;
use termfolio_cli::store::JsonLoginStore;
use termfolio_cli::{CliConfig, CliError};
use termfolio_core::models::WindowRequest;
use termfolio_core::{Session, TerminalMachine, VirtualFs, WindowManager};

/// CLI arguments. Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about = "Portfolio terminal emulator")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON content document (defaults to the embedded one)
    #[arg(long)]
    content: Option<PathBuf>,
    /// Last-login JSON file
    #[arg(long)]
    store: Option<PathBuf>,
    /// User shown in the prompt
    #[arg(long)]
    user: Option<String>,
    /// Key script to play instead of reading stdin (e.g. "cd home<Enter>ls<Enter>")
    #[arg(long)]
    keys: Option<String>,
    /// Make the editor interactive immediately
    #[arg(long)]
    no_boot_delay: bool,
    /// Log filter, overrides RUST_LOG (e.g. "debug", "termfolio_core=trace")
    #[arg(long)]
    log_level: Option<String>,
}

/// Window manager that reports requests on stdout.
struct StdoutWindows;

impl WindowManager for StdoutWindows {
    fn focus_window(&mut self, request: &WindowRequest) {
        match &request.default_url {
            Some(url) => println!("[{}] {}", request.name, url),
            None => println!("[{}]", request.name),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termfolio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(filter: Option<&str>) {
    match filter {
        Some(filter) => env_logger::Builder::new().parse_filters(filter).init(),
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init()
        }
    }
}

fn load_config(args: &Args) -> Result<CliConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    if let Some(content) = &args.content {
        config.content_path = Some(content.clone());
    }
    if let Some(store) = &args.store {
        config.login_store_path = store.clone();
    }
    if let Some(user) = &args.user {
        config.prompt_user = user.clone();
    }
    if args.no_boot_delay {
        config.boot_delay_ms = 0;
    }
    Ok(config)
}

fn load_fs(config: &CliConfig) -> Result<VirtualFs, CliError> {
    match &config.content_path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(VirtualFs::from_json(&text)?)
        }
        None => Ok(VirtualFs::builtin()?),
    }
}

fn now_stamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format_login_date(secs)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let fs = load_fs(&config)?;
    log::info!("starting as {} with {:?}", config.prompt_user, config.content_path);

    let machine = TerminalMachine::new(Arc::new(fs), config.terminal_config());
    let store = JsonLoginStore::new(&config.login_store_path);
    let mut session = Session::mount(machine, StdoutWindows, store, now_stamp());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut renderer = Renderer::new(&config.prompt_user);
    session.focus();

    run_mounted(&mut session, now_stamp, |session| {
        renderer.banner(&mut out, &session.login_banner())?;
        match &args.keys {
            Some(script) => play(session, &mut renderer, &mut out, &parse_script(script)?),
            None => play_lines(session, &mut renderer, &mut out, io::stdin().lock()),
        }
    })
}
