mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod term;
use crate::app::App;
use crate::args::{Arguments, RunOptions};
use crate::config::Config;
use crate::term::Console;
use anyhow::Context;
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::process::ExitCode;

static BANNER: &[&str] = &[
    "Starting Snake Game...",
    "Use W, A, S, D to move.",
    "Press 'q' to quit at any time.",
    "Press Enter to start...",
];

fn main() -> ExitCode {
    match Arguments::from_env() {
        Ok(Arguments::Run(opts)) => exit_with(run(opts)),
        Ok(Arguments::Help) => {
            print!("{}", args::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("asciisnake: {e}\n\n{}", args::USAGE);
            ExitCode::from(2)
        }
    }
}

fn run(opts: RunOptions) -> anyhow::Result<()> {
    let config = load_config(opts.config.as_deref())?;
    if let Some(path) = opts.log_file.as_deref().or(config.log_file.as_deref()) {
        init_logging(path, opts.verbose)?;
    }
    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::debug!("Configuration: {config:?}");
    show_banner()?;

    let mut console = Console::open().context("failed to prepare terminal for input")?;
    let keyboard = console.keyboard();
    log::debug!("Reading keys from {keyboard:?}");
    let r = Terminal::new(CrosstermBackend::new(io::stdout()))
        .and_then(|mut terminal| App::new(&config, keyboard).run(&mut terminal));
    // Restore the terminal before anything gets printed about what happened
    let restored = console.restore();
    session_result(r, restored)?;
    println!("Thanks for playing!");
    Ok(())
}

/// Combine the outcome of the game loop with that of restoring the terminal.
/// A loop failure is the one reported; a restore failure alongside it is only
/// logged.
fn session_result(played: io::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    match (played, restored) {
        (Err(e), Err(re)) => {
            log::error!("Failed to restore terminal: {re}");
            Err(anyhow::Error::new(e).context("game loop failed"))
        }
        (Err(e), Ok(())) => Err(anyhow::Error::new(e).context("game loop failed")),
        (Ok(()), restored) => restored.context("failed to restore terminal"),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Config::load(p, false)
            .with_context(|| format!("failed to load configuration from {}", p.display())),
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true)
                .with_context(|| format!("failed to load configuration from {}", p.display())),
            // Nowhere to look for a config file, so there isn't one
            Err(_) => Ok(Config::default()),
        },
    }
}

fn init_logging(path: &Path, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = fs_err::File::create(path).context("failed to open log file")?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logging")?;
    Ok(())
}

/// Print the instructions and wait for the player to press Enter
fn show_banner() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in BANNER {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    io::stdin().read_line(&mut String::new())?;
    Ok(())
}

fn exit_with(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("asciisnake: An error occurred: {e:?}");
            ExitCode::from(2)
        }
    }
}
