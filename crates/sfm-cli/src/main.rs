mod args;
mod input;
mod prompt;
mod render;

use std::fs::{self, OpenOptions};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use sfm_core::{
    Command, Config, Controller, CoreError, Launcher, LocalBackend, LocalLister, SystemLauncher,
};
use tracing_subscriber::EnvFilter;

use crate::args::CliArgs;
use crate::input::{parse_line, InputAction, InputState, HELP};
use crate::prompt::TerminalPrompt;

type App<R, W, X> = Controller<LocalBackend, LocalLister, TerminalPrompt<R, W>, X>;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let (config, config_error) = load_config(args.config.as_deref());
    init_logging(&config)?;
    if let Some(e) = config_error {
        tracing::warn!("config error, using defaults: {e}");
        eprintln!("sfm: {e}; using default settings");
    }

    let mut app = open_app(&config, args.start_dir)?;
    run(&mut app)?;
    tracing::info!("exiting");
    Ok(())
}

/// Loads the config file, keeping defaults when it is missing or malformed.
fn load_config(path: Option<&Path>) -> (Config, Option<CoreError>) {
    let Some(path) = path.map(Path::to_path_buf).or_else(Config::default_path) else {
        return (Config::default(), None);
    };
    match Config::load_or_default(&path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

/// Logs to a file so the output does not interleave with the session.
fn init_logging(config: &Config) -> Result<()> {
    let path = config.log.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("SFM_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

/// Directories to try at startup, most specific first.
fn start_candidates(arg: Option<PathBuf>, config: &Config) -> Vec<PathBuf> {
    arg.into_iter()
        .chain(config.general.start_dir.clone())
        .chain(dirs::home_dir())
        .chain(std::env::current_dir().ok())
        .chain(Some(PathBuf::from("/")))
        .collect()
}

fn open_app(
    config: &Config,
    start_dir: Option<PathBuf>,
) -> Result<App<std::io::StdinLock<'static>, std::io::Stdout, SystemLauncher>> {
    let mut last_error = None;
    for dir in start_candidates(start_dir, config) {
        match Controller::new(
            LocalBackend::new(),
            config.lister(),
            TerminalPrompt::stdio(),
            SystemLauncher,
            &dir,
        ) {
            Ok(app) => return Ok(app),
            Err(e) => {
                tracing::warn!("cannot start in {}: {e}", dir.display());
                eprintln!("sfm: cannot open {}: {e}", dir.display());
                last_error = Some(e);
            }
        }
    }
    match last_error {
        Some(e) => Err(e).context("no usable start directory"),
        None => anyhow::bail!("no usable start directory"),
    }
}

/// Reads commands until `quit` or end of input.
fn run<R: BufRead, W: Write, X: Launcher>(app: &mut App<R, W, X>) -> Result<()> {
    let mut state = InputState::new();
    show_listing(app)?;

    loop {
        let prompt = format!("{}> ", app.current_dir().display());
        let Some(line) = app.prompt_mut().read_line(&prompt)? else {
            break;
        };

        match parse_line(&line, &state) {
            InputAction::None => {}
            InputAction::Quit => break,
            InputAction::Help => writeln!(app.prompt_mut().writer_mut(), "{HELP}")?,
            InputAction::List => show_listing(app)?,
            InputAction::Pwd => {
                let dir = app.current_dir().display().to_string();
                writeln!(app.prompt_mut().writer_mut(), "{dir}")?;
            }
            InputAction::ShowClipboard => {
                let clipboard = app.clipboard().clone();
                render::clipboard(app.prompt_mut().writer_mut(), &clipboard)?;
            }
            InputAction::Select(name) => {
                if app.entries().iter().any(|e| e.matches(&name)) {
                    writeln!(app.prompt_mut().writer_mut(), "selected '{name}'")?;
                    state = state.with_selected(Some(name));
                } else {
                    writeln!(app.prompt_mut().writer_mut(), "error: no entry named '{name}'")?;
                }
            }
            InputAction::Unknown(text) => {
                writeln!(
                    app.prompt_mut().writer_mut(),
                    "unknown command: {text} (type 'help')"
                )?;
            }
            InputAction::Command(command) => {
                state = dispatch(app, command, state)?;
            }
        }
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write, X: Launcher>(
    app: &mut App<R, W, X>,
    command: Command,
    state: InputState,
) -> Result<InputState> {
    let before = app.current_dir().to_path_buf();
    let changes_listing = matches!(
        command,
        Command::NewFolder
            | Command::Rename(_)
            | Command::Delete(_)
            | Command::Paste
            | Command::Refresh
    );
    let activated = match &command {
        Command::Activate(name) => Some(name.clone()),
        _ => None,
    };

    let Some(outcome) = app.handle_command(command) else {
        writeln!(app.prompt_mut().writer_mut(), "cancelled")?;
        return Ok(state);
    };
    render::outcome(app.prompt_mut().writer_mut(), &outcome)?;

    let moved = app.current_dir() != before;
    if moved || (changes_listing && outcome.is_success()) {
        show_listing(app)?;
    }

    Ok(if moved {
        state.with_selected(None)
    } else if activated.is_some() && outcome.is_success() {
        state.with_selected(activated)
    } else if changes_listing && outcome.is_success() {
        // The selected entry may have been renamed or deleted.
        state.with_selected(None)
    } else {
        state
    })
}

fn show_listing<R: BufRead, W: Write, X: Launcher>(app: &mut App<R, W, X>) -> Result<()> {
    let dir = app.current_dir().to_path_buf();
    let entries = app.entries().to_vec();
    render::listing(app.prompt_mut().writer_mut(), &dir, &entries)?;
    Ok(())
}
