//! `nightswitch` binary: resolve, toggle, and inspect the theme
//! preference over a file-backed store.
//!
//! No inversion engine ships here; transitions are logged so the binary is
//! useful for driving the store and watching what the resolver decides.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nightswitch::{
    detect_system_mode, resolve_startup, ColorMode, FetchMethod, FileStore, Inverter, Preference,
    ThemeApplier,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Preference store: a YAML key/value file, created on first write.
    #[arg(long, default_value = "nightswitch.yaml")]
    store: PathBuf,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the startup resolution: stored preference plus OS signal.
    Resolve,
    /// Turn dark mode on and record the choice.
    Enable,
    /// Turn dark mode off and record the choice.
    Disable,
    /// Print the recorded preference and the ambient OS signal.
    Status,
}

/// Engine stand-in that logs transitions instead of recoloring anything.
struct LogInverter;

impl Inverter for LogInverter {
    fn enable(&mut self) {
        info!("inversion engine enabled");
    }

    fn disable(&mut self) {
        info!("inversion engine disabled");
    }

    fn set_fetch_method(&mut self, _fetch: FetchMethod) {
        info!("fetch hook installed");
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn preference_label(preference: Option<Preference>) -> &'static str {
    match preference {
        Some(Preference::Dark) => "dark",
        Some(Preference::Light) => "light",
        None => "unset",
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut store = FileStore::open(&args.store)?;
    let mut engine = LogInverter;

    match args.command {
        Command::Resolve => {
            resolve_startup(&mut store, &mut engine)?;
            println!("resolved: {}", preference_label(Preference::load(&store)?));
        }
        Command::Enable => {
            ThemeApplier::new(&mut store, &mut engine).activate()?;
            println!("dark mode on");
        }
        Command::Disable => {
            ThemeApplier::new(&mut store, &mut engine).deactivate()?;
            println!("dark mode off");
        }
        Command::Status => {
            println!("preference: {}", preference_label(Preference::load(&store)?));
            let ambient = match detect_system_mode() {
                ColorMode::Dark => "dark",
                ColorMode::Light => "light",
            };
            println!("system: {ambient}");
        }
    }

    Ok(())
}
