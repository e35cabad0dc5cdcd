//! Creates and converts between
//!
//! - [`relative::Layout`], which is a logical description
//!   of how screens should be ordered, and
//! - [`absolute::Layout`], which is a physical description
//!   of at which pixel position and size each screen is
//!
//! See [`parse`] for a description of the format
//! which one can [`str::parse`] into [`relative::Layout`]
//!
//! Note: Conversion via [`relative::Layout::to_absolute`]
//! is not pure, but dependent on the currently running WM
//! to get screen resolutions and the works.
//!
//! Currently only support for Sway is implemented,
//! however, feel feel free to take a look inside [`comms`]
//! and open an issue or send a PR
//! if you'd like to add support for another WM!

pub mod absolute;
pub mod comms;
pub mod config;
pub mod convert;
pub mod engine;
pub mod geometry;
pub mod info;
pub mod parse;
pub mod relative;
pub mod store;
pub mod supervisor;

use std::collections::BTreeMap;

use clap::{ArgAction, Parser, Subcommand};
use config::{Config, LayoutDesc};
use eyre::{Context, ContextCompat, Result};
use store::Database;
use tracing::info;

pub type Map<K, V> = BTreeMap<K, V>;

/// Calculates the physical screen layout given a short relative layout description.
#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[allow(rustdoc::bare_urls)]
    /// Instead of using the machine-specific layout description from the config file,
    /// use the given layout description.
    ///
    /// See the README at https://github.com/MultisampledNight/layaway
    /// for details on the format.
    ///
    /// By default, the config file (`~/.config/layaway/config.toml` on Linux in most cases)
    /// is used to look up the layout description for the given hostname,
    /// falling back to the solver-driven arrangement below if none is defined.
    desc: Option<LayoutDesc>,

    /// Instead of applying the calculated layout,
    /// print the corresponding WM configuration to stdout.
    ///
    /// By default, the calculated layout is directly applied to the WM,
    /// so that it becomes effective.
    #[arg(short = 'n', long = "no-apply", action = ArgAction::SetFalse)]
    apply: bool,
}

/// Subcommands driving the constraint-solving daemon, as an alternative to
/// the default manual-DSL path above.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Watches the WM for output changes and keeps arrangements in sync,
    /// learning from manual edits and solving for unseen display sets.
    Daemon,
    /// Observes the current outputs once, looks up or solves an
    /// arrangement for them, and applies it.
    Apply,
    /// Observes the current (presumably manually-arranged) outputs once
    /// and stores their relation as the learned arrangement for this
    /// display set.
    Learn,
    /// Prints the current fingerprint and its stored arrangement, if any,
    /// as JSON, without touching the WM.
    Show,
}

pub fn run() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    match args.command {
        Some(Command::Daemon) => return run_daemon(),
        Some(Command::Apply) => return run_apply(),
        Some(Command::Learn) => return run_learn(),
        Some(Command::Show) => return run_show(),
        None => {}
    }

    let desc = args.desc.map_or_else(desc_from_config, Ok)?;

    let relative: relative::Layout = desc
        .parse()
        .context("Could not parse relative layout description")?;

    let mut comms = comms::establish().context("Could not establish connection to WM")?;
    let layout = relative
        .to_absolute(comms.as_mut())
        .context("Could not absolutize layout")?;

    if args.apply {
        comms
            .set_layout(&layout)
            .context("Could not set layout in WM")?;
    } else {
        for cmd in layout.to_sway_commands() {
            println!("{cmd}");
        }
    }

    Ok(())
}

pub fn desc_from_config() -> Result<LayoutDesc> {
    let config = Config::new()?;
    let desc = config
        .machine_layout()
        .context("Could not determine hostname to decide which layout to load")?
        .context("Config file does not define layout for this machine")?;
    Ok(desc.to_string())
}

fn run_daemon() -> Result<()> {
    let mut comms = comms::establish().context("Could not establish connection to WM")?;
    let mut db = Database::load().context("Could not load arrangement database")?;
    info!("daemon starting");
    supervisor::run(comms.as_mut(), &mut db).context("Supervisor loop failed")?;
    Ok(())
}

fn run_apply() -> Result<()> {
    let mut comms = comms::establish().context("Could not establish connection to WM")?;
    let mut db = Database::load().context("Could not load arrangement database")?;

    let outputs = comms.observe().context("Could not observe outputs")?;
    let fingerprint = store::fingerprint(outputs.iter().map(|o| o.identity.clone()).collect());

    let mut last_applied = None;
    supervisor::synthesize_and_apply(comms.as_mut(), &mut db, &outputs, fingerprint, &mut last_applied)
        .context("Could not synthesize and apply an arrangement")?;

    Ok(())
}

fn run_learn() -> Result<()> {
    let mut comms = comms::establish().context("Could not establish connection to WM")?;
    let mut db = Database::load().context("Could not load arrangement database")?;

    let outputs = comms.observe().context("Could not observe outputs")?;
    let fingerprint = store::fingerprint(outputs.iter().map(|o| o.identity.clone()).collect());
    let positions = outputs
        .iter()
        .map(|o| o.position)
        .collect::<Option<Vec<_>>>()
        .context("Not every output is currently active, nothing to learn from")?;
    let sizes = outputs.iter().map(|o| o.size).collect::<Vec<_>>();

    let constraints = engine::normalize::positions_to_constraints(&sizes, &positions)
        .map_err(|_| eyre::eyre!("Current arrangement isn't representable as constraints"))?;

    db.put(
        fingerprint.clone(),
        store::StoredArrangement {
            fingerprint,
            constraints,
            order: outputs.iter().map(|o| o.identity.clone()).collect(),
        },
    );
    db.save().context("Could not save arrangement database")?;

    Ok(())
}

fn run_show() -> Result<()> {
    let mut comms = comms::establish().context("Could not establish connection to WM")?;
    let db = Database::load().context("Could not load arrangement database")?;

    let outputs = comms.observe().context("Could not observe outputs")?;
    let fingerprint = store::fingerprint(outputs.iter().map(|o| o.identity.clone()).collect());
    let stored = db.get(&fingerprint);

    let report = serde_json::json!({
        "fingerprint": fingerprint,
        "stored": stored,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
