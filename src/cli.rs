//! CLI interface for Lucy.
//!
//! With no subcommand, Lucy opens the terminal UI. The other subcommands
//! are non-interactive: arguments in, structured output out.
//!
//! - `lucy play`: the interactive story (default).
//! - `lucy replay <events...>`: feed events to a fresh session, print a JSON transcript.
//! - `lucy stages`: list the story's stages and choices.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::assets::FsAssets;
use crate::config::Config;
use crate::model::{Event, Progress};
use crate::session::Session;
use crate::story::Registry;
use crate::{logging, tui};

use format::format_stage;

/// Lucy: help Lucy get ready for her date.
#[derive(Debug, Parser)]
#[command(name = "lucy", after_long_help = EVENTS_HELP)]
pub struct Cli {
    /// Directory holding title.png, jumpscare.png and assets/.
    /// Overrides `LUCY_ASSETS` and the config file.
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const EVENTS_HELP: &str = r"Events (for replay):
  start | exit | advance | restart | retry
  primary:<key>     pick an outfit choice (e.g. primary:1)
  secondary:<key>   pick an ominous choice (e.g. secondary:ignore)

Example:
  lucy replay start advance primary:1 advance advance secondary:ignore primary:2";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play the story in the terminal.
    Play,

    /// Feed events to a fresh session and print a JSON transcript.
    ///
    /// Events come from the command line, a script file (one per line,
    /// `#` starts a comment), or both; script events run first.
    /// Stops early if the session exits.
    Replay {
        /// Events in text form.
        events: Vec<String>,

        /// Read events from this file before the command-line ones.
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// List the story's stages.
    Stages {
        /// Show only this stage.
        #[arg(long)]
        stage: Option<u8>,

        /// Print JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();
    let registry = Registry::builtin().map_err(|e| format!("invalid story: {e}"))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            if let Some(path) = config.log_file() {
                logging::init_file(config, &path)?;
            }
            let assets = FsAssets::new(config.asset_root(cli.assets.as_deref()));
            info!(root = %assets.root().display(), "starting terminal ui");
            tui::run(registry, &assets).map_err(|e| format!("terminal error: {e}"))
        }
        Command::Replay { events, script } => {
            logging::init_stderr(config)?;
            cmd_replay(registry, script.as_deref(), &events)
        }
        Command::Stages { stage, json } => {
            logging::init_stderr(config)?;
            cmd_stages(registry, stage, json)
        }
    }
}

/// One event and where it left the story.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    event: Event,
    scene: &'static str,
    stage: u8,
    tension: u8,
}

/// The JSON printed by `replay`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Transcript {
    session: Uuid,
    started_at: Timestamp,
    steps: Vec<Step>,
    exited: bool,
    progress: Progress,
}

fn cmd_replay(registry: &Registry, script: Option<&Path>, args: &[String]) -> Result<(), String> {
    let mut events = match script {
        Some(path) => read_script(path)?,
        None => Vec::new(),
    };
    for arg in args {
        events.push(arg.parse::<Event>().map_err(|e| e.to_string())?);
    }

    let transcript = replay(registry, events);
    let json = serde_json::to_string_pretty(&transcript)
        .map_err(|e| format!("failed to serialize transcript: {e}"))?;
    println!("{json}");
    Ok(())
}

fn replay(registry: &Registry, events: Vec<Event>) -> Transcript {
    let mut session = Session::new(registry);
    let mut steps = Vec::with_capacity(events.len());
    let mut exited = false;

    for event in events {
        if !session.dispatch(&event) {
            exited = true;
            break;
        }
        let progress = session.progress();
        steps.push(Step {
            scene: progress.scene.name(),
            stage: progress.stage,
            tension: progress.tracker.tension.level(),
            event,
        });
    }

    Transcript {
        session: session.id,
        started_at: session.started_at,
        steps,
        exited,
        progress: *session.progress(),
    }
}

/// Parse a replay script: one event per line, blank lines and `#` comments skipped.
fn read_script(path: &Path) -> Result<Vec<Event>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    parse_script(&contents).map_err(|e| format!("{}: {e}", path.display()))
}

fn parse_script(contents: &str) -> Result<Vec<Event>, String> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| line.parse::<Event>().map_err(|e| format!("line {n}: {e}")))
        .collect()
}

fn cmd_stages(registry: &Registry, number: Option<u8>, json: bool) -> Result<(), String> {
    let stages = match number {
        Some(n) => {
            let stage = registry
                .stages()
                .iter()
                .find(|s| s.number == n)
                .ok_or_else(|| format!("no stage {n} (the story has {})", registry.final_stage()))?;
            std::slice::from_ref(stage)
        }
        None => registry.stages(),
    };

    if json {
        let out = serde_json::to_string_pretty(stages)
            .map_err(|e| format!("failed to serialize stages: {e}"))?;
        println!("{out}");
    } else {
        for stage in stages {
            println!("{}", format_stage(stage));
        }
    }
    Ok(())
}
