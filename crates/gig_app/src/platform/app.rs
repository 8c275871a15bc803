use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use gig_core::{update, AppState, Msg};
use gig_engine::{EngineEvents, EngineHandle, EngineParts};
use gig_logging::{gig_info, gig_warn};

use super::effects::{map_event, EffectRunner};
use super::logging;
use super::ui::input::{parse_command, Command, HELP_TEXT};
use super::ui::render::render;
use crate::config::{AppConfig, CONFIG_FILENAME};

const SHUTDOWN_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything that reaches the state-owning thread.
enum HostEvent {
    Msg(Msg),
    Input(Command),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load(Path::new(CONFIG_FILENAME))
        .with_context(|| format!("failed to load {CONFIG_FILENAME}"))?;
    logging::initialize(config.log_destination);
    gig_info!(
        "Starting gig board: endpoint={} state_dir={:?}",
        config.endpoint,
        config.state_dir
    );

    let parts = EngineParts::from_config(&config.engine_config())
        .context("failed to build the listing client")?;
    let (engine, events) = EngineHandle::spawn(parts);

    let (host_tx, host_rx) = mpsc::channel::<HostEvent>();
    spawn_event_forwarder(events, host_tx.clone());
    spawn_input_reader(host_tx);

    let mut host = Host::new(engine.clone());
    println!("{HELP_TEXT}");
    host.dispatch(Msg::Started);

    for event in host_rx {
        match event {
            HostEvent::Msg(msg) | HostEvent::Input(Command::Msg(msg)) => host.dispatch(msg),
            HostEvent::Input(Command::Redraw) => host.render(),
            HostEvent::Input(Command::Help) => println!("{HELP_TEXT}"),
            HostEvent::Input(Command::Unknown(line)) => {
                println!("Unknown command {line:?}; type `help`.");
            }
            HostEvent::Input(Command::Quit) | HostEvent::InputClosed => break,
        }
    }

    if !engine.flush(SHUTDOWN_FLUSH_TIMEOUT) {
        gig_warn!("Pending snapshot writes did not finish before shutdown");
    }
    gig_info!("Gig board stopped");
    Ok(())
}

/// Owns the core state; only touched from the main thread.
struct Host {
    state: AppState,
    effects: EffectRunner,
}

impl Host {
    fn new(engine: EngineHandle) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(engine),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        // Persistence is queued before the render that shows the new total.
        self.effects.enqueue(effects);
        if was_dirty {
            self.render();
        }
    }

    fn render(&self) {
        let lines = render(&self.state.view());
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out);
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

fn spawn_event_forwarder(events: EngineEvents, host_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if host_tx.send(HostEvent::Msg(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn spawn_input_reader(host_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    gig_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if let Some(command) = parse_command(&line) {
                if host_tx.send(HostEvent::Input(command)).is_err() {
                    return;
                }
            }
        }
        let _ = host_tx.send(HostEvent::InputClosed);
    });
}
