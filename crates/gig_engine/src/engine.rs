use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use gig_core::Posting;
use gig_logging::{gig_error, gig_info};

use crate::fetch::{FetchSettings, JobSource, ReqwestJobSource};
use crate::image_cache::{ImageCache, MemoryImageCache};
use crate::listing::load_listing;
use crate::logo::{fallback_logo, LogoLoader};
use crate::snapshot::{PersistenceGateway, RonSnapshotStore};
use crate::{EngineEvent, FailureKind, FetchError};

pub const DEFAULT_ENDPOINT: &str = "http://185.174.137.159/jobs";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub fetch: FetchSettings,
}

impl EngineConfig {
    pub fn default_with_state_dir(state_dir: PathBuf) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state_dir,
            fetch: FetchSettings::default(),
        }
    }
}

/// Collaborators the worker drives.
#[derive(Clone)]
pub struct EngineParts {
    pub source: Arc<dyn JobSource>,
    pub gateway: Arc<dyn PersistenceGateway>,
    pub cache: Arc<dyn ImageCache>,
}

impl EngineParts {
    pub fn from_config(config: &EngineConfig) -> Result<Self, FetchError> {
        let source = ReqwestJobSource::new(config.endpoint.clone(), config.fetch.clone())?;
        Ok(Self {
            source: Arc::new(source),
            gateway: Arc::new(RonSnapshotStore::new(config.state_dir.clone())),
            cache: Arc::new(MemoryImageCache::new()),
        })
    }
}

enum EngineCommand {
    LoadListing,
    Persist(Vec<Posting>),
    LoadLogo { url: String },
    Flush(mpsc::Sender<()>),
}

/// Sending side of the engine. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side of the engine, owned by whoever marshals events onto the
/// state-owning thread.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts the worker thread.
    ///
    /// Listing loads and snapshot writes run one at a time in command order;
    /// logo loads run concurrently on the runtime.
    pub fn spawn(parts: EngineParts) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_worker(parts, cmd_rx, event_tx));

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn load_listing(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadListing);
    }

    pub fn persist(&self, postings: Vec<Posting>) {
        let _ = self.cmd_tx.send(EngineCommand::Persist(postings));
    }

    pub fn load_logo(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadLogo { url: url.into() });
    }

    /// Waits until every listing load and snapshot write queued before this
    /// call has finished. Returns `false` on timeout or a stopped worker.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (done_tx, done_rx) = mpsc::channel();
        if self.cmd_tx.send(EngineCommand::Flush(done_tx)).is_err() {
            return false;
        }
        done_rx.recv_timeout(timeout).is_ok()
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the worker has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn run_worker(
    parts: EngineParts,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            gig_error!("Failed to start engine runtime: {}", err);
            run_degraded(parts, cmd_rx, event_tx, err.to_string());
            return;
        }
    };
    let loader = LogoLoader::new(parts.source.clone(), parts.cache.clone());

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::LoadListing => {
                let result =
                    runtime.block_on(load_listing(parts.gateway.as_ref(), parts.source.as_ref()));
                if let Err(err) = &result {
                    gig_error!("Listing load failed: {}", err);
                }
                let _ = event_tx.send(EngineEvent::ListingLoaded(result));
            }
            EngineCommand::Persist(postings) => persist(parts.gateway.as_ref(), &postings),
            EngineCommand::LoadLogo { url } => {
                let loader = loader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let logo = loader.load(&url).await;
                    let _ = event_tx.send(EngineEvent::LogoReady { url, logo });
                });
            }
            EngineCommand::Flush(done_tx) => {
                let _ = done_tx.send(());
            }
        }
    }
    gig_info!("Engine command channel closed; worker exiting");
}

/// Keeps the host responsive without an async runtime: loads fail once,
/// writes still happen, logos fall back.
fn run_degraded(
    parts: EngineParts,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: String,
) {
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::LoadListing => {
                let err = FetchError::new(FailureKind::Network, reason.clone());
                let _ = event_tx.send(EngineEvent::ListingLoaded(Err(err)));
            }
            EngineCommand::Persist(postings) => persist(parts.gateway.as_ref(), &postings),
            EngineCommand::LoadLogo { url } => {
                let _ = event_tx.send(EngineEvent::LogoReady {
                    url,
                    logo: fallback_logo(),
                });
            }
            EngineCommand::Flush(done_tx) => {
                let _ = done_tx.send(());
            }
        }
    }
}

fn persist(gateway: &dyn PersistenceGateway, postings: &[Posting]) {
    if let Err(err) = gateway.save(postings) {
        gig_error!("Failed to persist snapshot: {}", err);
    }
}
