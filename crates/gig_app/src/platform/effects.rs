use gig_core::{Effect, ListingOrigin, LoadFailure, LoadFailureKind, LogoSource, Msg};
use gig_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, LogoOrigin};
use gig_logging::{gig_debug, gig_info};

/// Hands core effects to the engine worker.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadListing => {
                    gig_info!("LoadListing");
                    self.engine.load_listing();
                }
                Effect::PersistSnapshot(postings) => {
                    gig_debug!("PersistSnapshot postings={}", postings.len());
                    self.engine.persist(postings);
                }
                Effect::LoadLogo { url } => {
                    gig_debug!("LoadLogo url={}", url);
                    self.engine.load_logo(url);
                }
            }
        }
    }
}

/// Translates an engine event into the message the core understands.
pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingLoaded(Ok(load)) => Msg::ListingLoaded {
            origin: load.origin,
            postings: load.postings,
        },
        EngineEvent::ListingLoaded(Err(err)) => Msg::ListingFailed(map_failure(err)),
        EngineEvent::LogoReady { url, logo } => Msg::LogoLoaded {
            url,
            source: match logo.origin {
                LogoOrigin::Remote => LogoSource::Remote,
                LogoOrigin::Fallback => LogoSource::Fallback,
            },
        },
    }
}

fn map_failure(err: FetchError) -> LoadFailure {
    let kind = match err.kind {
        FailureKind::InvalidUrl => LoadFailureKind::InvalidUrl,
        FailureKind::NotFound => LoadFailureKind::NotFound,
        FailureKind::Decode => LoadFailureKind::Decode,
        FailureKind::HttpStatus(_)
        | FailureKind::Timeout
        | FailureKind::TooLarge { .. }
        | FailureKind::Network => LoadFailureKind::Transport,
    };
    LoadFailure {
        kind,
        message: err.to_string(),
    }
}

/// Origin label used by the status line.
pub fn origin_label(origin: ListingOrigin) -> &'static str {
    match origin {
        ListingOrigin::Restored => "saved",
        ListingOrigin::Fetched => "server",
    }
}
