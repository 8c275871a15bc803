//! Gig board engine: remote listing source, snapshot persistence, logo
//! cache and the background worker executing core effects.
mod engine;
mod fetch;
mod image_cache;
mod listing;
mod logo;
mod persist;
mod snapshot;
mod types;
mod wire;

pub use engine::{EngineConfig, EngineEvents, EngineHandle, EngineParts, DEFAULT_ENDPOINT};
pub use fetch::{FetchSettings, JobSource, ReqwestJobSource};
pub use image_cache::{ImageCache, MemoryImageCache};
pub use listing::load_listing;
pub use logo::{fallback_logo, LogoLoader, FALLBACK_LOGO};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use snapshot::{MemorySnapshotStore, PersistenceGateway, RonSnapshotStore, STATE_FILENAME};
pub use types::{EngineEvent, FailureKind, FetchError, ListingLoad, Logo, LogoOrigin};
pub use wire::decode_postings;
