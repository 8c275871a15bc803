use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gig_core::Posting;
use gig_logging::{gig_debug, gig_info, gig_warn};
use serde::{Deserialize, Serialize};

use crate::persist::{AtomicFileWriter, PersistError};

pub const STATE_FILENAME: &str = ".gig_state.ron";

/// Durable storage for the full posting collection.
pub trait PersistenceGateway: Send + Sync {
    /// Empty when nothing is stored or the stored blob cannot be decoded.
    fn load(&self) -> Vec<Posting>;

    /// Callers log failures; the in-memory state stays authoritative.
    fn save(&self, postings: &[Posting]) -> Result<(), PersistError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct PersistedPosting {
    id: String,
    profession: String,
    employer: String,
    salary: f64,
    posted_at: String,
    logo_url: Option<String>,
    selected: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    postings: Vec<PersistedPosting>,
}

impl From<&Posting> for PersistedPosting {
    fn from(posting: &Posting) -> Self {
        Self {
            id: posting.id.clone(),
            profession: posting.profession.clone(),
            employer: posting.employer.clone(),
            salary: posting.salary,
            posted_at: posting.posted_at.clone(),
            logo_url: posting.logo_url.clone(),
            selected: posting.selected,
        }
    }
}

impl From<PersistedPosting> for Posting {
    fn from(persisted: PersistedPosting) -> Self {
        Self {
            id: persisted.id,
            profession: persisted.profession,
            employer: persisted.employer,
            salary: persisted.salary,
            posted_at: persisted.posted_at,
            logo_url: persisted.logo_url,
            selected: persisted.selected,
        }
    }
}

/// Snapshot kept as RON in `{state_dir}/.gig_state.ron`.
#[derive(Debug, Clone)]
pub struct RonSnapshotStore {
    state_dir: PathBuf,
}

impl RonSnapshotStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.state_dir.join(STATE_FILENAME)
    }

    fn read(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                gig_debug!("No persisted snapshot at {:?}", path);
                None
            }
            Err(err) => {
                gig_warn!("Failed to read persisted snapshot from {:?}: {}", path, err);
                None
            }
        }
    }
}

impl PersistenceGateway for RonSnapshotStore {
    fn load(&self) -> Vec<Posting> {
        let path = self.path();
        let Some(content) = Self::read(&path) else {
            return Vec::new();
        };

        let state: PersistedState = match ron::from_str(&content) {
            Ok(state) => state,
            Err(err) => {
                gig_warn!("Failed to parse persisted snapshot from {:?}: {}", path, err);
                return Vec::new();
            }
        };

        let postings: Vec<Posting> = state.postings.into_iter().map(Posting::from).collect();
        gig_info!("Loaded {} persisted postings from {:?}", postings.len(), path);
        postings
    }

    fn save(&self, postings: &[Posting]) -> Result<(), PersistError> {
        let state = PersistedState {
            postings: postings.iter().map(PersistedPosting::from).collect(),
        };

        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&state, pretty)
            .map_err(|err| PersistError::Encode(err.to_string()))?;

        let writer = AtomicFileWriter::new(self.state_dir.clone());
        let target = writer.write(STATE_FILENAME, &content)?;
        gig_debug!("Persisted {} postings to {:?}", postings.len(), target);
        Ok(())
    }
}

/// In-process gateway, for tests and hosts without a writable disk.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    postings: Mutex<Vec<Posting>>,
    saves: Mutex<usize>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_postings(postings: Vec<Posting>) -> Self {
        Self {
            postings: Mutex::new(postings),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|guard| *guard).unwrap_or(0)
    }
}

impl PersistenceGateway for MemorySnapshotStore {
    fn load(&self) -> Vec<Posting> {
        self.postings
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn save(&self, postings: &[Posting]) -> Result<(), PersistError> {
        let mut guard = self
            .postings
            .lock()
            .map_err(|_| PersistError::Encode("snapshot lock poisoned".to_string()))?;
        *guard = postings.to_vec();
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }
}
