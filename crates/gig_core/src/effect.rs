use crate::Posting;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Restore the persisted snapshot, or fetch when there is none.
    LoadListing,
    /// Write the full collection to durable storage.
    PersistSnapshot(Vec<Posting>),
    /// Resolve a logo image through the cache.
    LoadLogo { url: String },
}
