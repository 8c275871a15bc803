use std::collections::HashMap;

use gig_logging::{gig_debug, gig_warn};

use crate::{ListingOrigin, Posting, PostingId};

/// Returned when an id does not resolve to a posting in the store.
///
/// This only happens when the caller holds ids from a stale render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no posting with id {0:?}")]
pub struct UnknownPosting(pub PostingId);

/// Authoritative ordered collection of postings for the session.
///
/// Filtered views never copy postings out of here; they address entries by
/// index or id, so there is exactly one `selected` flag per id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingStore {
    postings: Vec<Posting>,
    index: HashMap<PostingId, usize>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from a loaded collection.
    ///
    /// Fetched postings start unselected; restored ones keep their flag.
    /// Later duplicates of an id are dropped.
    pub fn from_postings(postings: Vec<Posting>, origin: ListingOrigin) -> Self {
        let mut store = Self::new();
        for mut posting in postings {
            if store.index.contains_key(&posting.id) {
                gig_warn!("Dropping duplicate posting id {:?}", posting.id);
                continue;
            }
            if origin == ListingOrigin::Fetched {
                posting.selected = Some(false);
            }
            store.index.insert(posting.id.clone(), store.postings.len());
            store.postings.push(posting);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Posting> {
        self.index.get(id).map(|&idx| &self.postings[idx])
    }

    /// Sets the selection flag of the posting with `id`.
    pub fn apply_selection(&mut self, id: &str, selected: bool) -> Result<(), UnknownPosting> {
        let Some(&idx) = self.index.get(id) else {
            gig_warn!("Selection change for unknown posting {:?}; view and store out of sync", id);
            return Err(UnknownPosting(id.to_string()));
        };
        gig_debug!("Posting {:?} selected={}", id, selected);
        self.postings[idx].selected = Some(selected);
        Ok(())
    }

    /// The full ordered collection, as rendered unfiltered and as persisted.
    pub fn snapshot_all(&self) -> &[Posting] {
        &self.postings
    }

    /// Distinct logo URLs in posting order.
    pub fn logo_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = Vec::new();
        for url in self.postings.iter().filter_map(|p| p.logo_url.as_ref()) {
            if !urls.contains(url) {
                urls.push(url.clone());
            }
        }
        urls
    }
}
