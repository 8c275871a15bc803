use gig_core::{ListingOrigin, ListingStore};
use gig_logging::{gig_error, gig_info};

use crate::{FetchError, JobSource, ListingLoad, PersistenceGateway};

/// Startup load: a stored snapshot wins as-is; otherwise fetch, reset
/// selection, drop repeated ids and write the result through.
///
/// An empty stored snapshot counts as "nothing stored".
pub async fn load_listing(
    gateway: &dyn PersistenceGateway,
    source: &dyn JobSource,
) -> Result<ListingLoad, FetchError> {
    let stored = gateway.load();
    if !stored.is_empty() {
        gig_info!("Restoring {} postings from snapshot", stored.len());
        return Ok(ListingLoad {
            origin: ListingOrigin::Restored,
            postings: stored,
        });
    }

    let fetched = source.fetch_all().await?;
    let postings = ListingStore::from_postings(fetched, ListingOrigin::Fetched)
        .snapshot_all()
        .to_vec();

    if let Err(err) = gateway.save(&postings) {
        gig_error!("Failed to persist fetched postings: {}", err);
    }

    Ok(ListingLoad {
        origin: ListingOrigin::Fetched,
        postings,
    })
}
