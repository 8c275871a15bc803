/// Opaque identifier of a posting, stable across fetches.
pub type PostingId = String;

/// One short-term job listing.
///
/// `selected` is the only field that changes after a posting is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub id: PostingId,
    pub profession: String,
    pub employer: String,
    pub salary: f64,
    /// Wire timestamp, `yyyy-MM-ddTHH:mm:ssZ` in UTC.
    pub posted_at: String,
    pub logo_url: Option<String>,
    pub selected: Option<bool>,
}

impl Posting {
    /// Absent and `false` both mean "not selected".
    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or(false)
    }

    pub(crate) fn matches_query(&self, lowered_query: &str) -> bool {
        self.profession.to_lowercase().contains(lowered_query)
            || self.employer.to_lowercase().contains(lowered_query)
    }
}

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOrigin {
    /// Restored from the persisted snapshot; selection flags kept verbatim.
    Restored,
    /// Fresh from the remote source; selection flags reset.
    Fetched,
}
