use crate::{ListingOrigin, Posting, PostingId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Host finished wiring; start loading the listing.
    Started,
    /// Listing available, either restored or freshly fetched.
    ListingLoaded {
        origin: ListingOrigin,
        postings: Vec<Posting>,
    },
    /// Remote fetch failed and there was nothing persisted.
    ListingFailed(LoadFailure),
    /// User edited the search box.
    QueryChanged(String),
    /// User tapped a posting card.
    PostingTapped { id: PostingId },
    /// User pressed the book button.
    BookClicked,
    /// User acknowledged the current notice or booking summary.
    NoticeDismissed,
    /// A logo finished resolving.
    LogoLoaded { url: String, source: LogoSource },
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureKind {
    InvalidUrl,
    NotFound,
    Transport,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadFailureKind,
    pub message: String,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.kind {
            LoadFailureKind::InvalidUrl => "invalid listing url",
            LoadFailureKind::NotFound => "listing not found",
            LoadFailureKind::Transport => "could not reach the listing server",
            LoadFailureKind::Decode => "listing response was malformed",
        };
        write!(f, "{}: {}", label, self.message)
    }
}
