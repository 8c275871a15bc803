//! Gig board core: listing state, selection bookkeeping and the pure
//! message/update loop driven by the host.
mod effect;
mod filter;
mod format;
mod ledger;
mod msg;
mod posting;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{filter, FilterView};
pub use format::{
    book_button_label, booking_summary, kopecks_label, posted_date_label, posted_time_label,
    rounded_price, salary_label, to_kopecks, BookingSummary, BOOKING_TITLE, BOOK_BUTTON_EMPTY_LABEL,
};
pub use ledger::{SelectionAggregate, SelectionLedger, Toggle};
pub use msg::{LoadFailure, LoadFailureKind, LogoSource, Msg};
pub use posting::{ListingOrigin, Posting, PostingId};
pub use state::{AppState, LoadStatus};
pub use store::{ListingStore, UnknownPosting};
pub use update::update;
pub use view_model::{AppViewModel, BookButtonView, LogoView, PostingRowView};
