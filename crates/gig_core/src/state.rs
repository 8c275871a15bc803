use std::collections::BTreeMap;

use crate::filter::FilterView;
use crate::format::{self, BookingSummary};
use crate::ledger::{SelectionLedger, Toggle};
use crate::store::{ListingStore, UnknownPosting};
use crate::view_model::{AppViewModel, BookButtonView, LogoView, PostingRowView};
use crate::{ListingOrigin, LoadFailure, LogoSource, Posting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready(ListingOrigin),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    status: LoadStatus,
    store: ListingStore,
    ledger: SelectionLedger,
    query: String,
    logos: BTreeMap<String, LogoSource>,
    notice: Option<String>,
    booking: Option<BookingSummary>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    /// Full ordered collection, the unit written to durable storage.
    pub fn snapshot(&self) -> Vec<Posting> {
        self.store.snapshot_all().to_vec()
    }

    pub fn view(&self) -> AppViewModel {
        let source = self.store.snapshot_all();
        let filtered = FilterView::compute(&self.query, source);
        let rows: Vec<PostingRowView> = filtered
            .iter(source)
            .map(|posting| self.row_view(posting))
            .collect();
        let selection = self.ledger.aggregate();

        AppViewModel {
            status: self.status,
            query: self.query.clone(),
            total_count: source.len(),
            visible_count: rows.len(),
            rows,
            selection,
            total_label: format::kopecks_label(selection.total_kopecks),
            book_button: BookButtonView {
                enabled: selection.count > 0,
                label: format::book_button_label(selection.count),
            },
            notice: self.notice.clone(),
            booking: self.booking.clone(),
            dirty: self.dirty,
        }
    }

    fn row_view(&self, posting: &Posting) -> PostingRowView {
        let logo = match posting.logo_url.as_ref() {
            None => LogoView::Fallback,
            Some(url) => match self.logos.get(url) {
                None => LogoView::Pending,
                Some(LogoSource::Remote) => LogoView::Remote,
                Some(LogoSource::Fallback) => LogoView::Fallback,
            },
        };
        PostingRowView {
            id: posting.id.clone(),
            profession: posting.profession.clone(),
            employer: posting.employer.clone(),
            salary_label: format::salary_label(posting.salary),
            date_label: format::posted_date_label(&posting.posted_at),
            time_label: format::posted_time_label(&posting.posted_at),
            selected: posting.is_selected(),
            logo,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) -> bool {
        match self.status {
            LoadStatus::Idle | LoadStatus::Failed => {
                self.status = LoadStatus::Loading;
                self.mark_dirty();
                true
            }
            LoadStatus::Loading | LoadStatus::Ready(_) => false,
        }
    }

    /// Installs a loaded collection and rebuilds the ledger from its flags.
    pub(crate) fn install_listing(&mut self, origin: ListingOrigin, postings: Vec<Posting>) {
        self.store = ListingStore::from_postings(postings, origin);
        self.ledger = SelectionLedger::from_store(&self.store);
        self.status = LoadStatus::Ready(origin);
        self.logos.clear();
        self.mark_dirty();
    }

    pub(crate) fn fail_listing(&mut self, failure: &LoadFailure) {
        self.store = ListingStore::new();
        self.ledger = SelectionLedger::new();
        self.status = LoadStatus::Failed;
        self.notice = Some(failure.to_string());
        self.mark_dirty();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle(&mut self, id: &str) -> Result<Toggle, UnknownPosting> {
        let toggled = self.ledger.toggle(&mut self.store, id)?;
        self.mark_dirty();
        Ok(toggled)
    }

    pub(crate) fn open_booking(&mut self) -> bool {
        if self.ledger.is_empty() {
            return false;
        }
        self.booking = Some(format::booking_summary(self.ledger.aggregate().total_kopecks));
        self.mark_dirty();
        true
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.is_some() || self.booking.is_some() {
            self.notice = None;
            self.booking = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn record_logo(&mut self, url: String, source: LogoSource) {
        if self.logos.insert(url, source) != Some(source) {
            self.mark_dirty();
        }
    }
}
