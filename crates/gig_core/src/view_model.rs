use crate::{BookingSummary, LoadStatus, PostingId, SelectionAggregate};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub status: LoadStatus,
    pub query: String,
    /// Rows of the filtered projection, in store order.
    pub rows: Vec<PostingRowView>,
    pub total_count: usize,
    pub visible_count: usize,
    pub selection: SelectionAggregate,
    pub total_label: String,
    pub book_button: BookButtonView,
    pub notice: Option<String>,
    pub booking: Option<BookingSummary>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookButtonView {
    pub enabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoView {
    Pending,
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingRowView {
    pub id: PostingId,
    pub profession: String,
    pub employer: String,
    pub salary_label: String,
    pub date_label: String,
    pub time_label: String,
    pub selected: bool,
    pub logo: LogoView,
}
