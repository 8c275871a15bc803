use crate::format::to_kopecks;
use crate::store::{ListingStore, UnknownPosting};
use crate::PostingId;

/// Count and salary sum of the selected postings.
///
/// The sum is kept in whole kopecks so it does not depend on tap order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionAggregate {
    pub count: usize,
    pub total_kopecks: i64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LedgerEntry {
    id: PostingId,
    kopecks: i64,
}

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

/// Selected postings in the order the user picked them.
///
/// Entries are matched by id only; salary is copied in since it never
/// changes after load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionLedger {
    entries: Vec<LedgerEntry>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the ledger from the store's flags, in store order.
    pub fn from_store(store: &ListingStore) -> Self {
        let entries = store
            .snapshot_all()
            .iter()
            .filter(|posting| posting.is_selected())
            .map(|posting| LedgerEntry {
                id: posting.id.clone(),
                kopecks: to_kopecks(posting.salary),
            })
            .collect();
        Self { entries }
    }

    /// Flips the selection of `id` in the store and mirrors it here.
    ///
    /// The store's flag decides the direction, so the ledger can never hold an
    /// id whose flag is false.
    pub fn toggle(&mut self, store: &mut ListingStore, id: &str) -> Result<Toggle, UnknownPosting> {
        let (now_selected, salary) = match store.get(id) {
            Some(posting) => (!posting.is_selected(), posting.salary),
            None => return Err(UnknownPosting(id.to_string())),
        };
        store.apply_selection(id, now_selected)?;

        if now_selected {
            if !self.contains(id) {
                self.entries.push(LedgerEntry {
                    id: id.to_string(),
                    kopecks: to_kopecks(salary),
                });
            }
            Ok(Toggle::Selected)
        } else {
            self.entries.retain(|entry| entry.id != id);
            Ok(Toggle::Deselected)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn aggregate(&self) -> SelectionAggregate {
        let total_kopecks: i64 = self.entries.iter().map(|entry| entry.kopecks).sum();
        SelectionAggregate {
            count: self.entries.len(),
            total_kopecks,
            total: total_kopecks as f64 / 100.0,
        }
    }
}
