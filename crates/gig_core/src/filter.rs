use crate::Posting;

/// Read-only projection of the store for a search query.
///
/// Holds indices into the source slice rather than postings, so an entry
/// reached through the projection is the store's own posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    indices: Vec<usize>,
}

impl FilterView {
    /// Case-insensitive substring match on profession or employer.
    /// An empty query keeps every posting in source order.
    pub fn compute(query: &str, source: &[Posting]) -> Self {
        if query.is_empty() {
            return Self {
                indices: (0..source.len()).collect(),
            };
        }
        let lowered = query.to_lowercase();
        let indices = source
            .iter()
            .enumerate()
            .filter(|(_, posting)| posting.matches_query(&lowered))
            .map(|(idx, _)| idx)
            .collect();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves the projection against the slice it was computed from.
    pub fn iter<'a>(&'a self, source: &'a [Posting]) -> impl Iterator<Item = &'a Posting> + 'a {
        self.indices.iter().filter_map(move |&idx| source.get(idx))
    }
}

/// Convenience form of [`FilterView::compute`] returning borrowed postings.
pub fn filter<'a>(query: &str, source: &'a [Posting]) -> Vec<&'a Posting> {
    FilterView::compute(query, source)
        .indices
        .into_iter()
        .filter_map(|idx| source.get(idx))
        .collect()
}
