#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use bytes::Bytes;
use gig_core::Posting;
use gig_engine::{FailureKind, FetchError, JobSource};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gig_logging::initialize_for_tests);
}

pub fn posting(id: &str, salary: f64, selected: Option<bool>) -> Posting {
    Posting {
        id: id.to_string(),
        profession: format!("profession {id}"),
        employer: format!("employer {id}"),
        salary,
        posted_at: "2023-11-06T04:39:03Z".to_string(),
        logo_url: None,
        selected,
    }
}

/// Scripted job source that counts round trips.
pub struct FakeSource {
    listing: Mutex<Result<Vec<Posting>, FetchError>>,
    images: HashMap<String, Bytes>,
    fetch_calls: AtomicUsize,
    image_calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_postings(postings: Vec<Posting>) -> Self {
        Self {
            listing: Mutex::new(Ok(postings)),
            images: HashMap::new(),
            fetch_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        let source = Self::with_postings(Vec::new());
        *source.listing.lock().unwrap() = Err(FetchError {
            kind: FailureKind::Network,
            message: message.to_string(),
        });
        source
    }

    pub fn with_image(mut self, url: &str, bytes: &'static [u8]) -> Self {
        self.images.insert(url.to_string(), Bytes::from_static(bytes));
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl JobSource for FakeSource {
    async fn fetch_all(&self) -> Result<Vec<Posting>, FetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.listing.lock().unwrap().clone()
    }

    async fn fetch_image(&self, url: &str) -> Option<Bytes> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.images.get(url).cloned()
    }
}
