use gig_core::Posting;
use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// One element of the listing endpoint's JSON array.
#[derive(Debug, Deserialize)]
struct WirePosting {
    id: String,
    profession: String,
    employer: String,
    salary: f64,
    date: String,
    #[serde(default)]
    logo: Option<String>,
}

/// Decodes the endpoint body. Every posting comes back unselected.
pub fn decode_postings(body: &[u8]) -> Result<Vec<Posting>, FetchError> {
    let wire: Vec<WirePosting> = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    wire.into_iter()
        .map(|item| {
            if !item.salary.is_finite() || item.salary < 0.0 {
                return Err(FetchError::new(
                    FailureKind::Decode,
                    format!("posting {} has invalid salary {}", item.id, item.salary),
                ));
            }
            Ok(Posting {
                id: item.id,
                profession: item.profession,
                employer: item.employer,
                salary: item.salary,
                posted_at: item.date,
                logo_url: item.logo,
                selected: Some(false),
            })
        })
        .collect()
}
