use std::io::Cursor;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use gig_core::Posting;
use gig_logging::{gig_debug, gig_info, gig_warn};
use image::ImageReader;
use reqwest::StatusCode;

use crate::wire::decode_postings;
use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Upper bound for the listing body.
    pub max_listing_bytes: u64,
    /// Upper bound for a single logo image.
    pub max_image_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_listing_bytes: 2 * 1024 * 1024,
            max_image_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Remote origin of postings and their logos.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    /// One round trip to the listing endpoint. No retry.
    async fn fetch_all(&self) -> Result<Vec<Posting>, FetchError>;

    /// `None` means "use the fallback image"; it is never an error.
    async fn fetch_image(&self, url: &str) -> Option<Bytes>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobSource {
    endpoint: String,
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestJobSource {
    pub fn new(endpoint: impl Into<String>, settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            settings,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn read_limited(
        response: reqwest::Response,
        max_bytes: u64,
    ) -> Result<Bytes, FetchError> {
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body.freeze())
    }
}

/// Whether `bytes` decode as a raster image. The format is sniffed from the
/// content, so a wrong `Content-Type` neither admits nor rejects a logo.
fn decodes_as_image(bytes: &[u8]) -> bool {
    let reader = match ImageReader::new(Cursor::new(bytes)).with_guessed_format() {
        Ok(reader) => reader,
        Err(_) => return false,
    };
    if reader.format().is_none() {
        return false;
    }
    reader.decode().is_ok()
}

#[async_trait::async_trait]
impl JobSource for ReqwestJobSource {
    async fn fetch_all(&self) -> Result<Vec<Posting>, FetchError> {
        let parsed = reqwest::Url::parse(&self.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::new(FailureKind::NotFound, self.endpoint.clone()));
        }
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = Self::read_limited(response, self.settings.max_listing_bytes).await?;
        let postings = decode_postings(&body)?;
        gig_info!("Fetched {} postings from {}", postings.len(), self.endpoint);
        Ok(postings)
    }

    async fn fetch_image(&self, url: &str) -> Option<Bytes> {
        let parsed = match reqwest::Url::parse(url) {
            Ok(parsed) => parsed,
            Err(err) => {
                gig_warn!("Skipping logo with invalid url {:?}: {}", url, err);
                return None;
            }
        };

        let response = match self.client.get(parsed).send().await {
            Ok(response) => response,
            Err(err) => {
                gig_warn!("Failed to load logo {}: {}", url, map_reqwest_error(err));
                return None;
            }
        };

        if !response.status().is_success() {
            gig_debug!("Logo {} answered {}", url, response.status());
            return None;
        }

        let bytes = match Self::read_limited(response, self.settings.max_image_bytes).await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => return None,
            Err(err) => {
                gig_warn!("Failed to read logo {}: {}", url, err);
                return None;
            }
        };

        let candidate = bytes.clone();
        match tokio::task::spawn_blocking(move || decodes_as_image(&candidate)).await {
            Ok(true) => Some(bytes),
            Ok(false) => {
                gig_debug!("Logo {} does not decode as an image", url);
                None
            }
            Err(err) => {
                gig_warn!("Logo decode task for {} failed: {}", url, err);
                None
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return FetchError::new(FailureKind::InvalidUrl, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
