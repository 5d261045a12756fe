//! Photo lookup for the current meal.

use futures::future::{BoxFuture, FutureExt};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ImageConfig;
use crate::error::ImageFetchError;

/// Finds one representative photo URL for a search query.
///
/// The returned future must own everything it needs; it is spawned and may
/// outlive the call.
pub trait ImageSource {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<String, ImageFetchError>>;
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

/// The response shapes Unsplash uses across its photo endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PhotoPayload {
    /// `/search/photos`
    Search { results: Vec<Photo> },
    /// `/photos/random?count=n`
    Many(Vec<Photo>),
    /// `/photos/random`
    One(Photo),
}

/// Extract the first photo's regular-size URL from a provider response body.
fn parse_photo_payload(body: &[u8]) -> Result<String, ImageFetchError> {
    let payload: PhotoPayload = serde_json::from_slice(body)?;
    let first = match payload {
        PhotoPayload::Search { results } => results.into_iter().next(),
        PhotoPayload::Many(photos) => photos.into_iter().next(),
        PhotoPayload::One(photo) => Some(photo),
    };
    first
        .map(|photo| photo.urls.regular)
        .ok_or(ImageFetchError::NoResults)
}

/// Unsplash client. One attempt per call, no retries.
#[derive(Clone, Debug)]
pub struct UnsplashClient {
    client: Client,
    config: ImageConfig,
}

impl UnsplashClient {
    pub fn new(config: ImageConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn with_client(client: Client, config: ImageConfig) -> Self {
        Self { client, config }
    }

    /// `<endpoint>?query=<query>&client_id=<key>`, with both values url-encoded.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("client_id", self.config.access_key.expose());
        debug!(
            endpoint = %self.config.endpoint,
            query,
            "built image search request"
        );
        url
    }
}

async fn fetch_photo(client: Client, url: Url) -> Result<String, ImageFetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ImageFetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    parse_photo_payload(&body)
}

impl ImageSource for UnsplashClient {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<String, ImageFetchError>> {
        let url = self.request_url(query);
        let client = self.client.clone();
        let query = query.to_string();

        async move {
            let result = fetch_photo(client, url).await;
            match &result {
                Ok(photo) => debug!(%query, %photo, "image lookup succeeded"),
                Err(e) => warn!(%query, "image lookup failed: {}", e),
            }
            result
        }
        .boxed()
    }
}
