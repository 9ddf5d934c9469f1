use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use spinner_core::providers::{Photo, PhotoProvider, ProviderError};

use super::{check_status, http_client, request_error};

/// Unsplash photo search. Without an access key every call fails with
/// `NotConfigured` so the caller can go straight to its fallback.
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashClient {
    pub fn new(base_url: impl Into<String>, access_key: Option<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
            access_key: access_key.filter(|k| !k.trim().is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    id: String,
    description: Option<String>,
    alt_description: Option<String>,
    urls: PhotoUrls,
    user: Option<Photographer>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
    small: String,
}

#[derive(Debug, Deserialize)]
struct Photographer {
    name: Option<String>,
    links: Option<PhotographerLinks>,
}

#[derive(Debug, Deserialize)]
struct PhotographerLinks {
    html: Option<String>,
}

impl From<UnsplashPhoto> for Photo {
    fn from(p: UnsplashPhoto) -> Self {
        let (photographer, photographer_url) = match p.user {
            Some(user) => (user.name, user.links.and_then(|l| l.html)),
            None => (None, None),
        };
        Photo {
            id: p.id,
            url: p.urls.regular,
            thumb_url: p.urls.small,
            description: p.description.or(p.alt_description),
            photographer,
            photographer_url,
        }
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    async fn search(&self, keyword: &str, count: u8) -> Result<Vec<Photo>, ProviderError> {
        let key = self.access_key.as_deref().ok_or(ProviderError::NotConfigured("unsplash"))?;

        let resp = self
            .client
            .get(format!("{}/search/photos", self.base_url.trim_end_matches('/')))
            .header(reqwest::header::AUTHORIZATION, format!("Client-ID {}", key))
            .query(&[
                ("query", keyword.to_string()),
                ("per_page", count.to_string()),
                ("orientation", "landscape".to_string()),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let body: SearchResponse = check_status(resp, keyword)?.json().await.map_err(request_error)?;
        Ok(body.results.into_iter().map(Photo::from).collect())
    }
}
