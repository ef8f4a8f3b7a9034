use std::collections::HashSet;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use routesync_core::{CcDomain, CcRoute, CcSpace};
use routesync_ports::{ClientResult, ControlPlaneClient};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{HttpError, read_body};

/// Largest page size the v3 API accepts
const PER_PAGE: u32 = 5000;

/// Upper bound on pages followed for a single listing
const MAX_PAGES: usize = 1000;

#[derive(Deserialize)]
struct Link {
    href: String,
}

#[derive(Deserialize)]
struct Pagination {
    next: Option<Link>,
}

#[derive(Deserialize)]
struct Page<T> {
    pagination: Pagination,
    resources: Vec<T>,
}

/// Cloud Controller v3 API client
#[derive(Clone)]
pub struct CloudControllerClient {
    client: Client,
    base_url: String,
}

impl CloudControllerClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        CloudControllerClient {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch every page of a listing, following `pagination.next`
    ///
    /// Next links must stay on the origin of `base_url` and may not repeat a
    /// page already fetched, and at most [`MAX_PAGES`] pages are followed.
    async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<Vec<T>, HttpError> {
        let first = Url::parse(&format!(
            "{}{}?per_page={}",
            self.base_url.trim_end_matches('/'),
            path,
            PER_PAGE
        ))?;
        let origin = first.origin();

        let mut next = Some(first);
        let mut visited = HashSet::new();
        let mut resources = Vec::new();

        while let Some(url) = next {
            if visited.len() >= MAX_PAGES {
                return Err(HttpError::Pagination(format!(
                    "{} exceeded {} pages",
                    path, MAX_PAGES
                )));
            }
            if !visited.insert(url.as_str().to_string()) {
                return Err(HttpError::Pagination(format!(
                    "next link {} was already fetched",
                    url
                )));
            }

            let page: Page<T> = self.get(url.as_str(), token).await?;
            debug!("GET {} returned {} resources", url, page.resources.len());
            resources.extend(page.resources);

            next = match page.pagination.next {
                Some(link) => {
                    let next_url = Url::parse(&link.href)?;
                    if next_url.origin() != origin {
                        return Err(HttpError::Pagination(format!(
                            "next link {} leaves origin {}",
                            next_url,
                            origin.ascii_serialization()
                        )));
                    }
                    Some(next_url)
                }
                None => None,
            };
        }

        Ok(resources)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T, HttpError> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let body = read_body(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ControlPlaneClient for CloudControllerClient {
    async fn list_routes(&self, token: &str) -> ClientResult<Vec<CcRoute>> {
        Ok(self.list_all("/v3/routes", token).await?)
    }

    async fn list_domains(&self, token: &str) -> ClientResult<Vec<CcDomain>> {
        Ok(self.list_all("/v3/domains", token).await?)
    }

    async fn list_spaces(&self, token: &str) -> ClientResult<Vec<CcSpace>> {
        Ok(self.list_all("/v3/spaces", token).await?)
    }
}
