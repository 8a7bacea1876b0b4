use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::HarvestError;
use crate::vacancies::domain::{Vacancy, VacancyCategory};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

const USER_AGENT: &str = "HH-User-Agent";

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Search results requested per page.
    pub per_page: u32,
    /// Pages fetched per category before giving up.
    pub max_pages: u32,
    /// Pause between detail requests. The API rate-limits aggressive clients.
    pub pause: Duration,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            per_page: 100,
            max_pages: 20,
            pause: Duration::from_secs(1),
        }
    }
}

/// Client for the vacancy search API.
pub struct HarvestClient {
    client: reqwest::Client,
    base_url: String,
    options: HarvestOptions,
}

impl HarvestClient {
    pub fn new(options: HarvestOptions) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, options)
    }

    pub fn with_base_url(base_url: impl Into<String>, options: HarvestOptions) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            options,
        }
    }

    /// Collect postings for one category: page through the search results,
    /// fetch each vacancy's detail record, and keep its name plus listed key
    /// skills. Postings without an id or without any skills are skipped, as
    /// are detail fetches that come back non-2xx.
    pub async fn collect(&self, category: VacancyCategory) -> Result<Vec<Vacancy>, HarvestError> {
        let mut collected = Vec::new();

        for page in 0..self.options.max_pages {
            let batch = self.search_page(category, page).await?;
            if batch.items.is_empty() {
                break;
            }

            for item in batch.items {
                let Some(id) = item.id else { continue };
                let Some(detail) = self.vacancy_detail(&id).await? else {
                    continue;
                };

                let skills: Vec<String> = detail
                    .key_skills
                    .into_iter()
                    .map(|skill| skill.name)
                    .collect();
                if skills.is_empty() {
                    continue;
                }

                collected.push(Vacancy {
                    name: detail.name,
                    skills,
                });
                debug!(%category, collected = collected.len(), "vacancy recorded");

                sleep(self.options.pause).await;
            }
        }

        info!(%category, records = collected.len(), "category harvest finished");
        Ok(collected)
    }

    async fn search_page(
        &self,
        category: VacancyCategory,
        page: u32,
    ) -> Result<SearchPage, HarvestError> {
        let url = format!("{}/vacancies", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("text", format!("NAME:({})", category.search_query())),
                ("per_page", self.options.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| HarvestError::Http {
                url: url.clone(),
                source,
            })?;

        response
            .json()
            .await
            .map_err(|source| HarvestError::Decode { url, source })
    }

    async fn vacancy_detail(&self, id: &str) -> Result<Option<VacancyDetail>, HarvestError> {
        let url = format!("{}/vacancies/{id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            warn!(%url, status = %response.status(), "detail fetch skipped");
            return Ok(None);
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|source| HarvestError::Decode { url, source })
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VacancyDetail {
    #[serde(default)]
    name: String,
    #[serde(default)]
    key_skills: Vec<KeySkill>,
}

#[derive(Debug, Deserialize)]
struct KeySkill {
    name: String,
}
