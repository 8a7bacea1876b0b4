use futures::future::try_join_all;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::domain::{Vacancy, VacancyCategory};
use super::frequency::SkillFrequencies;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("fetching {category} dataset from {url}: {source}")]
    Http {
        category: VacancyCategory,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {category} dataset: {source}")]
    Parse {
        category: VacancyCategory,
        #[source]
        source: serde_json::Error,
    },
}

/// Records and pre-computed frequencies for one category.
#[derive(Debug)]
pub struct CategoryRecords {
    vacancies: Vec<Vacancy>,
    frequencies: SkillFrequencies,
}

impl CategoryRecords {
    fn new(vacancies: Vec<Vacancy>) -> Self {
        let frequencies = SkillFrequencies::count(&vacancies);
        Self {
            vacancies,
            frequencies,
        }
    }

    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn frequencies(&self) -> &SkillFrequencies {
        &self.frequencies
    }
}

/// The per-session dataset cache: every loaded category's records with its
/// frequency table computed once up front. Read-only after construction.
#[derive(Debug, Default)]
pub struct SkillDataset {
    categories: HashMap<VacancyCategory, CategoryRecords>,
}

impl SkillDataset {
    /// Build the cache from already-parsed record collections, computing one
    /// frequency table per category.
    pub fn from_collections(
        collections: impl IntoIterator<Item = (VacancyCategory, Vec<Vacancy>)>,
    ) -> Self {
        let categories = collections
            .into_iter()
            .map(|(category, vacancies)| (category, CategoryRecords::new(vacancies)))
            .collect();
        Self { categories }
    }

    /// Load every category's `<slug>_vacancies.json` from `dir`. A missing or
    /// malformed file fails the whole load and no dataset is produced.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        let mut collections = Vec::new();

        for category in VacancyCategory::ordered() {
            let path = dir.join(category.dataset_file_name());
            let raw = fs::read_to_string(&path).map_err(|source| DatasetError::Read {
                path: path.clone(),
                source,
            })?;
            collections.push((category, parse_vacancies(category, &raw)?));
        }

        let dataset = Self::from_collections(collections);
        info!(
            records = dataset.total_records(),
            dir = %dir.display(),
            "vacancy datasets loaded"
        );
        Ok(dataset)
    }

    pub fn records(&self, category: VacancyCategory) -> Option<&CategoryRecords> {
        self.categories.get(&category)
    }

    pub fn frequencies(&self, category: VacancyCategory) -> Option<&SkillFrequencies> {
        self.categories
            .get(&category)
            .map(CategoryRecords::frequencies)
    }

    pub fn total_records(&self) -> usize {
        self.categories
            .values()
            .map(|records| records.vacancies().len())
            .sum()
    }
}

/// Parse one category's dataset document, an array of vacancy records.
pub fn parse_vacancies(
    category: VacancyCategory,
    raw: &str,
) -> Result<Vec<Vacancy>, DatasetError> {
    serde_json::from_str(raw).map_err(|source| DatasetError::Parse { category, source })
}

/// Fetches the per-category dataset documents over HTTP.
///
/// All categories are requested concurrently and joined all-or-nothing: one
/// failed retrieval fails the entire load and no dataset is produced. There
/// are no retries and no timeouts.
#[derive(Debug, Clone)]
pub struct DatasetFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl DatasetFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn load_all(&self) -> Result<SkillDataset, DatasetError> {
        let fetches = VacancyCategory::ordered().map(|category| self.fetch_category(category));
        let collections = try_join_all(fetches).await?;

        let dataset = SkillDataset::from_collections(collections);
        info!(
            records = dataset.total_records(),
            base = %self.base_url,
            "vacancy datasets fetched"
        );
        Ok(dataset)
    }

    async fn fetch_category(
        &self,
        category: VacancyCategory,
    ) -> Result<(VacancyCategory, Vec<Vacancy>), DatasetError> {
        let url = format!("{}/data/{}", self.base_url, category.dataset_file_name());
        let http_error = |source| DatasetError::Http {
            category,
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?;
        let raw = response.text().await.map_err(http_error)?;

        Ok((category, parse_vacancies(category, &raw)?))
    }
}
