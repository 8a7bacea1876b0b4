use metrics_exporter_prometheus::PrometheusHandle;
use skillscope::config::AppConfig;
use skillscope::error::AppError;
use skillscope::vacancies::{DatasetFetcher, SkillDataset};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Arc<SkillDataset>,
}

/// Load every category's dataset, all-or-nothing: over HTTP when a dataset
/// base URL is configured, from the local directory otherwise.
pub(crate) async fn load_dataset(config: &AppConfig) -> Result<SkillDataset, AppError> {
    let dataset = match &config.data.base_url {
        Some(base_url) => DatasetFetcher::new(base_url.clone()).load_all().await?,
        None => SkillDataset::from_dir(&config.data.dir)?,
    };
    Ok(dataset)
}
