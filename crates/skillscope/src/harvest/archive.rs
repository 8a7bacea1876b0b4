use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use super::HarvestError;
use crate::vacancies::domain::{Vacancy, VacancyCategory};

/// Written next to the dataset files so consumers can tell how fresh they are.
#[derive(Debug, Serialize)]
pub struct DatasetManifest {
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub category: VacancyCategory,
    pub file: String,
    pub records: usize,
}

/// Write one pretty-printed `<slug>_vacancies.json` per harvested category
/// plus a `manifest.json`, in the layout the loader reads back.
pub fn write_datasets(
    dir: impl AsRef<Path>,
    collected: &[(VacancyCategory, Vec<Vacancy>)],
) -> Result<DatasetManifest, HarvestError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| HarvestError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for (category, vacancies) in collected {
        let file = category.dataset_file_name();
        let path = dir.join(&file);
        write_pretty(&path, vacancies)?;
        info!(category = %category, records = vacancies.len(), path = %path.display(), "dataset written");
        entries.push(ManifestEntry {
            category: *category,
            file,
            records: vacancies.len(),
        });
    }

    let manifest = DatasetManifest {
        generated_at: Utc::now(),
        categories: entries,
    };
    write_pretty(&dir.join("manifest.json"), &manifest)?;
    Ok(manifest)
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), HarvestError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| HarvestError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| HarvestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skillscope-{tag}-{}", std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("stale scratch dir removed");
        }
        dir
    }

    #[test]
    fn manifest_records_every_written_category() {
        let dir = scratch_dir("archive");
        let collected = vec![(
            VacancyCategory::Backend,
            vec![Vacancy {
                name: "Backend developer".to_string(),
                skills: vec!["rust".to_string()],
            }],
        )];

        let manifest = write_datasets(&dir, &collected).expect("datasets written");

        assert_eq!(manifest.categories.len(), 1);
        assert_eq!(manifest.categories[0].file, "backend_vacancies.json");
        assert_eq!(manifest.categories[0].records, 1);
        assert!(dir.join("backend_vacancies.json").exists());
        assert!(dir.join("manifest.json").exists());

        fs::remove_dir_all(&dir).expect("scratch dir removed");
    }
}
