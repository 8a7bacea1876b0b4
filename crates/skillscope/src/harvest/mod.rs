//! Collects fresh vacancy datasets from the public search API and writes
//! them in the layout the loader expects.

mod archive;
mod client;

pub use archive::{write_datasets, DatasetManifest, ManifestEntry};
pub use client::{HarvestClient, HarvestOptions, DEFAULT_BASE_URL};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("requesting {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("decoding response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("encoding {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
