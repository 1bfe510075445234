//! Appends a platform's batch to the per-build aggregate object with a
//! read-merge-write: fetch the existing blob, gunzip, concatenate, gzip,
//! overwrite. Not atomic — two writers that fetch the same pre-state race,
//! and the later put wins. The CI pipeline accepts that.

use std::io::{Read, Write};
use std::sync::Arc;

use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use tracing::info;

use crate::error::MetricsError;
use crate::record::MetricsBatch;
use crate::store::{ObjectStore, PutOptions};

pub struct MetricsAppender {
    store: Arc<dyn ObjectStore>,
    prefix: String,
}

impl MetricsAppender {
    pub fn new(store: Arc<dyn ObjectStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn key_for(&self, build_id: &str) -> String {
        format!("{}/{build_id}.json.gz", self.prefix)
    }

    /// Merges `batch` into the aggregate object for `build_id`, creating it
    /// when absent. Appending the same batch twice stores it twice.
    pub async fn append(&self, build_id: &str, batch: &MetricsBatch) -> Result<(), MetricsError> {
        let key = self.key_for(build_id);
        let lines = batch.to_ndjson()?;

        let existing =
            self.store
                .get_object(&key)
                .await
                .map_err(|source| MetricsError::Fetch {
                    key: key.clone(),
                    source,
                })?;

        let merged = match existing {
            None => {
                info!(%key, records = batch.len(), "creating new metrics object");
                lines
            }
            Some(bytes) => {
                let text =
                    gunzip_to_string(&bytes).map_err(|source| MetricsError::Decompress {
                        key: key.clone(),
                        source,
                    })?;
                info!(%key, records = batch.len(), "appending to existing metrics object");
                format!("{text}\n{lines}")
            }
        };

        let body = gzip(merged.as_bytes()).map_err(MetricsError::Compress)?;
        self.store
            .put_object(&key, &body, &PutOptions::default())
            .await
            .map_err(|source| MetricsError::Put { key, source })?;
        Ok(())
    }
}

fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn gunzip_to_string(data: &[u8]) -> std::io::Result<String> {
    let mut text = String::new();
    GzDecoder::new(data).read_to_string(&mut text)?;
    Ok(text)
}
