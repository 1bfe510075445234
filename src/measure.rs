//! Produces a [`MetricsBatch`] from the on-disk sizes of a platform's
//! artifacts.

use std::fs;

use chrono::Utc;
use tracing::debug;

use crate::artifact::Artifact;
use crate::error::MetricsError;
use crate::record::{MetricsBatch, Platform, SizeRecord};

/// Measures every artifact in input order. All records share one UTC date
/// captured at the start of the call. A missing or unreadable path aborts the
/// whole measurement; no partial batch is produced.
pub fn measure(
    sdk: &str,
    platform: Platform,
    artifacts: &[Artifact],
) -> Result<MetricsBatch, MetricsError> {
    let created_at = Utc::now().date_naive();

    let mut records = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let meta = fs::metadata(&artifact.path).map_err(|source| MetricsError::Measure {
            path: artifact.path.clone(),
            source,
        })?;
        debug!(variant = %artifact.variant, size = meta.len(), "measured artifact");
        records.push(SizeRecord {
            sdk: sdk.to_string(),
            platform,
            arch: artifact.variant.clone(),
            size: meta.len(),
            created_at,
        });
    }
    Ok(MetricsBatch::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sizes_match_files_in_input_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        fs::write(&a, vec![0u8; 1024]).unwrap();
        fs::write(&b, vec![0u8; 37]).unwrap();

        let artifacts = vec![Artifact::new("arm64", &a), Artifact::new("armv7", &b)];
        let batch = measure("maps", Platform::Android, &artifacts).unwrap();

        let records = batch.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].arch, "arm64");
        assert_eq!(records[0].size, 1024);
        assert_eq!(records[1].arch, "armv7");
        assert_eq!(records[1].size, 37);
    }

    #[test]
    fn all_records_share_one_date_and_platform() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "x").unwrap();
        fs::write(&b, "y").unwrap();

        let artifacts = vec![Artifact::new("universal", &a), Artifact::new("arm64", &b)];
        let batch = measure("maps", Platform::Ios, &artifacts).unwrap();

        let records = batch.records();
        assert_eq!(records[0].created_at, records[1].created_at);
        assert_eq!(records[0].platform, Platform::Ios);
        assert_eq!(records[1].platform, Platform::Ios);
    }

    #[test]
    fn missing_path_fails_the_whole_batch() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("present");
        fs::write(&present, "x").unwrap();
        let missing = dir.path().join("missing");

        let artifacts = vec![
            Artifact::new("aar", &present),
            Artifact::new("armv7", &missing),
        ];
        let err = measure("maps", Platform::Android, &artifacts).unwrap_err();
        match err {
            MetricsError::Measure { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Measure error, got {other:?}"),
        }
    }
}
