use std::path::PathBuf;

use thiserror::Error;

use crate::store::BoxError;

/// Everything that can abort an invocation. A missing aggregate object is not
/// an error: the store reports it as `Ok(None)` and the appender takes the
/// create path.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to measure artifact `{path}`")]
    Measure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode metrics records")]
    Encode(#[from] serde_json::Error),

    #[error("failed to fetch existing metrics object `{key}`")]
    Fetch {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("existing metrics object `{key}` is not valid gzip data")]
    Decompress {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compress metrics payload")]
    Compress(#[source] std::io::Error),

    #[error("failed to upload metrics object `{key}`")]
    Put {
        key: String,
        #[source]
        source: BoxError,
    },
}
